// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport implementations for talking to the receiver.
//!
//! A transport performs one request/response round trip: it wraps a command
//! body in the `YAMAHA_AV` envelope, delivers it to the receiver and returns
//! the parsed reply. Transports are stateless beyond connection reuse and
//! never retry.
//!
//! - [`HttpTransport`]: YNC over HTTP POST, configured by [`HttpConfig`]

#[cfg(feature = "http")]
mod http;

#[cfg(test)]
pub(crate) mod mock;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};

use crate::command::{Command, Verb};
use crate::error::TransportError;
use crate::response::CommandResponse;

/// Trait for transports that can deliver commands to the receiver.
///
/// Futures returned by a transport must be `Send` so that the volume flush
/// can run on a spawned tokio task.
pub trait Transport: Send + Sync + 'static {
    /// Sends a command body to the receiver and returns the parsed reply.
    ///
    /// # Arguments
    ///
    /// * `verb` - `GET` for reads, `PUT` for writes
    /// * `body` - The fragment addressed to the main zone, without envelope
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request fails, the reply cannot be
    /// parsed, or the receiver rejects the command.
    fn execute(
        &self,
        verb: Verb,
        body: &str,
    ) -> impl Future<Output = Result<CommandResponse, TransportError>> + Send;

    /// Sends a typed command.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    fn send_command<C: Command>(
        &self,
        command: &C,
    ) -> impl Future<Output = Result<CommandResponse, TransportError>> + Send {
        let verb = command.verb();
        let body = command.body();
        async move { self.execute(verb, &body).await }
    }
}
