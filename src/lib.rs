// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `yamaha_remote` - Keep a Yamaha AV receiver's main zone in sync.
//!
//! This library keeps a local model of a receiver's power, volume and mute
//! state, drives changes through the YNC XML protocol over HTTP, and notifies
//! subscribers whenever a tracked property changes.
//!
//! # Supported Features
//!
//! - **Power control**: On / standby
//! - **Volume control**: 0.5 dB steps, debounced so slider input sends only
//!   the latest level
//! - **Mute control**: On / off
//! - **Refresh**: Reconcile with changes made by other remotes
//!
//! # Quick Start
//!
//! ```no_run
//! use yamaha_remote::{Receiver, Subscribable};
//!
//! #[tokio::main]
//! async fn main() -> yamaha_remote::Result<()> {
//!     // Reads the receiver's status before returning
//!     let receiver = Receiver::http("192.168.1.158").build().await?;
//!
//!     receiver.on_volume_changed(|volume| println!("volume: {volume}"));
//!
//!     receiver.set_power(true).await?;
//!     receiver.set_volume(-35.0)?;
//!     receiver.set_muted(false).await?;
//!
//!     // Pick up changes made elsewhere
//!     receiver.refresh().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Custom transports
//!
//! [`Receiver`] is generic over [`protocol::Transport`]. The HTTP transport
//! is behind the default `http` feature; any other implementation can be
//! passed to [`Receiver::new`].

pub mod command;
pub mod error;
pub mod protocol;
mod receiver;
pub mod response;
pub mod state;
pub mod subscription;
pub mod types;

pub use error::{Error, Result, TransportError, ValueError};
#[cfg(feature = "http")]
pub use protocol::{HttpConfig, HttpTransport};
pub use protocol::Transport;
#[cfg(feature = "http")]
pub use receiver::HttpReceiverBuilder;
pub use receiver::Receiver;
pub use response::{CommandResponse, StatusSnapshot};
pub use state::{DeviceState, EventKind, StateChange};
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::Volume;
