// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `yamaha_remote` library.
//!
//! Two families of failures exist: a requested value cannot be represented
//! on the receiver ([`ValueError`]), or a round trip to the receiver did not
//! complete ([`TransportError`]). Both are folded into [`Error`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A requested value was rejected before anything was sent.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The round trip to the receiver failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A decibel level is outside the range the receiver accepts.
    #[error("volume {actual} dB is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed level in dB.
        min: f64,
        /// Maximum allowed level in dB.
        max: f64,
        /// The level that was requested.
        actual: f64,
    },

    /// The requested level is NaN or infinite.
    #[error("volume must be a finite number")]
    NotFinite,
}

/// Errors raised while talking to the receiver.
///
/// Network failures, timeouts and unusable responses all end up here; the
/// transport never retries.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection refused, timeout, body read).
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The receiver answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body is not well-formed XML.
    #[error("malformed XML response: {0}")]
    Xml(String),

    /// Expected element is missing from the response.
    #[error("missing element in response: {0}")]
    MissingField(String),

    /// An element was present but its text could not be interpreted.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// Path of the element that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },

    /// The receiver processed the request and reported a non-zero return code.
    #[error("command rejected by receiver (RC={0})")]
    Rejected(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
