// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP receiver builder.

use std::time::Duration;

use crate::error::Error;
use crate::protocol::{HttpConfig, HttpTransport};
use crate::receiver::Receiver;

/// Builder for receivers reached over HTTP.
///
/// This builder can be created in two ways:
/// - `Receiver::http("host")` - Simple host string
/// - `Receiver::http_config(HttpConfig::new("host").with_port(8080))` - Advanced configuration
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use yamaha_remote::Receiver;
///
/// # async fn example() -> yamaha_remote::Result<()> {
/// // Reads the current status before returning
/// let receiver = Receiver::http("192.168.1.158").build().await?;
///
/// // Coalesce slider ticks over 100 ms, no network access yet
/// let receiver = Receiver::http("192.168.1.158")
///     .with_flush_delay(Duration::from_millis(100))
///     .build_without_refresh()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpReceiverBuilder {
    config: HttpConfig,
    flush_delay: Duration,
}

impl HttpReceiverBuilder {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            flush_delay: Duration::ZERO,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Sets the delay applied before each volume flush.
    #[must_use]
    pub fn with_flush_delay(mut self, delay: Duration) -> Self {
        self.flush_delay = delay;
        self
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the receiver and reads its current status.
    ///
    /// The cached state starts from the defaults and is reconciled against
    /// the receiver before this returns. Use
    /// [`build_without_refresh`](Self::build_without_refresh) to skip the
    /// network query.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The HTTP client cannot be created
    /// - The status query fails
    pub async fn build(self) -> Result<Receiver<HttpTransport>, Error> {
        let receiver = self.build_without_refresh()?;
        receiver.refresh().await?;
        Ok(receiver)
    }

    /// Builds the receiver without contacting it.
    ///
    /// The cached state holds the defaults (on, 0.0 dB, unmuted) until the
    /// first [`refresh`](Receiver::refresh).
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build_without_refresh(self) -> Result<Receiver<HttpTransport>, Error> {
        let transport = self.config.into_transport()?;
        Ok(Receiver::with_flush_delay(transport, self.flush_delay))
    }
}

impl Receiver<HttpTransport> {
    /// Starts building a receiver reached at `host` over HTTP.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use yamaha_remote::Receiver;
    ///
    /// # async fn example() -> yamaha_remote::Result<()> {
    /// let receiver = Receiver::http("192.168.1.158").build().await?;
    /// println!("volume is {}", receiver.volume());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn http(host: impl Into<String>) -> HttpReceiverBuilder {
        HttpReceiverBuilder::new(HttpConfig::new(host))
    }

    /// Starts building a receiver from a full HTTP configuration.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> HttpReceiverBuilder {
        HttpReceiverBuilder::new(config)
    }
}
