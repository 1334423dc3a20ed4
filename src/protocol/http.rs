// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the YNC control endpoint.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::command::{Verb, envelope};
use crate::error::TransportError;
use crate::protocol::Transport;
use crate::response::CommandResponse;

/// Path of the control endpoint on the receiver.
pub const CONTROL_PATH: &str = "/YamahaRemoteControl/ctrl";

const CONTENT_TYPE_XML: &str = "text/xml; charset=\"utf-8\"";

// ============================================================================
// HttpConfig - Configuration for the receiver endpoint
// ============================================================================

/// Configuration for reaching a receiver over HTTP.
///
/// The only required parameter is the receiver's address.
///
/// # Examples
///
/// ```
/// use yamaha_remote::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.158");
/// assert_eq!(config.control_url(), "http://192.168.1.158/YamahaRemoteControl/ctrl");
///
/// let config = HttpConfig::new("192.168.1.158")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(2));
/// assert_eq!(config.base_url(), "http://192.168.1.158:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the receiver. A leading
    ///   `http://` is accepted and stripped.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        let host = host
            .strip_prefix("http://")
            .map(str::to_string)
            .unwrap_or(host);
        Self {
            host: host.trim_end_matches('/').to_string(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.port == Self::DEFAULT_PORT || self.host.contains(':') {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Returns the full URL of the control endpoint.
    #[must_use]
    pub fn control_url(&self) -> String {
        format!("{}{CONTROL_PATH}", self.base_url())
    }

    /// Creates an `HttpTransport` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_transport(self) -> Result<HttpTransport, TransportError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(HttpTransport {
            control_url: self.control_url(),
            client,
        })
    }
}

// ============================================================================
// HttpTransport
// ============================================================================

/// HTTP transport posting YNC documents to the receiver.
///
/// One `reqwest::Client` is kept per transport so that connections are
/// reused between commands.
///
/// # Examples
///
/// ```no_run
/// use yamaha_remote::command::StatusCommand;
/// use yamaha_remote::protocol::{HttpTransport, Transport};
///
/// # async fn example() -> yamaha_remote::Result<()> {
/// let transport = HttpTransport::new("192.168.1.158")?;
/// let response = transport.send_command(&StatusCommand::basic()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    control_url: String,
    client: Client,
}

impl HttpTransport {
    /// Creates a transport for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, TransportError> {
        HttpConfig::new(host).into_transport()
    }

    /// Returns the URL commands are posted to.
    #[must_use]
    pub fn control_url(&self) -> &str {
        &self.control_url
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, verb: Verb, body: &str) -> Result<CommandResponse, TransportError> {
        let request = envelope(verb, body);

        tracing::debug!(url = %self.control_url, %verb, body = %request, "Sending YNC command");

        let response = self
            .client
            .post(&self.control_url)
            .header(CONTENT_TYPE, CONTENT_TYPE_XML)
            .body(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;

        tracing::debug!(body = %body, "Received YNC response");

        CommandResponse::parse(&body)
    }
}
