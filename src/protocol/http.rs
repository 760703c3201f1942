// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the vehicle state API.

use std::time::Duration;

use reqwest::Client;

use crate::error::ProtocolError;
use crate::types::{AuthToken, VehicleId};

// ============================================================================
// ApiConfig - Configuration for the vehicle API endpoint
// ============================================================================

/// Configuration for the vehicle state API.
///
/// This is a simple configuration struct that holds connection parameters.
/// Each state fetch is an independent request; there is no persistent
/// connection.
///
/// # Examples
///
/// ```
/// use carlink_lib::protocol::ApiConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = ApiConfig::new("api.spicyglass.example");
///
/// // With all options
/// let config = ApiConfig::new("api.spicyglass.example")
///     .with_https()
///     .with_token("session-token")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    host: String,
    port: u16,
    use_https: bool,
    token: Option<AuthToken>,
    timeout: Duration,
}

impl ApiConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the vehicle API
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            token: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the bearer token used to authenticate requests.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<AuthToken>) -> Self {
        self.token = Some(token.into());
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

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the auth token if set.
    #[must_use]
    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an [`ApiClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<ApiClient, ProtocolError> {
        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(ApiClient {
            base_url,
            client,
            token: self.token,
        })
    }
}

// ============================================================================
// ApiClient - HTTP client for the vehicle state endpoint
// ============================================================================

/// HTTP client for the vehicle state API.
///
/// Uses the `GET /vehicles/{id}/state` endpoint to retrieve a state report.
///
/// # Examples
///
/// ```no_run
/// use carlink_lib::protocol::ApiClient;
/// use carlink_lib::types::VehicleId;
///
/// # async fn example() -> carlink_lib::Result<()> {
/// let client = ApiClient::new("api.spicyglass.example")?;
/// let id = VehicleId::new("V-1")?;
/// let payload = client.vehicle_state(&id).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    token: Option<AuthToken>,
}

impl ApiClient {
    /// Creates a new client for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the vehicle API
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        let host = host.into();
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host
        } else {
            format!("http://{host}")
        };

        let client = Client::builder()
            .timeout(ApiConfig::DEFAULT_TIMEOUT)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self {
            base_url,
            client,
            token: None,
        })
    }

    /// Sets the bearer token used to authenticate requests.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<AuthToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the state endpoint URL for a vehicle.
    fn state_url(&self, id: &VehicleId) -> String {
        format!(
            "{}/vehicles/{}/state",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    /// Fetches the raw state report for a vehicle.
    ///
    /// Returns the JSON payload as delivered by the API; decoding into a
    /// typed report happens in the [`telemetry`](crate::telemetry) module.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::AuthenticationFailed`] on HTTP 401, and
    /// [`ProtocolError::Status`] for any other non-success status. The
    /// status error carries the server's error text, or a fallback message
    /// referencing the status code when the response body is empty.
    pub async fn vehicle_state(&self, id: &VehicleId) -> Result<serde_json::Value, ProtocolError> {
        let url = self.state_url(id);

        tracing::debug!(url = %url, "Fetching vehicle state");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                format!("error retrieving vehicle state information: {}", status.as_u16())
            } else {
                body
            };
            return Err(ProtocolError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let payload = response
            .json::<serde_json::Value>()
            .await
            .map_err(ProtocolError::Http)?;

        tracing::debug!(payload = %payload, "Received vehicle state");

        Ok(payload)
    }
}
