//! HTTP client for the ETS2 telemetry server.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::ClientConfig;
use crate::decode::parse_telemetry;
use crate::error::TelemetryError;
use crate::model::TelemetrySnapshot;

/// Anything that can produce telemetry snapshots on demand.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Produce one fresh snapshot.
    async fn get_telemetry(&self) -> crate::Result<TelemetrySnapshot>;
}

/// Polls `{base_url}/api/ets2/telemetry` once per call.
///
/// The client holds no mutable state, so one instance can be shared across
/// tasks. Idle connections are not pooled; every connection is closed once its
/// response has been consumed or dropped.
#[derive(Debug, Clone)]
pub struct TelemetryClient {
    config: ClientConfig,
    endpoint: String,
    http: Client,
}

impl TelemetryClient {
    /// Create a client for the given base URL with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Build`] if the HTTP transport fails to initialize.
    pub fn new(base_url: impl Into<String>) -> crate::Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Build`] if the HTTP transport fails to initialize.
    pub fn with_config(config: ClientConfig) -> crate::Result<Self> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(0);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder.build().map_err(TelemetryError::Build)?;

        Ok(Self {
            endpoint: config.endpoint(),
            config,
            http,
        })
    }

    /// Base URL as configured
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Full telemetry URL requested on each call
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch and decode one telemetry snapshot.
    ///
    /// # Errors
    ///
    /// - [`TelemetryError::Transport`] if the request or the body read fails
    /// - [`TelemetryError::UnexpectedStatus`] for any status other than 200
    /// - [`TelemetryError::Decode`] if the body is not a valid telemetry document
    pub async fn get_telemetry(&self) -> crate::Result<TelemetrySnapshot> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| TelemetryError::transport(&self.endpoint, e))?;

        let status = response.status();
        debug!(url = %self.endpoint, status = status.as_u16(), "telemetry response");

        if status != StatusCode::OK {
            return Err(TelemetryError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TelemetryError::transport(&self.endpoint, e))?;

        parse_telemetry(&body)
    }
}

#[async_trait]
impl TelemetrySource for TelemetryClient {
    async fn get_telemetry(&self) -> crate::Result<TelemetrySnapshot> {
        TelemetryClient::get_telemetry(self).await
    }
}
