//! Release registry fetcher over HTTP

use std::time::Duration;

use crate::config::ClientConfig;
use crate::telemetry::error::FetchError;
use crate::telemetry::fetcher::Fetcher;
use crate::telemetry::types::{ProjectId, VersionInfo};
use reqwest::Method;
use tracing::{debug, warn};

/// Fetcher implementation for the release registry HTTP API
pub struct HttpFetcher {
    client: reqwest::Client,
    config: ClientConfig,
    method: Method,
}

impl HttpFetcher {
    /// Creates a new HttpFetcher from a client configuration
    ///
    /// The configured timeout bounds connecting and each read separately.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let method = Method::from_bytes(config.method.to_uppercase().as_bytes()).unwrap_or_else(|_| {
            warn!("Unsupported HTTP method {:?}, using GET", config.method);
            Method::GET
        });

        let client = reqwest::Client::builder()
            .user_agent(concat!("etelemetry/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(config.timeout())
            .read_timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::Client(Box::new(e)))?;

        Ok(Self {
            client,
            config: config.clone(),
            method,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    fn map_transport_error(&self, err: reqwest::Error) -> FetchError {
        // A connect timeout also reports is_timeout()
        if err.is_connect() {
            FetchError::Connectivity(Box::new(err))
        } else if err.is_timeout() {
            FetchError::Timeout {
                timeout: self.timeout(),
            }
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus(status.as_u16())
        } else if err.is_decode() {
            FetchError::InvalidResponse(err.to_string())
        } else {
            FetchError::Connectivity(Box::new(err))
        }
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, repo: &str) -> Result<Option<VersionInfo>, FetchError> {
        if self.config.disabled {
            debug!("Registry requests are disabled, skipping {}", repo);
            return Ok(None);
        }

        let project = ProjectId::parse(repo)?;
        let url = self.config.project_url(&project.to_string());

        let response = self
            .client
            .request(self.method.clone(), &url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();

        if !status.is_success() {
            warn!("Registry returned status {}: {}", status, url);
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let info: VersionInfo = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse registry response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        Ok(Some(info))
    }
}
