//! Fetcher trait for retrieving version info from a release registry

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::config::ClientConfig;
use crate::telemetry::error::FetchError;
use crate::telemetry::types::VersionInfo;

/// Trait for fetching the latest version info of a project
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches version info for a project
    ///
    /// # Arguments
    /// * `repo` - The project as `<owner>/<name>` (e.g., "sensein/etelemetry-client")
    ///
    /// # Returns
    /// * `Ok(Some(VersionInfo))` - Decoded registry reply
    /// * `Ok(None)` - Fetching is disabled, no request was made
    /// * `Err(FetchError)` - If the identifier is malformed or the request fails
    async fn fetch(&self, repo: &str) -> Result<Option<VersionInfo>, FetchError>;
}

/// Returns the fetcher available in this build, configured from the environment.
///
/// `None` when the crate was built without HTTP support or the HTTP client
/// cannot be created.
pub fn default_fetcher() -> Option<Arc<dyn Fetcher>> {
    fetcher_for(&ClientConfig::from_env())
}

/// Returns the fetcher available in this build for `config`
pub fn fetcher_for(config: &ClientConfig) -> Option<Arc<dyn Fetcher>> {
    #[cfg(feature = "http")]
    {
        match crate::telemetry::fetchers::HttpFetcher::new(config) {
            Ok(fetcher) => Some(Arc::new(fetcher) as Arc<dyn Fetcher>),
            Err(e) => {
                tracing::debug!("HTTP fetcher unavailable: {}", e);
                None
            }
        }
    }

    #[cfg(not(feature = "http"))]
    {
        let _ = config;
        None
    }
}
