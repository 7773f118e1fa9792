use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// =============================================================================
// Registry constants
// =============================================================================

/// Default registry base URL; projects are served under `{base}/projects/{owner}/{name}`
pub const DEFAULT_BASE_URL: &str = "https://rig.mit.edu/et";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default HTTP method for registry requests
pub const DEFAULT_METHOD: &str = "GET";

/// Presence of this variable disables all registry requests
pub const DISABLE_ENV_VAR: &str = "NO_ET";

/// Overrides the registry base URL
pub const BASE_URL_ENV_VAR: &str = "ETELEMETRY_URL";

/// Client configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub method: String,
    /// Skip every request and report nothing
    pub disabled: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            method: DEFAULT_METHOD.to_string(),
            disabled: false,
        }
    }
}

impl ClientConfig {
    /// Default configuration with `ETELEMETRY_URL` and `NO_ET` applied.
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Applies `ETELEMETRY_URL` and `NO_ET` from the process environment
    pub fn apply_env(self) -> Self {
        self.with_env(
            std::env::var(BASE_URL_ENV_VAR).ok(),
            std::env::var_os(DISABLE_ENV_VAR).is_some(),
        )
    }

    /// Loads a JSON configuration file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Applies environment overrides on top of this configuration
    pub fn with_env(mut self, base_url: Option<String>, disable_signal: bool) -> Self {
        if let Some(base_url) = base_url.filter(|url| !url.is_empty()) {
            self.base_url = base_url;
        }
        self.disabled |= disable_signal;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Endpoint for a project, with any trailing slash on the base trimmed
    pub fn project_url(&self, repo: &str) -> String {
        format!("{}/projects/{}", self.base_url.trim_end_matches('/'), repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn client_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<ClientConfig>(json!({
            "timeoutSecs": 10
        }))
        .unwrap();

        assert_eq!(result.timeout_secs, 10);
        assert_eq!(result.base_url, DEFAULT_BASE_URL);
        assert_eq!(result.method, "GET");
        assert!(!result.disabled);
    }

    #[test]
    fn client_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<ClientConfig>(json!({
            "baseUrl": "http://localhost:8000",
            "timeoutSecs": 1,
            "method": "POST",
            "disabled": true
        }))
        .unwrap();

        assert_eq!(
            result,
            ClientConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_secs: 1,
                method: "POST".to_string(),
                disabled: true,
            }
        );
    }

    #[test]
    fn with_env_overrides_base_url_and_disables() {
        let config = ClientConfig::default()
            .with_env(Some("http://localhost:8000".to_string()), true);

        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.disabled);
    }

    #[test]
    fn with_env_keeps_defaults_without_overrides() {
        let config = ClientConfig::default().with_env(Some(String::new()), false);

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn with_env_never_reenables_a_disabled_config() {
        let config = ClientConfig {
            disabled: true,
            ..ClientConfig::default()
        }
        .with_env(None, false);

        assert!(config.disabled);
    }

    #[test]
    fn project_url_substitutes_repo() {
        let config = ClientConfig {
            base_url: "http://localhost:8000/et/".to_string(),
            ..ClientConfig::default()
        };

        assert_eq!(
            config.project_url("sensein/etelemetry-client"),
            "http://localhost:8000/et/projects/sensein/etelemetry-client"
        );
        assert_eq!(
            ClientConfig::default().project_url("nipy/nipype"),
            "https://rig.mit.edu/et/projects/nipy/nipype"
        );
    }

    #[test]
    fn from_path_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"baseUrl": "http://example.test", "timeoutSecs": 2}}"#).unwrap();

        let config = ClientConfig::from_path(file.path()).unwrap();

        assert_eq!(config.base_url, "http://example.test");
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn from_path_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(ClientConfig::from_path(&dir.path().join("missing.json")).is_err());
    }
}
