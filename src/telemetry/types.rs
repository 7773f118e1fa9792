use serde::{Deserialize, Serialize};

use crate::telemetry::error::FetchError;

/// Version placeholder used when the registry reply carries no `version`
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Version metadata published by the registry for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionInfo {
    /// Latest published version
    pub version: String,
    /// Published versions flagged as containing a critical bug
    pub bad_versions: Vec<String>,
}

impl VersionInfo {
    pub fn new(version: impl Into<String>, bad_versions: Vec<String>) -> Self {
        Self {
            version: version.into(),
            bad_versions,
        }
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            version: UNKNOWN_VERSION.to_string(),
            bad_versions: Vec::new(),
        }
    }
}

/// A hosted project identified as `<owner>/<name>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectId<'a> {
    pub owner: &'a str,
    pub name: &'a str,
}

impl<'a> ProjectId<'a> {
    /// Splits `repo` on the first `/`.
    pub fn parse(repo: &'a str) -> Result<Self, FetchError> {
        let (owner, name) = repo
            .split_once('/')
            .ok_or_else(|| FetchError::InvalidIdentifier(repo.to_string()))?;
        Ok(Self { owner, name })
    }
}

impl std::fmt::Display for ProjectId<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
