//! One-shot comparison of the running version against the registry

use std::sync::Arc;

use crate::telemetry::error::CheckError;
use crate::telemetry::fetcher::{Fetcher, default_fetcher};
use crate::telemetry::guard::CheckGuard;
use crate::telemetry::logger::{Logger, TracingLogger};
use crate::telemetry::semver::{CompareResult, compare_versions, is_bad_version};
use crate::telemetry::types::VersionInfo;

/// Checks a project for newer or known-bad versions, at most once per guard
pub struct VersionChecker<'g> {
    project: String,
    current_version: String,
    fetcher: Option<Arc<dyn Fetcher>>,
    logger: Arc<dyn Logger>,
    guard: &'g CheckGuard,
    raise_on_bad_version: bool,
}

impl<'g> VersionChecker<'g> {
    /// Creates a checker bound to `guard`, with no fetcher and the default logger
    pub fn new(
        project: impl Into<String>,
        current_version: impl Into<String>,
        guard: &'g CheckGuard,
    ) -> Self {
        Self {
            project: project.into(),
            current_version: current_version.into(),
            fetcher: None,
            logger: Arc::new(TracingLogger),
            guard,
            raise_on_bad_version: false,
        }
    }

    pub fn with_fetcher(mut self, fetcher: Option<Arc<dyn Fetcher>>) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Fail with [`CheckError::CriticalBug`] instead of logging it
    pub fn raise_on_bad_version(mut self, raise: bool) -> Self {
        self.raise_on_bad_version = raise;
        self
    }

    /// Runs the check if the guard has not been claimed yet.
    ///
    /// # Returns
    /// * `Ok(Some(VersionInfo))` - Registry reply, after reporting the comparison
    /// * `Ok(None)` - Already checked, fetching unavailable or disabled, or the fetch failed
    /// * `Err(CheckError::CriticalBug)` - Running version is flagged bad and raising was requested
    pub async fn check(&self) -> Result<Option<VersionInfo>, CheckError> {
        if !self.guard.try_claim() {
            return Ok(None);
        }

        let Some(fetcher) = &self.fetcher else {
            self.logger.debug(&format!(
                "Cannot check latest available version for {}: no fetcher available",
                self.project
            ));
            return Ok(None);
        };

        let info = match fetcher.fetch(&self.project).await {
            Ok(Some(info)) => info,
            Ok(None) => return Ok(None),
            Err(e) => {
                self.logger.debug(&format!(
                    "Could not check {} for version updates: {}",
                    self.project, e
                ));
                return Ok(None);
            }
        };

        self.report(&info)?;

        Ok(Some(info))
    }

    fn report(&self, info: &VersionInfo) -> Result<(), CheckError> {
        let project = &self.project;
        let local = &self.current_version;
        let remote = &info.version;

        match compare_versions(local, remote) {
            CompareResult::RemoteNewer => self.logger.info(&format!(
                "A newer version ({}) of {} is available. You are using {}",
                remote, project, local
            )),
            CompareResult::LocalNewer => self.logger.debug(&format!(
                "Running a newer version ({}) of {} than available ({})",
                local, project, remote
            )),
            CompareResult::Equal => self.logger.debug(&format!(
                "No newer (than {}) version of {} found available",
                local, project
            )),
            CompareResult::Invalid => self.logger.debug(&format!(
                "Could not compare versions of {}: running {}, available {}",
                project, local, remote
            )),
        }

        if is_bad_version(local, &info.bad_versions) {
            let err = CheckError::CriticalBug {
                project: project.clone(),
            };
            if self.raise_on_bad_version {
                return Err(err);
            }
            self.logger.critical(&err.to_string());
        }

        Ok(())
    }
}

/// Checks `project` once per process using the default fetcher.
///
/// `current_version` is the running build's version, typically
/// `env!("CARGO_PKG_VERSION")`. Without a logger, messages go to `tracing`
/// under the `etlogger` target.
pub async fn check_available_version(
    project: &str,
    current_version: &str,
    logger: Option<Arc<dyn Logger>>,
    raise_on_bad_version: bool,
) -> Result<Option<VersionInfo>, CheckError> {
    let guard = CheckGuard::global();
    if guard.is_checked() {
        return Ok(None);
    }

    let mut checker = VersionChecker::new(project, current_version, guard)
        .with_fetcher(default_fetcher())
        .raise_on_bad_version(raise_on_bad_version);
    if let Some(logger) = logger {
        checker = checker.with_logger(logger);
    }

    checker.check().await
}
