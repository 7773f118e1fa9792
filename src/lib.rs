pub mod config;
pub mod telemetry;

pub use telemetry::checker::{VersionChecker, check_available_version};
pub use telemetry::types::VersionInfo;
