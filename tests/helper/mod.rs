//! Shared test utilities

pub mod logger;
pub mod registry;

pub use logger::{Level, RecordingLogger};
pub use registry::{mock_project, saturated_listener, silent_server, test_config};
