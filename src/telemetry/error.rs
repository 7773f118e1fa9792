use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid repository: {0}")]
    InvalidIdentifier(String),

    #[error("Connection to server could not be made")]
    Connectivity(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("No response from server in {} seconds", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    #[error("Unexpected status: {0}")]
    HttpStatus(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to create HTTP client")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(
        "You are using a version of {project} with a critical bug. Please use a different version."
    )]
    CriticalBug { project: String },
}
