//! Logger collaborator the checker reports through

#[cfg(test)]
use mockall::automock;

/// Leveled sink for check outcomes.
///
/// Implementations decide where messages go; the checker only produces them.
#[cfg_attr(test, automock)]
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    /// A defect in the running version that the user must act on
    fn critical(&self, message: &str);
}

/// Default logger, forwarding to `tracing` under the `etlogger` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "etlogger", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "etlogger", "{}", message);
    }

    fn critical(&self, message: &str) {
        // tracing has no level above error
        tracing::error!(target: "etlogger", critical = true, "{}", message);
    }
}
