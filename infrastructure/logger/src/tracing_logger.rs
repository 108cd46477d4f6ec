use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing` under the `catalog` target.
pub struct TracingLogger;

const TARGET: &str = "catalog";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
    fn recovered(&self, context: &str, cause: &dyn std::fmt::Display) {
        warn!(target: TARGET, cause = %cause, "{}", context);
    }
}
