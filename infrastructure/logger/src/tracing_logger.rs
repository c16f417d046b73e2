use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`, under a single `mediaid` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "mediaid", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "mediaid", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "mediaid", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "mediaid", "{}", message);
    }
}
