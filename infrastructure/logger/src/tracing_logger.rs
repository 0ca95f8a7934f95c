use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "food_inventory";

/// Forwards domain log messages to `tracing` under a single target, so
/// `RUST_LOG=food_inventory=debug` selects use case output.
pub struct TracingLogger;

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
}
