/// Logging port for use cases and services.
///
/// Messages are plain text; the adapter decides level filtering and sinks.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
