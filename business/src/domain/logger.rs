use std::fmt::Display;

/// Logging port used by the business layer; adapters live in infrastructure.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);

    /// Logs a recovered failure at warn level as `<context>: <cause>`.
    fn recovered(&self, context: &str, cause: &dyn Display) {
        self.warn(&format!("{}: {}", context, cause));
    }
}
