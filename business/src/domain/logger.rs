use serde_json::Value;

/// Structured key/value context attached to a log line.
pub type LogContext = Value;

/// Logging port. Implementations must never panic or block the caller.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, context: Option<LogContext>);
    fn info(&self, message: &str, context: Option<LogContext>);
    fn warn(&self, message: &str, context: Option<LogContext>);
    fn error(&self, message: &str, context: Option<LogContext>);
    fn fatal(&self, message: &str, context: Option<LogContext>);
    /// Merges `context` into the context attached to every later log line.
    fn set_global_context(&self, context: LogContext);
}
