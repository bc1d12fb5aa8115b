use std::sync::RwLock;

use business::domain::logger::{LogContext, Logger};
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

/// `Logger` backed by `tracing`. Context is rendered as a single JSON field.
#[derive(Default)]
pub struct TracingLogger {
    global_context: RwLock<Map<String, Value>>,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global keys first, then call-site keys; the call site wins on conflict.
    fn enrich(&self, context: Option<LogContext>) -> Value {
        let mut merged = self
            .global_context
            .read()
            .map(|global| global.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone());

        match context {
            Some(Value::Object(map)) => merged.extend(map),
            Some(Value::Null) | None => {}
            Some(other) => {
                merged.insert("context".to_string(), other);
            }
        }
        Value::Object(merged)
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str, context: Option<LogContext>) {
        let context = self.enrich(context);
        debug!(target: "cataas", %context, "{}", message);
    }
    fn info(&self, message: &str, context: Option<LogContext>) {
        let context = self.enrich(context);
        info!(target: "cataas", %context, "{}", message);
    }
    fn warn(&self, message: &str, context: Option<LogContext>) {
        let context = self.enrich(context);
        warn!(target: "cataas", %context, "{}", message);
    }
    fn error(&self, message: &str, context: Option<LogContext>) {
        let context = self.enrich(context);
        error!(target: "cataas", %context, "{}", message);
    }
    fn fatal(&self, message: &str, context: Option<LogContext>) {
        let context = self.enrich(context);
        error!(target: "cataas", fatal = true, %context, "{}", message);
    }
    fn set_global_context(&self, context: LogContext) {
        let Value::Object(map) = context else {
            return;
        };
        match self.global_context.write() {
            Ok(mut global) => global.extend(map),
            Err(poisoned) => poisoned.into_inner().extend(map),
        }
    }
}
