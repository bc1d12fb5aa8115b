use std::error::Error;
use std::sync::Arc;

use serde_json::Value;

/// Connection failure or timeout, no HTTP response was received.
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
/// A response arrived but its body could not be decoded.
pub const PARSE_ERROR: &str = "PARSE_ERROR";

/// Normalized shape of every failed network operation.
///
/// Built once per failure by the transport and never mutated afterwards.
/// Use cases may specialize it (see `CatNotFoundError`) while keeping the
/// same structure.
#[derive(Debug, Clone, thiserror::Error)]
#[error("API Error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
    pub code: Option<String>,
    pub data: Option<Value>,
    #[source]
    pub original_error: Option<Arc<dyn Error + Send + Sync>>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            code: None,
            data: None,
            original_error: None,
        }
    }

    pub fn unknown() -> Self {
        Self::new("Unknown network error")
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.original_error = Some(Arc::new(source));
        self
    }

    pub fn is_network_error(&self) -> bool {
        self.code.as_deref() == Some(NETWORK_ERROR)
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self.status, Some(401) | Some(403))
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_some_and(|status| status >= 500)
    }
}

// The cause is opaque and left out of comparisons.
impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.status == other.status
            && self.code == other.code
            && self.data == other.data
    }
}
