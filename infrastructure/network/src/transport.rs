use async_trait::async_trait;
use serde_json::Value;

use business::domain::errors::ApiError;

use crate::types::{HttpMethod, RequestConfig};

/// Low-level HTTP transport. The only layer that deals in `Result`; callers
/// above the façade only ever see `Either`.
///
/// Implementors provide `request`; the verb shorthands delegate to it.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Value>,
        config: Option<RequestConfig>,
    ) -> Result<Value, ApiError>;

    async fn get(&self, url: &str, config: Option<RequestConfig>) -> Result<Value, ApiError> {
        self.request(HttpMethod::Get, url, None, config).await
    }

    async fn post(
        &self,
        url: &str,
        body: Option<Value>,
        config: Option<RequestConfig>,
    ) -> Result<Value, ApiError> {
        self.request(HttpMethod::Post, url, body, config).await
    }

    async fn put(
        &self,
        url: &str,
        body: Option<Value>,
        config: Option<RequestConfig>,
    ) -> Result<Value, ApiError> {
        self.request(HttpMethod::Put, url, body, config).await
    }

    async fn delete(&self, url: &str, config: Option<RequestConfig>) -> Result<Value, ApiError> {
        self.request(HttpMethod::Delete, url, None, config).await
    }

    async fn patch(
        &self,
        url: &str,
        body: Option<Value>,
        config: Option<RequestConfig>,
    ) -> Result<Value, ApiError> {
        self.request(HttpMethod::Patch, url, body, config).await
    }
}
