use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value, json};

use business::domain::errors::{ApiError, NETWORK_ERROR, PARSE_ERROR};
use business::domain::logger::Logger;

use crate::transport::HttpClient;
use crate::types::{HttpMethod, RequestConfig};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client-wide settings, fixed at construction.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    pub default_headers: Vec<(String, String)>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            default_headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
        }
    }
}

/// `HttpClient` over reqwest, bound to one base URL.
///
/// Every request, response and response error is reported to the logger.
/// Failures are normalized into `ApiError`:
/// - no response (connect, timeout): `NETWORK_ERROR` code
/// - non-2xx response: the HTTP status plus the decoded body as `data`
/// - 2xx with a body that is not JSON: `PARSE_ERROR` code
pub struct ReqwestHttpClient {
    client: Client,
    base_url: String,
    default_headers: Vec<(String, String)>,
    logger: Arc<dyn Logger>,
}

impl ReqwestHttpClient {
    pub fn new(
        base_url: impl Into<String>,
        options: ClientOptions,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(options.timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            default_headers: options.default_headers,
            logger,
        })
    }

    fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }

    fn transport_error(error: reqwest::Error) -> ApiError {
        let api_error = FailureKind::of(&error).into_api_error(error.to_string());

        let api_error = match error.status() {
            Some(status) => api_error.with_status(status.as_u16()),
            None => api_error,
        };
        api_error.with_source(error)
    }

    fn log_response_error(&self, error: &ApiError) {
        self.logger.error(
            "Response error:",
            Some(json!({
                "status": error.status,
                "data": error.data,
                "message": error.message,
            })),
        );
    }
}

/// How a reqwest failure surfaces as an `ApiError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    /// No response arrived: connect failure, timeout, request not sent.
    NoResponse,
    /// The request or its response was rejected locally.
    Rejected,
    Unclassified,
}

impl FailureKind {
    fn of(error: &reqwest::Error) -> Self {
        if error.is_timeout() || error.is_connect() || error.is_request() {
            FailureKind::NoResponse
        } else if error.is_builder() || error.is_redirect() || error.is_body() || error.is_decode()
        {
            FailureKind::Rejected
        } else {
            FailureKind::Unclassified
        }
    }

    fn into_api_error(self, message: String) -> ApiError {
        match self {
            FailureKind::NoResponse => ApiError::new(message).with_code(NETWORK_ERROR),
            FailureKind::Rejected => ApiError::new(message),
            FailureKind::Unclassified => ApiError::unknown(),
        }
    }
}

/// Defaults first, then per-request headers; a per-request header replaces
/// a default of the same name.
fn merge_headers(
    defaults: &[(String, String)],
    overrides: &HashMap<String, String>,
) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    let defaults = defaults.iter().map(|(name, value)| (name, value));
    for (name, value) in defaults.chain(overrides.iter()) {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ApiError::new(format!("Invalid header name {}: {}", name, e)).with_source(e)
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            ApiError::new(format!("Invalid value for header {}: {}", name, e)).with_source(e)
        })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

fn headers_to_json(headers: &HeaderMap) -> Value {
    let map: Map<String, Value> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                Value::String(value.to_str().unwrap_or_default().to_string()),
            )
        })
        .collect();
    Value::Object(map)
}

/// Empty bodies decode as `null`.
fn parse_body(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    if bytes.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes)
}

/// Falls back to the raw text for error payloads that are not JSON.
fn body_as_data(bytes: &[u8]) -> Value {
    parse_body(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Value>,
        config: Option<RequestConfig>,
    ) -> Result<Value, ApiError> {
        let config = config.unwrap_or_default();

        let headers = merge_headers(&self.default_headers, &config.headers).inspect_err(|error| {
            self.log_response_error(error);
        })?;

        let mut builder = self
            .client
            .request(method.into(), self.resolve_url(url))
            .headers(headers);
        if !config.params.is_empty() {
            builder = builder.query(&config.params);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let request = builder.build().map_err(|e| {
            let error = Self::transport_error(e);
            self.log_response_error(&error);
            error
        })?;

        self.logger.info(
            "Request:",
            Some(json!({
                "method": method.as_str(),
                "url": request.url().as_str(),
                "headers": headers_to_json(request.headers()),
                "data": body,
            })),
        );

        let response = self.client.execute(request).await.map_err(|e| {
            let error = Self::transport_error(e);
            self.log_response_error(&error);
            error
        })?;

        let status = response.status();
        let headers = headers_to_json(response.headers());
        let bytes = response.bytes().await.map_err(|e| {
            let error = Self::transport_error(e).with_status(status.as_u16());
            self.log_response_error(&error);
            error
        })?;

        if !status.is_success() {
            let error = ApiError::new(format!(
                "Request failed with status code {}",
                status.as_u16()
            ))
            .with_status(status.as_u16())
            .with_data(body_as_data(&bytes));
            self.log_response_error(&error);
            return Err(error);
        }

        self.logger.info(
            "Response:",
            Some(json!({
                "status": status.as_u16(),
                "data": body_as_data(&bytes),
                "headers": headers,
            })),
        );

        parse_body(&bytes).map_err(|e| {
            ApiError::new(format!("Malformed response body: {}", e))
                .with_status(status.as_u16())
                .with_code(PARSE_ERROR)
                .with_data(body_as_data(&bytes))
                .with_source(e)
        })
    }
}
