use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use business::domain::errors::{ApiError, PARSE_ERROR};
use business::domain::shared::either::Either;

use crate::transport::HttpClient;
use crate::types::RequestConfig;

/// Single network entry point for the application.
///
/// Built once by the composition root around a transport bound to one base
/// URL. Every verb awaits the transport and reports the outcome exactly once
/// as an `Either`; nothing is retried.
pub struct CataasNetwork {
    client: Arc<dyn HttpClient>,
}

impl CataasNetwork {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: Option<RequestConfig>,
    ) -> Either<ApiError, T> {
        decode(self.client.get(endpoint, config).await)
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        data: Option<Value>,
        config: Option<RequestConfig>,
    ) -> Either<ApiError, T> {
        decode(self.client.post(endpoint, data, config).await)
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        data: Option<Value>,
        config: Option<RequestConfig>,
    ) -> Either<ApiError, T> {
        decode(self.client.put(endpoint, data, config).await)
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: Option<RequestConfig>,
    ) -> Either<ApiError, T> {
        decode(self.client.delete(endpoint, config).await)
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        data: Option<Value>,
        config: Option<RequestConfig>,
    ) -> Either<ApiError, T> {
        decode(self.client.patch(endpoint, data, config).await)
    }
}

fn decode<T: DeserializeOwned>(outcome: Result<Value, ApiError>) -> Either<ApiError, T> {
    outcome
        .and_then(|payload| {
            serde_json::from_value(payload).map_err(|e| {
                ApiError::new(format!("Unexpected response shape: {}", e))
                    .with_code(PARSE_ERROR)
                    .with_source(e)
            })
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HttpMethod;
    use async_trait::async_trait;
    use mockall::mock;
    use serde::Deserialize;
    use serde_json::json;

    mock! {
        pub Transport {}

        #[async_trait]
        impl HttpClient for Transport {
            async fn request(
                &self,
                method: HttpMethod,
                url: &str,
                body: Option<Value>,
                config: Option<RequestConfig>,
            ) -> Result<Value, ApiError>;
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        id: String,
    }

    #[tokio::test]
    async fn should_wrap_payload_as_success() {
        let mut transport = MockTransport::new();
        transport
            .expect_request()
            .withf(|method, url, body, _| {
                *method == HttpMethod::Get && url == "/cat/1" && body.is_none()
            })
            .times(1)
            .returning(|_, _, _, _| Ok(json!({ "id": "1" })));

        let network = CataasNetwork::new(Arc::new(transport));

        let result: Either<ApiError, Payload> = network.get("/cat/1", None).await;

        assert_eq!(result, Either::success(Payload { id: "1".to_string() }));
    }

    #[tokio::test]
    async fn should_wrap_transport_error_as_failure() {
        let mut transport = MockTransport::new();
        transport
            .expect_request()
            .times(1)
            .returning(|_, _, _, _| Err(ApiError::new("Request failed").with_status(503)));

        let network = CataasNetwork::new(Arc::new(transport));

        let result: Either<ApiError, Payload> = network.get("/cat/1", None).await;

        assert!(!result.is_success());
        assert_eq!(result.error().status, Some(503));
        assert!(result.error().is_server_error());
    }

    #[tokio::test]
    async fn should_report_undecodable_payload_as_parse_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_request()
            .returning(|_, _, _, _| Ok(json!("a plain string")));

        let network = CataasNetwork::new(Arc::new(transport));

        let result: Either<ApiError, Vec<Payload>> = network.get("/api/cats", None).await;

        assert_eq!(result.error().code.as_deref(), Some(PARSE_ERROR));
    }

    #[tokio::test]
    async fn should_forward_verb_and_body_to_transport() {
        let mut transport = MockTransport::new();
        transport
            .expect_request()
            .withf(|method, url, body, _| {
                *method == HttpMethod::Patch
                    && url == "/cat/1"
                    && body.as_ref() == Some(&json!({ "tags": ["x"] }))
            })
            .times(1)
            .returning(|_, _, _, _| Ok(Value::Null));

        let network = CataasNetwork::new(Arc::new(transport));

        let result: Either<ApiError, ()> = network
            .patch("/cat/1", Some(json!({ "tags": ["x"] })), None)
            .await;

        assert!(result.is_success());
    }
}
