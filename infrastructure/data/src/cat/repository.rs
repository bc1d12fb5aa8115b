use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cat::model::Cat;
use business::domain::cat::repository::CatRepository;
use business::domain::errors::ApiError;
use business::domain::shared::either::Either;
use network::cataas_network::CataasNetwork;
use url::Url;

use super::entity::CatDto;

const CAT_LIST_ENDPOINT: &str = "/api/cats";
const CAT_ENDPOINT_ROOT: &str = "http://cataas.invalid/cat";

/// `/cat/<id>` with `id` percent-encoded as one path segment.
fn cat_by_id_endpoint(id: &str) -> Result<String, ApiError> {
    let mut endpoint = Url::parse(CAT_ENDPOINT_ROOT)
        .map_err(|e| ApiError::new(format!("Invalid cat endpoint: {}", e)).with_source(e))?;
    endpoint
        .path_segments_mut()
        .map_err(|_| ApiError::new("Cat endpoint cannot take path segments"))?
        .push(id);
    Ok(endpoint.path().to_string())
}

pub struct CatRepositoryHttp {
    network: Arc<CataasNetwork>,
}

impl CatRepositoryHttp {
    pub fn new(network: Arc<CataasNetwork>) -> Self {
        Self { network }
    }
}

#[async_trait]
impl CatRepository for CatRepositoryHttp {
    async fn fetch_all_cats_paginated(&self, limit: u32) -> Either<ApiError, Vec<Cat>> {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("limit", &limit.to_string())
            .finish();

        self.network
            .get::<Vec<CatDto>>(&format!("{}?{}", CAT_LIST_ENDPOINT, query), None)
            .await
            .map(|dtos| dtos.into_iter().map(CatDto::into_domain).collect())
    }

    async fn get_cat_by_id(&self, id: &str) -> Either<ApiError, Cat> {
        let endpoint = match cat_by_id_endpoint(id) {
            Ok(endpoint) => endpoint,
            Err(error) => return Either::failure(error),
        };

        self.network
            .get::<CatDto>(&endpoint, None)
            .await
            .map(CatDto::into_domain)
    }
}
