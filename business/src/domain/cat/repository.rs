use async_trait::async_trait;

use crate::domain::errors::ApiError;
use crate::domain::shared::either::Either;

use super::model::Cat;

/// Only transport-level failures come back as `Either::Failure`; incomplete
/// records are normalized, never rejected.
#[async_trait]
pub trait CatRepository: Send + Sync {
    async fn fetch_all_cats_paginated(&self, limit: u32) -> Either<ApiError, Vec<Cat>>;
    async fn get_cat_by_id(&self, id: &str) -> Either<ApiError, Cat>;
}
