use async_trait::async_trait;

use crate::domain::cat::model::Cat;
use crate::domain::errors::ApiError;
use crate::domain::shared::either::Either;

#[async_trait]
pub trait GetCatDetailsUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Either<ApiError, Cat>;
}
