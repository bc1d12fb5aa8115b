use async_trait::async_trait;

use crate::domain::cat::model::Cat;
use crate::domain::errors::ApiError;
use crate::domain::shared::either::Either;

/// Fetches one page of cats, most recent first.
#[async_trait]
pub trait GetCatsUseCase: Send + Sync {
    async fn execute(&self, limit: u32) -> Either<ApiError, Vec<Cat>>;
}
