use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cat::errors::CatNotFoundError;
use crate::domain::cat::model::Cat;
use crate::domain::cat::repository::CatRepository;
use crate::domain::cat::use_cases::get_details::GetCatDetailsUseCase;
use crate::domain::errors::ApiError;
use crate::domain::logger::Logger;
use crate::domain::shared::either::Either;

pub struct GetCatDetailsUseCaseImpl {
    pub repository: Arc<dyn CatRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatDetailsUseCase for GetCatDetailsUseCaseImpl {
    async fn execute(&self, id: &str) -> Either<ApiError, Cat> {
        self.logger
            .info(&format!("Fetching cat by id: {}", id), None);

        self.repository.get_cat_by_id(id).await.resolve(
            |error| match error.status {
                Some(404) => {
                    self.logger
                        .warn(&format!("Cat {} not found", id), None);
                    Either::failure(ApiError::from(CatNotFoundError::new(id)))
                }
                _ => Either::failure(error),
            },
            Either::success,
        )
    }
}
