use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::cat::model::Cat;
use crate::domain::cat::repository::CatRepository;
use crate::domain::cat::use_cases::get_all::GetCatsUseCase;
use crate::domain::errors::ApiError;
use crate::domain::logger::Logger;
use crate::domain::shared::either::Either;

pub struct GetCatsUseCaseImpl {
    pub repository: Arc<dyn CatRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatsUseCase for GetCatsUseCaseImpl {
    async fn execute(&self, limit: u32) -> Either<ApiError, Vec<Cat>> {
        self.logger
            .info("Fetching cats", Some(json!({ "limit": limit })));

        self.repository
            .fetch_all_cats_paginated(limit)
            .await
            .map(|mut cats| {
                // Stable sort: cats sharing a timestamp keep the API order.
                cats.sort_by(|a, b| b.created_at_timestamp().cmp(&a.created_at_timestamp()));
                self.logger
                    .info(&format!("Found {} cats", cats.len()), None);
                cats
            })
    }
}
