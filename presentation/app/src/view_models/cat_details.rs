use std::sync::{Arc, Mutex};

use serde_json::json;
use tokio::sync::watch;

use business::domain::cat::model::Cat;
use business::domain::cat::use_cases::get_details::GetCatDetailsUseCase;
use business::domain::logger::Logger;

use super::state::{StateCell, ViewState};

/// State for the cat detail screen.
///
/// An empty id never reaches the use case; the state settles on not loading,
/// with no cat and no error.
pub struct CatDetailsViewModel {
    use_case: Arc<dyn GetCatDetailsUseCase>,
    logger: Arc<dyn Logger>,
    cat_id: Mutex<String>,
    state: StateCell<Option<Cat>>,
}

impl CatDetailsViewModel {
    pub fn new(
        use_case: Arc<dyn GetCatDetailsUseCase>,
        logger: Arc<dyn Logger>,
        cat_id: impl Into<String>,
    ) -> Self {
        Self {
            use_case,
            logger,
            cat_id: Mutex::new(cat_id.into()),
            state: StateCell::new(ViewState::loading(None)),
        }
    }

    pub fn state(&self) -> ViewState<Option<Cat>> {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Option<Cat>>> {
        self.state.subscribe()
    }

    pub fn cat_id(&self) -> String {
        match self.cat_id.lock() {
            Ok(id) => id.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub async fn mount(&self) {
        self.load().await;
    }

    pub async fn refetch(&self) {
        self.load().await;
    }

    /// Reloads only when `cat_id` differs from the current one.
    pub async fn set_cat_id(&self, cat_id: impl Into<String>) {
        let cat_id = cat_id.into();
        let changed = {
            let mut current = match self.cat_id.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if *current == cat_id {
                false
            } else {
                *current = cat_id;
                true
            }
        };

        if changed {
            self.load().await;
        }
    }

    async fn load(&self) {
        let cat_id = self.cat_id();
        if cat_id.is_empty() {
            self.state.reset(ViewState::idle(None));
            return;
        }

        let generation = self.state.begin_load();
        let outcome = self.use_case.execute(&cat_id).await.map(Some);

        if !self.state.complete(generation, outcome) {
            self.logger.debug(
                "Discarded stale cat details response",
                Some(json!({ "id": cat_id, "generation": generation })),
            );
        }
    }
}
