use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use serde_json::json;
use tokio::sync::watch;

use business::domain::cat::model::Cat;
use business::domain::cat::use_cases::get_all::GetCatsUseCase;
use business::domain::logger::Logger;

use super::state::{StateCell, ViewState};

/// State for the cats list screen.
///
/// Starts in loading with an empty list. `mount`, `refetch` and a limit
/// change each run one load; the newest load always wins.
pub struct CatsListViewModel {
    use_case: Arc<dyn GetCatsUseCase>,
    logger: Arc<dyn Logger>,
    limit: AtomicU32,
    state: StateCell<Vec<Cat>>,
}

impl CatsListViewModel {
    pub fn new(use_case: Arc<dyn GetCatsUseCase>, logger: Arc<dyn Logger>, limit: u32) -> Self {
        Self {
            use_case,
            logger,
            limit: AtomicU32::new(limit),
            state: StateCell::new(ViewState::loading(Vec::new())),
        }
    }

    pub fn state(&self) -> ViewState<Vec<Cat>> {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Vec<Cat>>> {
        self.state.subscribe()
    }

    pub fn limit(&self) -> u32 {
        self.limit.load(Ordering::SeqCst)
    }

    pub async fn mount(&self) {
        self.load().await;
    }

    pub async fn refetch(&self) {
        self.load().await;
    }

    /// Reloads only when `limit` differs from the current one.
    pub async fn set_limit(&self, limit: u32) {
        if self.limit.swap(limit, Ordering::SeqCst) != limit {
            self.load().await;
        }
    }

    async fn load(&self) {
        let limit = self.limit();
        let generation = self.state.begin_load();
        let outcome = self.use_case.execute(limit).await;

        if !self.state.complete(generation, outcome) {
            self.logger.debug(
                "Discarded stale cats list response",
                Some(json!({ "limit": limit, "generation": generation })),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::ApiError;
    use business::domain::logger::LogContext;
    use business::domain::shared::either::Either;
    use mockall::mock;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::oneshot;

    mock! {
        pub GetCats {}

        #[async_trait]
        impl GetCatsUseCase for GetCats {
            async fn execute(&self, limit: u32) -> Either<ApiError, Vec<Cat>>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn debug(&self, message: &str, context: Option<LogContext>);
            fn info(&self, message: &str, context: Option<LogContext>);
            fn warn(&self, message: &str, context: Option<LogContext>);
            fn error(&self, message: &str, context: Option<LogContext>);
            fn fatal(&self, message: &str, context: Option<LogContext>);
            fn set_global_context(&self, context: LogContext);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_debug().returning(|_, _| ());
        logger.expect_info().returning(|_, _| ());
        logger.expect_warn().returning(|_, _| ());
        logger.expect_error().returning(|_, _| ());
        logger.expect_fatal().returning(|_, _| ());
        logger.expect_set_global_context().returning(|_| ());
        Arc::new(logger)
    }

    fn cat(id: &str) -> Cat {
        Cat::from_repository(id.to_string(), vec![], String::new(), None)
    }

    /// Use case whose answers are released by the test, in any order.
    struct ControlledGetCats {
        pending: Mutex<VecDeque<oneshot::Receiver<Either<ApiError, Vec<Cat>>>>>,
        calls: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl GetCatsUseCase for ControlledGetCats {
        async fn execute(&self, limit: u32) -> Either<ApiError, Vec<Cat>> {
            self.calls.lock().unwrap().push(limit);
            let answer = self.pending.lock().unwrap().pop_front();
            match answer {
                Some(receiver) => receiver
                    .await
                    .unwrap_or_else(|_| Either::failure(ApiError::new("answer dropped"))),
                None => Either::failure(ApiError::new("unexpected call")),
            }
        }
    }

    #[test]
    fn should_start_loading_with_empty_list() {
        let view_model = CatsListViewModel::new(Arc::new(MockGetCats::new()), mock_logger(), 10);

        let state = view_model.state();

        assert!(state.loading);
        assert!(state.data.is_empty());
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn should_expose_cats_after_successful_mount() {
        let mut use_case = MockGetCats::new();
        use_case
            .expect_execute()
            .withf(|limit| *limit == 10)
            .times(1)
            .returning(|_| Either::success(vec![cat("a"), cat("b")]));

        let view_model = CatsListViewModel::new(Arc::new(use_case), mock_logger(), 10);
        view_model.mount().await;

        let state = view_model.state();
        assert!(!state.loading);
        assert_eq!(state.data, vec![cat("a"), cat("b")]);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn should_expose_error_after_failed_mount() {
        let error = ApiError::new("Failed to fetch cats").with_status(500);
        let returned = error.clone();
        let mut use_case = MockGetCats::new();
        use_case
            .expect_execute()
            .times(1)
            .returning(move |_| Either::failure(returned.clone()));

        let view_model = CatsListViewModel::new(Arc::new(use_case), mock_logger(), 10);
        view_model.mount().await;

        let state = view_model.state();
        assert!(!state.loading);
        assert!(state.data.is_empty());
        assert_eq!(state.error, Some(error));
    }

    #[tokio::test]
    async fn should_refetch_once_with_same_limit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut use_case = MockGetCats::new();
        use_case
            .expect_execute()
            .withf(|limit| *limit == 10)
            .times(2)
            .returning(move |_| {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Either::success(vec![cat("a")])
                } else {
                    Either::success(vec![cat("fluffy")])
                }
            });

        let view_model = CatsListViewModel::new(Arc::new(use_case), mock_logger(), 10);
        view_model.mount().await;
        view_model.refetch().await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(view_model.state().data, vec![cat("fluffy")]);
        assert_eq!(view_model.limit(), 10);
    }

    #[tokio::test]
    async fn should_keep_previous_cats_when_refetch_fails() {
        let calls = AtomicUsize::new(0);
        let mut use_case = MockGetCats::new();
        use_case.expect_execute().times(2).returning(move |_| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Either::success(vec![cat("a")])
            } else {
                Either::failure(ApiError::new("offline").with_code("NETWORK_ERROR"))
            }
        });

        let view_model = CatsListViewModel::new(Arc::new(use_case), mock_logger(), 10);
        view_model.mount().await;
        view_model.refetch().await;

        let state = view_model.state();
        assert!(!state.loading);
        assert_eq!(state.data, vec![cat("a")]);
        assert!(state.error.is_some_and(|e| e.is_network_error()));
    }

    #[tokio::test]
    async fn should_reload_once_when_limit_changes() {
        let mut use_case = MockGetCats::new();
        use_case
            .expect_execute()
            .withf(|limit| *limit == 10)
            .times(1)
            .returning(|_| Either::success(vec![cat("a")]));
        use_case
            .expect_execute()
            .withf(|limit| *limit == 20)
            .times(1)
            .returning(|_| Either::success(vec![cat("a"), cat("b")]));

        let view_model = CatsListViewModel::new(Arc::new(use_case), mock_logger(), 10);
        view_model.mount().await;
        view_model.set_limit(20).await;

        assert_eq!(view_model.limit(), 20);
        assert_eq!(view_model.state().data.len(), 2);
    }

    #[tokio::test]
    async fn should_not_reload_when_limit_is_unchanged() {
        let mut use_case = MockGetCats::new();
        use_case
            .expect_execute()
            .times(1)
            .returning(|_| Either::success(vec![]));

        let view_model = CatsListViewModel::new(Arc::new(use_case), mock_logger(), 10);
        view_model.mount().await;
        view_model.set_limit(10).await;

        assert!(!view_model.state().loading);
    }

    #[tokio::test]
    async fn should_discard_stale_response_arriving_late() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let use_case = Arc::new(ControlledGetCats {
            pending: Mutex::new(VecDeque::from([first_rx, second_rx])),
            calls: Mutex::new(Vec::new()),
        });

        let view_model = CatsListViewModel::new(use_case.clone(), mock_logger(), 10);

        let release = async {
            let _ = second_tx.send(Either::success(vec![cat("fresh")]));
            tokio::task::yield_now().await;
            let _ = first_tx.send(Either::success(vec![cat("stale")]));
        };
        tokio::join!(view_model.mount(), view_model.set_limit(20), release);

        assert_eq!(*use_case.calls.lock().unwrap(), vec![10, 20]);
        let state = view_model.state();
        assert!(!state.loading);
        assert_eq!(state.data, vec![cat("fresh")]);
    }

    #[tokio::test]
    async fn should_stay_loading_until_newest_load_answers() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let use_case = Arc::new(ControlledGetCats {
            pending: Mutex::new(VecDeque::from([first_rx, second_rx])),
            calls: Mutex::new(Vec::new()),
        });

        let view_model = CatsListViewModel::new(use_case, mock_logger(), 10);
        let mut states = view_model.subscribe();

        let release = async {
            let _ = first_tx.send(Either::success(vec![cat("stale")]));
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            assert!(states.borrow_and_update().loading);
            let _ = second_tx.send(Either::success(vec![cat("fresh")]));
        };
        tokio::join!(view_model.mount(), view_model.refetch(), release);

        assert_eq!(view_model.state().data, vec![cat("fresh")]);
    }
}
