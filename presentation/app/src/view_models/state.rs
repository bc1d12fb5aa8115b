use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use business::domain::errors::ApiError;
use business::domain::shared::either::Either;

/// What a screen renders: a loading indicator, an error panel or content.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> ViewState<T> {
    pub fn loading(data: T) -> Self {
        Self {
            data,
            loading: true,
            error: None,
        }
    }

    pub fn idle(data: T) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }
}

/// Observable view state guarded by a load generation.
///
/// Each load takes a new generation when it starts; its outcome is published
/// only if no newer load has started since. Prior data survives reloads and
/// failed reloads.
pub(crate) struct StateCell<T> {
    sender: watch::Sender<ViewState<T>>,
    generation: AtomicU64,
}

impl<T: Clone> StateCell<T> {
    pub(crate) fn new(initial: ViewState<T>) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender,
            generation: AtomicU64::new(0),
        }
    }

    pub(crate) fn snapshot(&self) -> ViewState<T> {
        self.sender.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.sender.subscribe()
    }

    /// Enters loading: sets `loading`, clears `error`, keeps `data`.
    pub(crate) fn begin_load(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.sender.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
        generation
    }

    /// Publishes the outcome of load `generation`. Returns `false` when a newer
    /// load has started and the outcome was dropped.
    pub(crate) fn complete(&self, generation: u64, outcome: Either<ApiError, T>) -> bool {
        self.sender.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            state.loading = false;
            match outcome {
                Either::Failure(error) => state.error = Some(error),
                Either::Success(data) => state.data = data,
            }
            true
        })
    }

    /// Replaces the state outright and invalidates any load in flight.
    pub(crate) fn reset(&self, state: ViewState<T>) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.sender.send_replace(state);
    }
}
