use super::{search_with_metrics, DisplayState, SearchMetrics};
use crate::identity::{self, ValidationError};
use crate::lookup::HolidayLookup;
use crate::observability::labels::{Labels, NO_LABEL};
use crate::tokio::TOKIO_RUNTIME;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Holds the lookup collaborator and the latest [DisplayState].
///
/// Every search is stamped with a generation number. A search that resolves
/// after a newer one was started does not overwrite the state.
pub struct HolidayChecker<L> {
    lookup: L,
    metrics: SearchMetrics,
    generation: AtomicU64,
    state: Mutex<DisplayState>,
}

impl<L: HolidayLookup> HolidayChecker<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_labels(lookup, &NO_LABEL)
    }

    pub fn with_labels(lookup: L, labels: &Labels) -> Self {
        HolidayChecker {
            lookup,
            metrics: SearchMetrics::new(labels),
            generation: AtomicU64::new(0),
            state: Mutex::new(DisplayState::Idle),
        }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Current snapshot.
    pub fn state(&self) -> DisplayState {
        self.lock_state().clone()
    }

    pub fn input_feedback(&self, raw: &str) -> Option<ValidationError> {
        identity::input_feedback(raw)
    }

    /// Clears the state, runs the search and publishes the result unless a
    /// newer search was started in the meantime. The result is returned either way.
    pub async fn search(&self, id_number: &str, display_name: &str) -> DisplayState {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.publish_if_current(generation, DisplayState::Idle);

        let state =
            search_with_metrics(id_number, display_name, &self.lookup, &self.metrics).await;

        if !self.publish_if_current(generation, state.clone()) {
            self.metrics.stale_results_dropped.increment(1);
            tracing::debug!(generation, "dropping result of a superseded search");
        }
        state
    }

    /// Runs [Self::search] on the shared runtime. Must not be called from within
    /// an async context.
    pub fn search_blocking(&self, id_number: &str, display_name: &str) -> DisplayState {
        TOKIO_RUNTIME.block_on(self.search(id_number, display_name))
    }

    fn publish_if_current(&self, generation: u64, state: DisplayState) -> bool {
        let mut current = self.lock_state();
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        *current = state;
        true
    }

    fn lock_state(&self) -> MutexGuard<'_, DisplayState> {
        // The state is always replaced wholesale, so a poisoned lock still holds a whole snapshot
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
