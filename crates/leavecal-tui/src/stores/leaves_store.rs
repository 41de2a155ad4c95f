/// LeavesStore holds the fetched leave list and its loading/error status
use crate::actions::Action;
use leavecal_core::{LeaveDataset, LeaveSummary};
use chrono::NaiveDate;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone)]
pub struct LeavesState {
    pub dataset: LeaveDataset,

    /// true from mount until the single fetch completes either way
    pub is_loading: bool,

    /// user-facing message when the fetch failed
    pub error: Option<String>,
}

impl Default for LeavesState {
    fn default() -> Self {
        Self {
            dataset: LeaveDataset::default(),
            is_loading: true,
            error: None,
        }
    }
}

#[derive(Clone)]
pub struct LeavesStore {
    state: Arc<RwLock<LeavesState>>,
}

impl LeavesStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(LeavesState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> LeavesState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match action {
            Action::LoadLeaves => {
                state.is_loading = true;
                state.error = None;
            }

            Action::LeavesLoaded(dataset) => {
                state.dataset = dataset.clone();
                state.is_loading = false;
                state.error = None;
            }

            Action::LeavesLoadFailed(message) => {
                state.dataset = LeaveDataset::default();
                state.is_loading = false;
                state.error = Some(message.clone());
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    pub fn summary(&self, today: NaiveDate) -> LeaveSummary {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        LeaveSummary::compute(&state.dataset, today)
    }
}
