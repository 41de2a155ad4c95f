/// Effects module handles side effects (network calls, clock checks)
/// Effects are triggered by Actions and dispatch new Actions with results
use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use leavecal_api::LeaveSource;
use std::sync::Arc;
use tokio::task;

/// Effects handler that executes side effects based on actions
pub struct Effects {
    dispatcher: Dispatcher,
    source: Arc<dyn LeaveSource>,
}

impl Effects {
    pub fn new(dispatcher: Dispatcher, source: Arc<dyn LeaveSource>) -> Self {
        Self { dispatcher, source }
    }

    /// Handle an action and execute any necessary side effects
    pub fn handle(&self, action: &Action) {
        if let Action::LoadLeaves = action {
            self.fetch_leaves();
        }
    }

    /// Fetch the leave list once. Completion or failure is reported back as
    /// exactly one action; there is no retry.
    fn fetch_leaves(&self) -> task::JoinHandle<()> {
        let dispatcher = self.dispatcher.clone();
        let source = self.source.clone();

        task::spawn(async move {
            log::info!("Fetching leave data from {}...", source.describe());
            match source.fetch_leaves().await {
                Ok(dataset) => {
                    log::info!("Successfully loaded {} leave records", dataset.len());
                    dispatcher.dispatch(Action::LeavesLoaded(dataset));
                }
                Err(e) => {
                    log::error!("Failed to load leave data: {}", e);
                    dispatcher.dispatch(Action::LeavesLoadFailed(e.user_message()));
                }
            }
        })
    }
}
