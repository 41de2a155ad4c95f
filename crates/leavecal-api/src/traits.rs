use async_trait::async_trait;
use leavecal_core::{LeaveCalError, LeaveDataset};

/// Anything able to produce the full leave list. The HTTP client is the only
/// production implementation; front ends depend on the trait so they can be
/// driven from fixtures.
#[async_trait]
pub trait LeaveSource: Send + Sync {
    async fn fetch_leaves(&self) -> Result<LeaveDataset, LeaveCalError>;

    /// Human readable origin, used in log lines
    fn describe(&self) -> String;
}

/// Source that replays a fixed result, for tests and offline demos
#[derive(Debug, Clone)]
pub struct StaticSource {
    result: Result<LeaveDataset, String>,
}

impl StaticSource {
    pub fn ok(dataset: LeaveDataset) -> Self {
        Self { result: Ok(dataset) }
    }

    pub fn failing(cause: impl Into<String>) -> Self {
        Self {
            result: Err(cause.into()),
        }
    }
}

#[async_trait]
impl LeaveSource for StaticSource {
    async fn fetch_leaves(&self) -> Result<LeaveDataset, LeaveCalError> {
        self.result.clone().map_err(LeaveCalError::FetchFailed)
    }

    fn describe(&self) -> String {
        "static fixture".to_string()
    }
}
