use crate::LeaveSource;
use async_trait::async_trait;
use leavecal_core::{LeaveCalError, LeaveDataset, LeaveRecord, get_leavecal_setting};
use log::{debug, error, info};
use std::time::Duration;

/// HTTP client for the leave API. A single GET returns every leave record;
/// any failure along the way is reported as `LeaveCalError::FetchFailed` and
/// never retried.
#[derive(Clone, Debug)]
pub struct LeavesClient {
    url: reqwest::Url,
    http: reqwest::Client,
}

impl LeavesClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, LeaveCalError> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| LeaveCalError::ConfigError(format!("invalid API url '{url}': {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LeaveCalError::ConfigError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { url, http })
    }

    /// Build from explicit overrides, reading `LEAVECAL_API_URL` and
    /// `LEAVECAL_HTTP_TIMEOUT_MS` for whatever is not given and falling back to
    /// the defaults in `leavecal_core::config`
    pub fn from_env(url: Option<&str>, timeout: Option<Duration>) -> Result<Self, LeaveCalError> {
        let url = match url {
            Some(url) => url.to_string(),
            None => get_leavecal_setting!(LEAVECAL_API_URL),
        };
        let timeout = timeout.unwrap_or_else(|| {
            Duration::from_millis(get_leavecal_setting!(LEAVECAL_HTTP_TIMEOUT_MS, usize) as u64)
        });
        Self::new(&url, timeout)
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn get_records(&self) -> Result<Vec<LeaveRecord>, LeaveCalError> {
        debug!("GET {}", self.url);
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| LeaveCalError::FetchFailed(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeaveCalError::FetchFailed(format!(
                "unexpected status {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LeaveCalError::FetchFailed(format!("failed to read body: {e}")))?;
        serde_json::from_slice::<Vec<LeaveRecord>>(&body)
            .map_err(|e| LeaveCalError::FetchFailed(format!("invalid leave list: {e}")))
    }
}

#[async_trait]
impl LeaveSource for LeavesClient {
    async fn fetch_leaves(&self) -> Result<LeaveDataset, LeaveCalError> {
        match self.get_records().await {
            Ok(records) => {
                info!("Loaded {} leave records from {}", records.len(), self.url);
                Ok(LeaveDataset::from_records(records))
            }
            Err(e) => {
                error!("Error fetching leave data: {}", e);
                Err(e)
            }
        }
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
