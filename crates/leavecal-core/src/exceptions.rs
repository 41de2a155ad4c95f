use std::fmt;

/// The only message a user ever sees when the leave list cannot be loaded.
/// Transport, status and decode failures all collapse into it.
pub static FETCH_FAILED_MESSAGE: &str =
    "Failed to load leave data. Make sure the leave API backend is running.";

#[derive(Debug, PartialEq)]
pub enum LeaveCalError {
    /// network failure, non-2xx status or JSON decode failure. The inner string
    /// carries the underlying cause for logging only
    FetchFailed(String),
    ParseError(String),
    ConfigError(String),
}

impl LeaveCalError {
    /// Text suitable for the status line / stderr. Fetch failures never leak
    /// their cause here
    pub fn user_message(&self) -> String {
        match self {
            Self::FetchFailed(_) => FETCH_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for LeaveCalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailed(cause) => write!(f, "FetchFailed: {cause}"),
            Self::ParseError(s) => write!(f, "ParseError: {s}"),
            Self::ConfigError(s) => write!(f, "ConfigError: {s}"),
        }
    }
}

impl std::error::Error for LeaveCalError {}
