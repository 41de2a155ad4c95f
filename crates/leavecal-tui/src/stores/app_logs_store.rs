/// AppLogsStore mirrors the in-memory log buffer for the Logs tab
use crate::actions::Action;
use crate::logger::LogBuffer;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone, Default)]
pub struct AppLogsState {
    pub logs: Vec<String>,

    /// lines scrolled back from the most recent entry
    pub scroll_offset: usize,
}

pub struct AppLogsStore {
    state: Arc<RwLock<AppLogsState>>,
    log_buffer: LogBuffer,
}

impl AppLogsStore {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self {
            state: Arc::new(RwLock::new(AppLogsState::default())),
            log_buffer,
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> AppLogsState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Refresh logs from the buffer and handle scroll actions
    pub fn reduce(&self, action: &Action) {
        let logs = self.log_buffer.get_logs();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.logs = logs;

        if let Action::ScrollLogs(amount) = action {
            let max = state.logs.len();
            state.scroll_offset = if *amount >= 0 {
                state.scroll_offset.saturating_add(*amount as usize).min(max)
            } else {
                state.scroll_offset.saturating_sub(amount.unsigned_abs() as usize)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogEntry;

    fn buffer_with(n: usize) -> LogBuffer {
        let buffer = LogBuffer::new();
        for i in 0..n {
            buffer.add_log(LogEntry {
                timestamp: "t".to_string(),
                level: "INFO".to_string(),
                target: "leavecal".to_string(),
                message: format!("{i}"),
            });
        }
        buffer
    }

    #[test]
    fn test_refresh_on_any_action() {
        let store = AppLogsStore::new(buffer_with(3));
        assert!(store.get_state().logs.is_empty());
        store.reduce(&Action::ToggleHelp);
        assert_eq!(store.get_state().logs.len(), 3);
    }

    #[test]
    fn test_scroll_bounds() {
        let store = AppLogsStore::new(buffer_with(4));
        store.reduce(&Action::ScrollLogs(10));
        assert_eq!(store.get_state().scroll_offset, 4);
        store.reduce(&Action::ScrollLogs(-3));
        assert_eq!(store.get_state().scroll_offset, 1);
        store.reduce(&Action::ScrollLogs(-5));
        assert_eq!(store.get_state().scroll_offset, 0);
    }
}
