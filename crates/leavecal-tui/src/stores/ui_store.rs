/// UIStore manages UI-specific state (active tab, help visibility, exit flag)
use crate::actions::{Action, TabId};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone)]
pub struct UIState {
    pub active_tab: TabId,
    pub show_help: bool,
    pub should_exit: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            active_tab: TabId::Calendar,
            show_help: false,
            should_exit: false,
        }
    }
}

#[derive(Clone)]
pub struct UIStore {
    state: Arc<RwLock<UIState>>,
}

impl UIStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(UIState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> UIState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match action {
            Action::SwitchTab(tab_id) => {
                state.active_tab = *tab_id;
            }
            Action::ToggleHelp => {
                state.show_help = !state.show_help;
            }
            Action::Quit => {
                state.should_exit = true;
            }
            _ => {}
        }
    }

    pub fn should_exit(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .should_exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = UIStore::new().get_state();
        assert_eq!(state.active_tab, TabId::Calendar);
        assert!(!state.show_help);
        assert!(!state.should_exit);
    }

    #[test]
    fn test_switch_tab() {
        let store = UIStore::new();
        store.reduce(&Action::SwitchTab(TabId::Logs));
        assert_eq!(store.get_state().active_tab, TabId::Logs);
    }

    #[test]
    fn test_toggle_help() {
        let store = UIStore::new();

        store.reduce(&Action::ToggleHelp);
        assert!(store.get_state().show_help);

        store.reduce(&Action::ToggleHelp);
        assert!(!store.get_state().show_help);
    }

    #[test]
    fn test_quit() {
        let store = UIStore::new();
        store.reduce(&Action::Quit);
        assert!(store.should_exit());
    }
}
