/// Keyboard and mouse input handling and key mapping
use crate::actions::{Action, TabId};
use crate::stores::{CalendarStore, UIStore};
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

/// Handle keyboard input and return the appropriate Action
pub fn handle_key_event(
    key_event: KeyEvent,
    ui_store: &UIStore,
    calendar_store: &CalendarStore,
) -> Option<Action> {
    let ui_state = ui_store.get_state();

    match key_event.code {
        // Global keys
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),

        // Tab switching
        KeyCode::Char('1') => Some(Action::SwitchTab(TabId::Calendar)),
        KeyCode::Char('2') => Some(Action::SwitchTab(TabId::Logs)),

        // Tab-specific navigation
        _ => match ui_state.active_tab {
            TabId::Calendar => handle_calendar_tab_keys(key_event, calendar_store),
            TabId::Logs => handle_logs_tab_keys(key_event),
        },
    }
}

fn handle_calendar_tab_keys(key_event: KeyEvent, calendar_store: &CalendarStore) -> Option<Action> {
    match key_event.code {
        // Month navigation, ignored at the ends of the window
        KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::PageUp => {
            let state = calendar_store.get_state();
            state.window.can_go_back().then_some(Action::PreviousMonth)
        }
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::PageDown => {
            let state = calendar_store.get_state();
            state.window.can_go_forward().then_some(Action::NextMonth)
        }

        // Day selection inside the month
        KeyCode::Left => Some(Action::MoveSelection(-1)),
        KeyCode::Right => Some(Action::MoveSelection(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelection(-7)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelection(7)),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleDetail),
        KeyCode::Esc => Some(Action::CloseDetail),
        _ => None,
    }
}

fn handle_logs_tab_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollLogs(1)),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollLogs(-1)),
        KeyCode::PageUp => Some(Action::ScrollLogs(10)),
        KeyCode::PageDown => Some(Action::ScrollLogs(-10)),
        _ => None,
    }
}

/// Pointer over a day cell behaves like the hover tooltip: select that day
/// and show its detail. Moving off the grid closes a panel opened this way.
pub fn handle_mouse_event(
    mouse_event: MouseEvent,
    ui_store: &UIStore,
    calendar_store: &CalendarStore,
) -> Option<Action> {
    if ui_store.get_state().active_tab != TabId::Calendar {
        return None;
    }
    match mouse_event.kind {
        MouseEventKind::Moved | MouseEventKind::Down(_) => {
            let state = calendar_store.get_state();
            match calendar_store.day_at(mouse_event.column, mouse_event.row) {
                Some(date) => (!state.show_detail || state.selected_day != date)
                    .then_some(Action::HoverDay(date)),
                // pointer left the grid: a hover-opened panel goes away like a tooltip
                None => (matches!(mouse_event.kind, MouseEventKind::Moved)
                    && state.show_detail
                    && state.detail_from_hover)
                    .then_some(Action::CloseDetail),
            }
        }
        MouseEventKind::ScrollUp => Some(Action::PreviousMonth),
        MouseEventKind::ScrollDown => Some(Action::NextMonth),
        _ => None,
    }
}
