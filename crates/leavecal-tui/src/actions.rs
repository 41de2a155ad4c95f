/// Core Action types for the flux architecture.
/// All state mutations flow through Actions dispatched to the Dispatcher.
use chrono::NaiveDate;
use leavecal_core::LeaveDataset;

/// Represents all possible user intents and system events in the application
#[derive(Debug, Clone)]
pub enum Action {
    // ===== UI Actions (user-initiated) =====
    /// User switched to a different tab
    SwitchTab(TabId),

    /// User toggled the help overlay
    ToggleHelp,

    /// Step back one month inside the navigable window
    PreviousMonth,

    /// Step forward one month inside the navigable window
    NextMonth,

    /// Move the selected day by a number of days (±1 day, ±7 week)
    MoveSelection(i64),

    /// Pointer is over a day cell
    HoverDay(NaiveDate),

    /// Show or hide the detail panel for the selected day
    ToggleDetail,

    /// Hide the detail panel
    CloseDetail,

    /// Scroll the logs tab; positive values go back in time
    ScrollLogs(i64),

    // ===== System/Effect Actions (emitted by Effects) =====
    /// Request the leave list from the backend
    LoadLeaves,

    /// Leave list was successfully loaded from backend
    LeavesLoaded(LeaveDataset),

    /// Failed to load the leave list; carries the user-facing message
    LeavesLoadFailed(String),

    /// Local date rolled over while the app was open
    TodayChanged(NaiveDate),

    /// Application should exit
    Quit,
}

/// Identifies different tabs in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Calendar,
    Logs,
}
