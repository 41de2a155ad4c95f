/// CalendarStore manages month navigation, the selected day and the hit-test
/// areas of the last rendered grid
use crate::actions::Action;
use chrono::{Duration, NaiveDate};
use leavecal_core::{MonthWindow, YearMonth};
use ratatui::layout::{Position, Rect};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone)]
pub struct CalendarState {
    pub window: MonthWindow,

    /// local date captured at start, refreshed when it rolls over
    pub today: NaiveDate,

    /// always inside the selected month
    pub selected_day: NaiveDate,

    /// whether the day detail panel is shown
    pub show_detail: bool,

    /// the panel was opened by pointer hover and closes when the pointer leaves the grid
    pub detail_from_hover: bool,

    /// screen area of each day cell from the last render
    pub day_areas: Vec<(NaiveDate, Rect)>,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        let window = MonthWindow::build(today);
        let selected_day = default_day(window.selected(), today);
        Self {
            window,
            today,
            selected_day,
            show_detail: false,
            detail_from_hover: false,
            day_areas: Vec::new(),
        }
    }

    pub fn month(&self) -> YearMonth {
        self.window.selected()
    }
}

/// today when it falls in `month`, otherwise the first of the month
fn default_day(month: YearMonth, today: NaiveDate) -> NaiveDate {
    if month.contains(today) {
        today
    } else {
        month.first_day()
    }
}

#[derive(Clone)]
pub struct CalendarStore {
    state: Arc<RwLock<CalendarState>>,
}

impl CalendarStore {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            state: Arc::new(RwLock::new(CalendarState::new(today))),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> CalendarState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match action {
            Action::PreviousMonth if state.window.can_go_back() => {
                let month = state.window.go_back();
                state.selected_day = default_day(month, state.today);
                state.day_areas.clear();
            }

            Action::NextMonth if state.window.can_go_forward() => {
                let month = state.window.go_forward();
                state.selected_day = default_day(month, state.today);
                state.day_areas.clear();
            }

            Action::MoveSelection(delta) => {
                let target = state.selected_day + Duration::days(*delta);
                if state.month().contains(target) {
                    state.selected_day = target;
                }
            }

            Action::HoverDay(date) if state.month().contains(*date) => {
                state.selected_day = *date;
                state.show_detail = true;
                state.detail_from_hover = true;
            }

            Action::ToggleDetail => {
                state.show_detail = !state.show_detail;
                state.detail_from_hover = false;
            }

            Action::CloseDetail => {
                state.show_detail = false;
                state.detail_from_hover = false;
            }

            Action::TodayChanged(date) => {
                let previous = state.today;
                state.today = *date;
                if YearMonth::of(previous) != YearMonth::of(*date) {
                    // the window depends on the current month; keep the viewed
                    // month when it is still reachable, else fall back to the
                    // initial selection
                    let viewed = state.month();
                    let mut window = MonthWindow::build(*date);
                    if window.select(viewed).is_err() {
                        state.selected_day = default_day(window.selected(), *date);
                    }
                    state.window = window;
                    state.day_areas.clear();
                }
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    /// Record where each day cell was drawn so pointer events can be mapped back
    pub fn set_day_areas(&self, areas: Vec<(NaiveDate, Rect)>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .day_areas = areas;
    }

    pub fn day_at(&self, column: u16, row: u16) -> Option<NaiveDate> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let pos = Position::new(column, row);
        state
            .day_areas
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|(date, _)| *date)
    }

    pub fn today(&self) -> NaiveDate {
        self.state.read().unwrap_or_else(PoisonError::into_inner).today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_initial_selection_is_today() {
        let state = CalendarStore::new(day(2025, 6, 10)).get_state();
        assert_eq!(state.month(), YearMonth::new(2025, 6).unwrap());
        assert_eq!(state.selected_day, day(2025, 6, 10));
        assert!(!state.show_detail);
    }

    #[test]
    fn test_month_navigation_clamps() {
        let store = CalendarStore::new(day(2025, 2, 10));
        store.reduce(&Action::NextMonth);
        assert_eq!(store.get_state().month(), YearMonth::new(2025, 3).unwrap());
        assert_eq!(store.get_state().selected_day, day(2025, 3, 1));

        store.reduce(&Action::NextMonth);
        assert_eq!(store.get_state().month(), YearMonth::new(2025, 3).unwrap());

        store.reduce(&Action::PreviousMonth);
        assert_eq!(store.get_state().selected_day, day(2025, 2, 10));
        store.reduce(&Action::PreviousMonth);
        store.reduce(&Action::PreviousMonth);
        assert_eq!(store.get_state().month(), YearMonth::new(2025, 1).unwrap());
    }

    #[test]
    fn test_selection_stays_in_month() {
        let store = CalendarStore::new(day(2025, 6, 28));
        store.reduce(&Action::MoveSelection(7));
        assert_eq!(store.get_state().selected_day, day(2025, 6, 28));
        store.reduce(&Action::MoveSelection(2));
        assert_eq!(store.get_state().selected_day, day(2025, 6, 30));
        store.reduce(&Action::MoveSelection(-7));
        assert_eq!(store.get_state().selected_day, day(2025, 6, 23));
    }

    #[test]
    fn test_hover_selects_and_opens_detail() {
        let store = CalendarStore::new(day(2025, 6, 10));
        store.reduce(&Action::HoverDay(day(2025, 7, 1)));
        assert!(!store.get_state().show_detail);

        store.reduce(&Action::HoverDay(day(2025, 6, 3)));
        let state = store.get_state();
        assert_eq!(state.selected_day, day(2025, 6, 3));
        assert!(state.show_detail);

        store.reduce(&Action::CloseDetail);
        assert!(!store.get_state().show_detail);
    }

    #[test]
    fn test_today_changed_within_month_keeps_window() {
        let store = CalendarStore::new(day(2025, 6, 10));
        let before = store.get_state().window;
        store.reduce(&Action::TodayChanged(day(2025, 6, 11)));

        let state = store.get_state();
        assert_eq!(state.today, day(2025, 6, 11));
        assert_eq!(state.window, before);
        assert_eq!(state.selected_day, day(2025, 6, 10));
    }

    #[test]
    fn test_today_changed_rebuilds_window() {
        let store = CalendarStore::new(day(2025, 6, 30));
        store.reduce(&Action::TodayChanged(day(2025, 7, 1)));

        let state = store.get_state();
        let mut expected = MonthWindow::build(day(2025, 7, 1));
        expected.select(ym(2025, 6)).unwrap();
        assert_eq!(state.window, expected);
        assert_eq!(state.window.months().last(), Some(&ym(2025, 8)));
        // June is still reachable, so the viewed month and day stay put
        assert_eq!(state.month(), ym(2025, 6));
        assert_eq!(state.selected_day, day(2025, 6, 30));
        assert!(state.window.can_go_forward());
    }

    #[test]
    fn test_new_year_rollover_resets_unreachable_selection() {
        let store = CalendarStore::new(day(2025, 12, 31));
        for _ in 0..11 {
            store.reduce(&Action::PreviousMonth);
        }
        assert_eq!(store.get_state().month(), ym(2025, 1));

        store.reduce(&Action::TodayChanged(day(2026, 1, 1)));
        let state = store.get_state();
        assert_eq!(
            state.window.months(),
            &[ym(2025, 12), ym(2026, 1), ym(2026, 2)]
        );
        assert_eq!(state.month(), ym(2026, 1));
        assert_eq!(state.selected_day, day(2026, 1, 1));
    }

    #[test]
    fn test_hover_flag_tracks_how_detail_opened() {
        let store = CalendarStore::new(day(2025, 6, 10));
        store.reduce(&Action::HoverDay(day(2025, 6, 3)));
        assert!(store.get_state().detail_from_hover);

        store.reduce(&Action::ToggleDetail);
        store.reduce(&Action::ToggleDetail);
        let state = store.get_state();
        assert!(state.show_detail);
        assert!(!state.detail_from_hover);
    }

    #[test]
    fn test_day_hit_testing() {
        let store = CalendarStore::new(day(2025, 6, 10));
        store.set_day_areas(vec![
            (day(2025, 6, 1), Rect::new(0, 0, 10, 4)),
            (day(2025, 6, 2), Rect::new(10, 0, 10, 4)),
        ]);
        assert_eq!(store.day_at(12, 3), Some(day(2025, 6, 2)));
        assert_eq!(store.day_at(0, 0), Some(day(2025, 6, 1)));
        assert_eq!(store.day_at(25, 1), None);

        store.reduce(&Action::NextMonth);
        assert_eq!(store.day_at(0, 0), None);
    }
}
