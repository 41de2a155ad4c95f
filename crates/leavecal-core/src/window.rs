/// Month windowing: the bounded set of months a user can navigate between,
/// computed relative to a supplied "today"
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::exceptions::LeaveCalError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, LeaveCalError> {
        if !(1..=12).contains(&month) {
            return Err(LeaveCalError::ParseError(format!(
                "month must be in 1..=12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is validated on construction so day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .unwrap_or_else(|| self.first_day())
    }

    pub fn num_days(&self) -> u32 {
        self.last_day().day()
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// `October 2026`
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = LeaveCalError;

    /// Parses `yyyy-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || LeaveCalError::ParseError(format!("invalid month '{s}', expected yyyy-MM"));
        let (y, m) = s.trim().split_once('-').ok_or_else(bad)?;
        let year = y.parse::<i32>().map_err(|_| bad())?;
        let month = m.parse::<u32>().map_err(|_| bad())?;
        Self::new(year, month).map_err(|_| bad())
    }
}

/// Ordered navigable months plus the currently selected position.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthWindow {
    months: Vec<YearMonth>,
    selected: usize,
}

impl MonthWindow {
    /// In January the window is previous December, January and February.
    /// Otherwise it is every month of the current year so far plus the
    /// following month. The initial selection is the second-to-last entry,
    /// which in both cases is the month containing `today`.
    pub fn build(today: NaiveDate) -> Self {
        let current = YearMonth::of(today);
        let months = if current.month == 1 {
            vec![current.prev(), current, current.next()]
        } else {
            let mut months: Vec<YearMonth> = (1..=current.month)
                .map(|month| YearMonth {
                    year: current.year,
                    month,
                })
                .collect();
            months.push(current.next());
            months
        };
        let selected = months.len() - 2;
        Self { months, selected }
    }

    pub fn months(&self) -> &[YearMonth] {
        &self.months
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> YearMonth {
        self.months[self.selected]
    }

    pub fn can_go_back(&self) -> bool {
        self.selected > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.selected + 1 < self.months.len()
    }

    /// Move one month back, clamped to the start of the window
    pub fn go_back(&mut self) -> YearMonth {
        self.selected = self.selected.saturating_sub(1);
        self.selected()
    }

    /// Move one month forward, clamped to the end of the window
    pub fn go_forward(&mut self) -> YearMonth {
        self.selected = (self.selected + 1).min(self.months.len() - 1);
        self.selected()
    }

    /// Select a specific month if it is inside the window
    pub fn select(&mut self, month: YearMonth) -> Result<(), LeaveCalError> {
        match self.months.iter().position(|m| *m == month) {
            Some(idx) => {
                self.selected = idx;
                Ok(())
            }
            None => Err(LeaveCalError::ParseError(format!(
                "{month} is outside the navigable window {}..{}",
                self.months[0],
                self.months[self.months.len() - 1]
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_january_window() {
        let w = MonthWindow::build(day(2025, 1, 15));
        assert_eq!(w.months(), &[ym(2024, 12), ym(2025, 1), ym(2025, 2)]);
        assert_eq!(w.selected_index(), 1);
        assert_eq!(w.selected(), ym(2025, 1));
    }

    #[test]
    fn test_mid_year_window() {
        let w = MonthWindow::build(day(2025, 6, 10));
        let expected: Vec<YearMonth> = (1..=7).map(|m| ym(2025, m)).collect();
        assert_eq!(w.months(), expected.as_slice());
        assert_eq!(w.selected_index(), w.len() - 2);
        assert_eq!(w.selected(), ym(2025, 6));
    }

    #[test]
    fn test_december_window_trails_into_next_year() {
        let w = MonthWindow::build(day(2025, 12, 31));
        assert_eq!(w.len(), 13);
        assert_eq!(w.months()[12], ym(2026, 1));
        assert_eq!(w.selected(), ym(2025, 12));
    }

    #[test]
    fn test_february_window() {
        let w = MonthWindow::build(day(2026, 2, 1));
        assert_eq!(w.months(), &[ym(2026, 1), ym(2026, 2), ym(2026, 3)]);
        assert_eq!(w.selected_index(), 1);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut w = MonthWindow::build(day(2025, 3, 5));
        assert!(w.can_go_back());
        assert!(w.can_go_forward());
        assert_eq!(w.go_forward(), ym(2025, 4));
        assert!(!w.can_go_forward());
        assert_eq!(w.go_forward(), ym(2025, 4));
        w.go_back();
        w.go_back();
        assert_eq!(w.go_back(), ym(2025, 1));
        assert!(!w.can_go_back());
        assert_eq!(w.go_back(), ym(2025, 1));
    }

    #[test]
    fn test_select_outside_window() {
        let mut w = MonthWindow::build(day(2025, 3, 5));
        assert!(w.select(ym(2025, 2)).is_ok());
        assert_eq!(w.selected_index(), 1);
        assert!(w.select(ym(2024, 2)).is_err());
        assert_eq!(w.selected_index(), 1);
    }

    #[test]
    fn test_year_month_bounds() {
        assert_eq!(ym(2024, 2).last_day(), day(2024, 2, 29));
        assert_eq!(ym(2025, 12).last_day(), day(2025, 12, 31));
        assert_eq!(ym(2025, 4).num_days(), 30);
        assert_eq!(ym(2026, 10).label(), "October 2026");
        assert_eq!(ym(2026, 3).to_string(), "2026-03");
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!("2025-07".parse::<YearMonth>().unwrap(), ym(2025, 7));
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("July".parse::<YearMonth>().is_err());
    }
}
