/// Month grid model: leading blanks, one cell per day with the employees on
/// leave that day, and the inline display cap.
use chrono::{Datelike, NaiveDate};

use crate::filter::employees_on_leave_on;
use crate::models::LeaveRecord;
use crate::window::YearMonth;

/// Entries shown directly inside a day cell before collapsing into "+N more"
pub const MAX_INLINE_ENTRIES: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub entries: Vec<LeaveRecord>,
}

impl DayCell {
    pub fn inline(&self) -> &[LeaveRecord] {
        &self.entries[..self.entries.len().min(MAX_INLINE_ENTRIES)]
    }

    /// Number of entries hidden behind the overflow indicator
    pub fn overflow(&self) -> usize {
        self.entries.len().saturating_sub(MAX_INLINE_ENTRIES)
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    /// Sunday-based weekday index of the first day, i.e. blank cells before it
    pub leading_blanks: usize,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build(month: YearMonth, records: &[LeaveRecord], today: NaiveDate) -> Self {
        let first_day = month.first_day();
        let last_day = month.last_day();
        let days = first_day
            .iter_days()
            .take_while(|d| *d <= last_day)
            .map(|date| DayCell {
                date,
                is_today: date == today,
                entries: employees_on_leave_on(date, records)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
            .collect();
        Self {
            month,
            first_day,
            last_day,
            leading_blanks: first_day.weekday().num_days_from_sunday() as usize,
            days,
        }
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        if !self.month.contains(date) {
            return None;
        }
        self.days.get(date.day0() as usize)
    }

    /// Rows of seven slots, Sunday first. `None` pads before the first and
    /// after the last day.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let slots: Vec<Option<&DayCell>> = std::iter::repeat_n(None, self.leading_blanks)
            .chain(self.days.iter().map(Some))
            .collect();
        slots
            .chunks(7)
            .map(|chunk| {
                let mut row = chunk.to_vec();
                row.resize(7, None);
                row
            })
            .collect()
    }
}
