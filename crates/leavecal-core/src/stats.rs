/// Aggregate counters shown above the calendar. Every function takes `today`
/// explicitly instead of reading the wall clock.
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

use crate::filter::{employees_on_leave_on, overlaps};
use crate::models::{LeaveDataset, LeaveRecord};
use crate::utils::format_iso;

/// Distinct employees whose leave covers `today`
pub fn total_employees_on_leave(records: &[LeaveRecord], today: NaiveDate) -> usize {
    employees_on_leave_on(today, records)
        .into_iter()
        .map(|r| r.employee_name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

pub fn pending_approvals(records: &[LeaveRecord]) -> usize {
    records.iter().filter(|r| r.is_pending()).count()
}

/// The backend repeats the manager head count on every record; the first one wins
pub fn total_managers(records: &[LeaveRecord]) -> i64 {
    records.first().map(|r| r.total_managers).unwrap_or(0)
}

/// Sunday to Saturday week containing `today`
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = today.weekday().num_days_from_sunday() as i64;
    let start = today - Duration::days(offset);
    (start, start + Duration::days(6))
}

/// Distinct employees with any leave day inside the current week
pub fn managers_on_leave_this_week(records: &[LeaveRecord], today: NaiveDate) -> usize {
    let (start, end) = week_bounds(today);
    let (start, end) = (format_iso(start), format_iso(end));
    records
        .iter()
        .filter(|r| overlaps(r, &start, &end))
        .map(|r| r.employee_name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LeaveSummary {
    pub total_employees_on_leave: usize,
    pub pending_approvals: usize,
    pub total_managers: i64,
    pub managers_on_leave_this_week: usize,
}

impl LeaveSummary {
    pub fn compute(dataset: &LeaveDataset, today: NaiveDate) -> Self {
        Self {
            total_employees_on_leave: total_employees_on_leave(&dataset.records, today),
            pending_approvals: pending_approvals(&dataset.records),
            total_managers: dataset.total_managers,
            managers_on_leave_this_week: managers_on_leave_this_week(&dataset.records, today),
        }
    }
}
