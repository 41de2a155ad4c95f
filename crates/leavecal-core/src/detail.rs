/// Day detail: the full list of people on leave for one day, formatted for a
/// popup or a printed block.
use chrono::NaiveDate;

use crate::department::{DepartmentToken, department_token};
use crate::grid::DayCell;
use crate::models::LeaveRecord;
use crate::utils::pluralise;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailEntry {
    pub department: String,
    pub token: DepartmentToken,
    pub employee_name: String,
    pub designation: String,
    /// `2025-11-24 to 2025-12-05`
    pub range: String,
    /// `Total: 12 days`
    pub total: String,
}

impl From<&LeaveRecord> for DetailEntry {
    fn from(r: &LeaveRecord) -> Self {
        Self {
            department: r.department.clone(),
            token: department_token(&r.department),
            employee_name: r.employee_name.clone(),
            designation: r.designation.clone(),
            range: format!("{} to {}", r.from_date, r.to_date),
            total: format!("Total: {}", pluralise(r.n_days, "day")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayDetail {
    pub date: NaiveDate,
    pub entries: Vec<DetailEntry>,
}

impl DayDetail {
    /// `None` when nobody is on leave that day
    pub fn for_cell(cell: &DayCell) -> Option<Self> {
        Self::new(cell.date, &cell.entries)
    }

    pub fn new(date: NaiveDate, records: &[LeaveRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self {
            date,
            entries: records.iter().map(DetailEntry::from).collect(),
        })
    }

    /// `Nov 28, 2025 - 3 employees`
    pub fn header(&self) -> String {
        format!(
            "{} - {}",
            self.date.format("%b %-d, %Y"),
            pluralise(self.entries.len() as i64, "employee")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_utils::record;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_detail_for_empty_day() {
        assert!(DayDetail::new(day(2025, 11, 2), &[]).is_none());
    }

    #[test]
    fn test_header_pluralisation() {
        let one = DayDetail::new(day(2025, 11, 3), &[record("A", "2025-11-03", "2025-11-03")]).unwrap();
        assert_eq!(one.header(), "Nov 3, 2025 - 1 employee");

        let two = DayDetail::new(
            day(2025, 12, 1),
            &[
                record("A", "2025-12-01", "2025-12-01"),
                record("B", "2025-11-28", "2025-12-02"),
            ],
        )
        .unwrap();
        assert_eq!(two.header(), "Dec 1, 2025 - 2 employees");
    }

    #[test]
    fn test_entry_fields() {
        let mut r = record("Govindarajan Lakshminarayanan", "2025-11-24", "2025-12-05");
        r.department = "C&F".to_string();
        r.designation = "Manager C&F".to_string();
        r.n_days = 12;
        let entry = DetailEntry::from(&r);
        assert_eq!(entry.token, DepartmentToken::Yellow);
        assert_eq!(entry.range, "2025-11-24 to 2025-12-05");
        assert_eq!(entry.total, "Total: 12 days");

        r.n_days = 1;
        assert_eq!(DetailEntry::from(&r).total, "Total: 1 day");
    }
}
