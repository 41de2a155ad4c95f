/// Date-range membership over leave records. All comparisons are lexical on
/// `yyyy-MM-dd` strings, inclusive at both ends, with no timezone handling.
use chrono::NaiveDate;

use crate::models::LeaveRecord;
use crate::utils::format_iso;

/// Records whose `[From_Date, To_Date]` contains `date`. `date` must already be
/// formatted as `yyyy-MM-dd`. Input order is preserved.
pub fn employees_on_leave<'a>(date: &str, records: &'a [LeaveRecord]) -> Vec<&'a LeaveRecord> {
    records
        .iter()
        .filter(|leave| date >= leave.from_date.as_str() && date <= leave.to_date.as_str())
        .collect()
}

pub fn employees_on_leave_on(date: NaiveDate, records: &[LeaveRecord]) -> Vec<&LeaveRecord> {
    employees_on_leave(&format_iso(date), records)
}

/// Whether the record's range intersects `[start, end]` (both `yyyy-MM-dd`)
pub fn overlaps(record: &LeaveRecord, start: &str, end: &str) -> bool {
    record.from_date.as_str() <= end && record.to_date.as_str() >= start
}
