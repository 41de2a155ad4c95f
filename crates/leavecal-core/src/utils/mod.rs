use chrono::NaiveDate;

use crate::exceptions::LeaveCalError;

/// zero-padded ISO form used on the wire and for all lexical date comparisons
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn parse_iso_date(s: &str) -> Result<NaiveDate, LeaveCalError> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
        .map_err(|e| LeaveCalError::ParseError(format!("invalid date '{s}': {e}")))
}

/// `1 day`, `3 days`
pub fn pluralise(count: i64, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
