use log::warn;
use serde::{Deserialize, Serialize};

/// One employee's leave request as returned by the leave API. Field names on the
/// wire are kept exactly as the backend emits them.
///
/// Dates are zero-padded ISO `yyyy-MM-dd` strings and are compared lexically,
/// never parsed. `From_Date <= To_Date` and `NDays` matching the range length are
/// assumed, not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRecord {
    #[serde(rename = "Employee_Name")]
    pub employee_name: String,
    #[serde(rename = "Designation")]
    pub designation: String,
    #[serde(rename = "From_Date")]
    pub from_date: String,
    #[serde(rename = "To_Date")]
    pub to_date: String,
    #[serde(rename = "NDays")]
    pub n_days: i64,
    #[serde(rename = "Total_Managers")]
    pub total_managers: i64,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl LeaveRecord {
    /// exact, case-sensitive
    pub fn is_pending(&self) -> bool {
        self.status == "Pending"
    }

    /// First whitespace-delimited token of the employee name, used for the
    /// compact in-cell label
    pub fn first_name(&self) -> &str {
        self.employee_name
            .split(' ')
            .next()
            .unwrap_or(&self.employee_name)
    }
}

/// The fetched leave list plus the manager head count lifted out of the
/// per-record `Total_Managers` column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveDataset {
    pub records: Vec<LeaveRecord>,
    pub total_managers: i64,
}

impl LeaveDataset {
    pub fn from_records(records: Vec<LeaveRecord>) -> Self {
        let total_managers = crate::stats::total_managers(&records);
        if let Some(r) = records
            .iter()
            .find(|r| r.total_managers != total_managers)
        {
            warn!(
                "Total_Managers differs across records ({} vs {} for {}). Using the first record's value",
                total_managers, r.total_managers, r.employee_name
            );
        }
        Self {
            records,
            total_managers,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::LeaveRecord;

    pub fn record(name: &str, from: &str, to: &str) -> LeaveRecord {
        LeaveRecord {
            employee_name: name.to_string(),
            designation: "Manager".to_string(),
            from_date: from.to_string(),
            to_date: to.to_string(),
            n_days: 1,
            total_managers: 12,
            department: "IT".to_string(),
            status: "Approved".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::record;
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"[{
            "Employee_Name": "Priya Sharma",
            "Designation": "HR Manager",
            "From_Date": "2025-12-01",
            "To_Date": "2025-12-07",
            "NDays": 7,
            "Total_Managers": 41,
            "Department": "HR",
            "Status": "Approved"
        }]"#;
        let records: Vec<LeaveRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_name, "Priya Sharma");
        assert_eq!(records[0].n_days, 7);
        assert_eq!(records[0].total_managers, 41);
        assert_eq!(records[0].first_name(), "Priya");
    }

    #[test]
    fn test_missing_field_fails_decode() {
        let json = r#"[{"Employee_Name": "A"}]"#;
        assert!(serde_json::from_str::<Vec<LeaveRecord>>(json).is_err());
    }

    #[test]
    fn test_is_pending_case_sensitive() {
        let mut r = record("A", "2025-01-01", "2025-01-01");
        r.status = "Pending".to_string();
        assert!(r.is_pending());
        r.status = "pending".to_string();
        assert!(!r.is_pending());
    }

    #[test]
    fn test_dataset_lifts_total_managers() {
        let mut second = record("B", "2025-01-01", "2025-01-02");
        second.total_managers = 99;
        let ds = LeaveDataset::from_records(vec![record("A", "2025-01-01", "2025-01-01"), second]);
        assert_eq!(ds.total_managers, 12);
        assert_eq!(ds.len(), 2);
        assert!(LeaveDataset::from_records(vec![]).total_managers == 0);
    }
}
