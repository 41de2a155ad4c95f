use crate::local_today;
use chrono::NaiveDate;
use leavecal_core::utils::parse_iso_date;
use leavecal_core::{LeaveCalError, LeaveDataset, LeaveSummary};

/// Print the four headline counts
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Treat this date (yyyy-MM-dd) as today
    #[arg(long, value_parser = parse_iso_date)]
    pub today: Option<NaiveDate>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl StatsArgs {
    pub fn run(&self, dataset: &LeaveDataset) -> Result<String, LeaveCalError> {
        let today = self.today.unwrap_or_else(local_today);
        let summary = LeaveSummary::compute(dataset, today);
        if self.json {
            serde_json::to_string_pretty(&summary)
                .map_err(|e| LeaveCalError::ParseError(format!("failed to encode stats: {e}")))
        } else {
            Ok(render(&summary))
        }
    }
}

pub fn render(summary: &LeaveSummary) -> String {
    [
        ("Employees on leave today", summary.total_employees_on_leave as i64),
        ("Pending approvals", summary.pending_approvals as i64),
        ("Total managers", summary.total_managers),
        ("Managers on leave this week", summary.managers_on_leave_this_week as i64),
    ]
    .iter()
    .map(|(label, value)| format!("{label:<30}{value}"))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use leavecal_core::LeaveRecord;

    fn record(name: &str, from: &str, to: &str, status: &str) -> LeaveRecord {
        LeaveRecord {
            employee_name: name.to_string(),
            designation: "Manager".to_string(),
            from_date: from.to_string(),
            to_date: to.to_string(),
            n_days: 1,
            total_managers: 41,
            department: "IT".to_string(),
            status: status.to_string(),
        }
    }

    fn dataset() -> LeaveDataset {
        LeaveDataset::from_records(vec![
            record("Rajesh Kumar", "2025-11-26", "2025-11-29", "Approved"),
            record("Rajesh Kumar", "2025-11-27", "2025-11-28", "Pending"),
            record("Priya Sharma", "2025-12-10", "2025-12-12", "Pending"),
        ])
    }

    #[test]
    fn test_text_output() {
        let args = StatsArgs {
            today: NaiveDate::from_ymd_opt(2025, 11, 27),
            json: false,
        };
        let out = args.run(&dataset()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], format!("{:<30}1", "Employees on leave today"));
        assert_eq!(lines[1], format!("{:<30}2", "Pending approvals"));
        assert_eq!(lines[2], format!("{:<30}41", "Total managers"));
        assert_eq!(lines[3], format!("{:<30}1", "Managers on leave this week"));
    }

    #[test]
    fn test_json_output() {
        let args = StatsArgs {
            today: NaiveDate::from_ymd_opt(2025, 11, 27),
            json: true,
        };
        let out = args.run(&dataset()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total_employees_on_leave"], 1);
        assert_eq!(value["pending_approvals"], 2);
        assert_eq!(value["total_managers"], 41);
        assert_eq!(value["managers_on_leave_this_week"], 1);
    }
}
