use chrono::NaiveDate;
use leavecal_core::utils::parse_iso_date;
use leavecal_core::{DayDetail, LeaveCalError, LeaveDataset, LeaveRecord, employees_on_leave_on};

/// Print everyone on leave on one day
#[derive(clap::Args)]
pub struct DayArgs {
    /// Day to inspect (yyyy-MM-dd)
    #[arg(value_parser = parse_iso_date)]
    pub date: NaiveDate,
}

impl DayArgs {
    pub fn run(&self, dataset: &LeaveDataset) -> Result<String, LeaveCalError> {
        Ok(render(self.date, &dataset.records))
    }
}

pub fn render(date: NaiveDate, records: &[LeaveRecord]) -> String {
    let on_leave: Vec<LeaveRecord> = employees_on_leave_on(date, records)
        .into_iter()
        .cloned()
        .collect();
    let Some(detail) = DayDetail::new(date, &on_leave) else {
        return format!("No one on leave on {}", date.format("%b %-d, %Y"));
    };

    let mut lines = vec![detail.header()];
    for entry in &detail.entries {
        lines.push(String::new());
        lines.push(format!(
            "[{}] {} ({})",
            entry.department, entry.employee_name, entry.designation
        ));
        lines.push(format!("    {}", entry.range));
        lines.push(format!("    {}", entry.total));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, department: &str, from: &str, to: &str, n_days: i64) -> LeaveRecord {
        LeaveRecord {
            employee_name: name.to_string(),
            designation: "Branch Manager".to_string(),
            from_date: from.to_string(),
            to_date: to.to_string(),
            n_days,
            total_managers: 7,
            department: department.to_string(),
            status: "Approved".to_string(),
        }
    }

    #[test]
    fn test_day_with_leave() {
        let records = vec![
            record("Rajesh Kumar", "IT", "2025-11-26", "2025-11-29", 4),
            record("Sunita Rao", "HR", "2025-12-01", "2025-12-02", 2),
            record("Anil Das", "Transport", "2025-11-28", "2025-11-28", 1),
        ];
        let out = render(NaiveDate::from_ymd_opt(2025, 11, 28).unwrap(), &records);
        assert_eq!(
            out,
            "Nov 28, 2025 - 2 employees\n\
             \n\
             [IT] Rajesh Kumar (Branch Manager)\n    2025-11-26 to 2025-11-29\n    Total: 4 days\n\
             \n\
             [Transport] Anil Das (Branch Manager)\n    2025-11-28 to 2025-11-28\n    Total: 1 day"
        );
    }

    #[test]
    fn test_day_without_leave() {
        let out = render(NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(), &[]);
        assert_eq!(out, "No one on leave on Nov 2, 2025");
    }
}
