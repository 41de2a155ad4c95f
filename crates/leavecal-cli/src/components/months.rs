use crate::local_today;
use chrono::NaiveDate;
use leavecal_core::utils::parse_iso_date;
use leavecal_core::{LeaveCalError, MonthWindow};

/// Print the months that can be navigated to
#[derive(clap::Args)]
pub struct MonthsArgs {
    /// Compute the window as if today were this date (yyyy-MM-dd)
    #[arg(long, value_parser = parse_iso_date)]
    pub today: Option<NaiveDate>,
}

impl MonthsArgs {
    pub fn run(&self) -> Result<String, LeaveCalError> {
        let today = self.today.unwrap_or_else(local_today);
        Ok(render(&MonthWindow::build(today)))
    }
}

/// One month per line, the initially selected month marked with `>`
pub fn render(window: &MonthWindow) -> String {
    window
        .months()
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let marker = if i == window.selected_index() { ">" } else { " " };
            format!("{marker} {month}  {}", month.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_january_window() {
        let args = MonthsArgs {
            today: NaiveDate::from_ymd_opt(2025, 1, 15),
        };
        assert_eq!(
            args.run().unwrap(),
            "  2024-12  December 2024\n> 2025-01  January 2025\n  2025-02  February 2025"
        );
    }

    #[test]
    fn test_mid_year_window_marks_current_month() {
        let window = MonthWindow::build(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        let out = render(&window);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "  2025-01  January 2025");
        assert_eq!(lines[5], "> 2025-06  June 2025");
        assert_eq!(lines[6], "  2025-07  July 2025");
    }
}
