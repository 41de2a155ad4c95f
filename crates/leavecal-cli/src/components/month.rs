use crate::local_today;
use chrono::NaiveDate;
use leavecal_core::utils::parse_iso_date;
use leavecal_core::{DayCell, LeaveCalError, LeaveDataset, MonthGrid, MonthWindow, YearMonth};

const CELL_WIDTH: usize = 12;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Print one month of the calendar
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Month to print (yyyy-MM). Must be inside the navigable window;
    /// defaults to the current month
    #[arg(long)]
    pub month: Option<YearMonth>,

    /// Treat this date (yyyy-MM-dd) as today
    #[arg(long, value_parser = parse_iso_date)]
    pub today: Option<NaiveDate>,
}

impl MonthArgs {
    pub fn run(&self, dataset: &LeaveDataset) -> Result<String, LeaveCalError> {
        let today = self.today.unwrap_or_else(local_today);
        let mut window = MonthWindow::build(today);
        if let Some(month) = self.month {
            window.select(month)?;
        }
        let grid = MonthGrid::build(window.selected(), &dataset.records, today);
        Ok(render(&grid))
    }
}

/// Sunday-first text grid. Each week is four lines: day numbers (today
/// suffixed with `*`), up to two first names, and the overflow count.
pub fn render(grid: &MonthGrid) -> String {
    let mut lines = vec![grid.month.label(), row(WEEKDAYS.iter().map(|d| d.to_string()))];

    for week in grid.weeks() {
        lines.push(row(week.iter().map(|slot| match slot {
            Some(cell) if cell.is_today => format!("{}*", cell.day()),
            Some(cell) => cell.day().to_string(),
            None => String::new(),
        })));
        for i in 0..2 {
            lines.push(row(week.iter().map(|slot| {
                slot.and_then(|cell| cell.inline().get(i))
                    .map(|r| r.first_name().to_string())
                    .unwrap_or_default()
            })));
        }
        lines.push(row(week.iter().map(|slot| overflow_label(*slot))));
    }

    lines
        .into_iter()
        .map(|l| l.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn overflow_label(slot: Option<&DayCell>) -> String {
    match slot {
        Some(cell) if cell.overflow() > 0 => format!("+{} more", cell.overflow()),
        _ => String::new(),
    }
}

fn row(cells: impl Iterator<Item = String>) -> String {
    cells.map(|c| fit(&c)).collect()
}

fn fit(s: &str) -> String {
    let cut: String = s.chars().take(CELL_WIDTH - 1).collect();
    format!("{cut:<width$}", width = CELL_WIDTH)
}
