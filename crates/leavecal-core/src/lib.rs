pub mod config;
pub mod department;
pub mod detail;
pub mod exceptions;
pub mod filter;
pub mod grid;
mod macros;
pub mod models;
pub mod stats;
pub mod utils;
pub mod window;

// public api
pub use department::{DepartmentToken, LEGEND, department_token};
pub use detail::{DayDetail, DetailEntry};
pub use exceptions::{FETCH_FAILED_MESSAGE, LeaveCalError};
pub use filter::{employees_on_leave, employees_on_leave_on, overlaps};
pub use grid::{DayCell, MAX_INLINE_ENTRIES, MonthGrid};
pub use models::{LeaveDataset, LeaveRecord};
pub use stats::LeaveSummary;
pub use window::{MonthWindow, YearMonth};
