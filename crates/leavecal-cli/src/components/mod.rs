pub mod day;
pub mod legend;
pub mod month;
pub mod months;
pub mod stats;
