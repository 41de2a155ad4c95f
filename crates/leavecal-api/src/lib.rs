mod client;
mod traits;
pub use client::LeavesClient;
pub use traits::{LeaveSource, StaticSource};
