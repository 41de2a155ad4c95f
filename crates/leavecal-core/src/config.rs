/// This config file lists out all the default values for the main LEAVECAL env configs
/// All can be overridden by either an ENV var of the same name. Some can also be overridden
/// from the command line. These should only be primitive types
///

/// endpoint returning the full leave list as a JSON array
pub static LEAVECAL_API_URL: &'static str = "http://localhost:8000/api/leaves";

/// timeout for the leave list request
pub static LEAVECAL_HTTP_TIMEOUT_MS: usize = 10_000;

/// level captured by the TUI's in-memory logger
pub static LEAVECAL_LOG_LEVEL: &'static str = "info";
