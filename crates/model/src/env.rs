/// Environment variable naming the toggle table.
pub const TOGGLE_TABLE_NAME: &str = "TOGGLE_TABLE_NAME";
/// Environment variable naming the savings log table.
pub const SAVINGS_LOG_TABLE_NAME: &str = "SAVINGS_LOG_TABLE_NAME";

/// Table names used when the environment variables are unset.
pub const DEFAULT_TOGGLE_TABLE: &str = "ec2_toggle";
pub const DEFAULT_SAVINGS_LOG_TABLE: &str = "ec2_savings_log";
