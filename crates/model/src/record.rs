use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed automated stop and its estimated saving.
///
/// Records are append-only: written exactly once per stop that passed
/// the toggle gate, never updated or deleted. Field names are
/// wire-stable; the dashboard reads them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsLogRecord {
    pub id: String,
    pub instance_id: String,
    /// UTC instant the stop was logged, ISO-8601 with a trailing `Z`.
    pub date: DateTime<Utc>,
    /// ISO calendar week of `date`, used for dashboard aggregation.
    pub week_number: u32,
    pub hours_saved: f64,
    pub cost_saved: f64,
}
