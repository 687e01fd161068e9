use async_trait::async_trait;
use model::{Error, SavingsLogRecord, ToggleStatus};
use std::fmt::{Display, Formatter};

/// Durable state behind the handlers.
///
/// Two independent collections: the toggle row keyed by feature name,
/// and the append-only savings log keyed by record id. Toggle writes
/// are last-writer-wins; log records are never updated or deleted.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// The stored status for `name`, or `None` when no row exists.
    /// Callers decide the fail-open policy; this reports errors as-is.
    async fn get_toggle(&self, name: &str) -> Result<Option<ToggleStatus>, StateError>;

    /// Upserts the toggle row. No compare-and-swap; concurrent writers
    /// race with last-writer-wins semantics.
    async fn put_toggle(&self, name: &str, status: ToggleStatus) -> Result<(), StateError>;

    /// Inserts a new savings record. A failure here means the stop
    /// already happened but was not recorded, so it must propagate.
    async fn append_log(&self, record: SavingsLogRecord) -> Result<(), StateError>;

    /// All savings records, unordered.
    async fn scan_logs(&self) -> Result<Vec<SavingsLogRecord>, StateError>;
}

/// Errors arising from reading or writing state.
#[derive(Debug)]
pub struct StateError {
    pub state_key: String,

    pub operation: StateOperation,
    pub reason: StateErrorReason,
}

#[derive(Debug)]
pub enum StateErrorReason {
    // The item couldn't be converted to or from the stored shape
    BadItem(String),
    // An error from the underlying store
    BackendFailure(Error),
}

#[derive(Debug, Clone)]
pub enum StateOperation {
    GetToggle,
    PutToggle,
    AppendLog,
    ScanLogs,
}

impl StateError {
    pub fn new(state_key: String, operation: StateOperation, reason: StateErrorReason) -> Self {
        StateError {
            state_key,
            operation,
            reason,
        }
    }
}

impl Display for StateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("{:?}", self).as_str())
    }
}

impl std::error::Error for StateError {}
