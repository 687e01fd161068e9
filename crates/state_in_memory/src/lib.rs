use async_trait::async_trait;
use model::{SavingsLogRecord, ToggleStatus};
use state::StateErrorReason::BackendFailure;
use state::StateOperation::{AppendLog, GetToggle, PutToggle, ScanLogs};
use state::{StateError, StateOperation, StateStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// In-memory store for tests.
///
/// Reads and writes can be independently armed to fail so callers can
/// exercise their degraded paths.
#[derive(Default)]
pub struct InMemoryStateStore {
    toggles: Mutex<HashMap<String, ToggleStatus>>,
    logs: Mutex<Vec<SavingsLogRecord>>,

    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryStateStore {
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the appended records, in insertion order.
    pub fn logs(&self) -> Vec<SavingsLogRecord> {
        self.logs.lock().unwrap().clone()
    }

    fn check(&self, flag: &AtomicBool, key: &str, operation: StateOperation) -> Result<(), StateError> {
        if flag.load(Ordering::SeqCst) {
            return Err(StateError::new(
                key.to_string(),
                operation,
                BackendFailure("injected store failure".into()),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn get_toggle(&self, name: &str) -> Result<Option<ToggleStatus>, StateError> {
        self.check(&self.fail_reads, name, GetToggle)?;

        Ok(self.toggles.lock().unwrap().get(name).copied())
    }

    async fn put_toggle(&self, name: &str, status: ToggleStatus) -> Result<(), StateError> {
        self.check(&self.fail_writes, name, PutToggle)?;

        self.toggles.lock().unwrap().insert(name.to_string(), status);

        Ok(())
    }

    async fn append_log(&self, record: SavingsLogRecord) -> Result<(), StateError> {
        self.check(&self.fail_writes, &record.id, AppendLog)?;

        self.logs.lock().unwrap().push(record);

        Ok(())
    }

    async fn scan_logs(&self) -> Result<Vec<SavingsLogRecord>, StateError> {
        self.check(&self.fail_reads, "", ScanLogs)?;

        Ok(self.logs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use model::TOGGLE_NAME;

    fn record(id: &str) -> SavingsLogRecord {
        SavingsLogRecord {
            id: id.to_string(),
            instance_id: "i-123".to_string(),
            date: Utc::now(),
            week_number: 1,
            hours_saved: 12.0,
            cost_saved: 0.1248,
        }
    }

    #[tokio::test]
    async fn toggle_roundtrip() {
        let store: InMemoryStateStore = InMemoryStateStore::default();

        assert_eq!(None, store.get_toggle(TOGGLE_NAME).await.unwrap());

        store.put_toggle(TOGGLE_NAME, ToggleStatus::Off).await.unwrap();

        assert_eq!(
            Some(ToggleStatus::Off),
            store.get_toggle(TOGGLE_NAME).await.unwrap()
        );
    }

    #[tokio::test]
    async fn appended_logs_are_scanned_back() {
        let store: InMemoryStateStore = InMemoryStateStore::default();

        store.append_log(record("a")).await.unwrap();
        store.append_log(record("b")).await.unwrap();

        let logs: Vec<SavingsLogRecord> = store.scan_logs().await.unwrap();

        assert_eq!(2, logs.len());
    }

    #[tokio::test]
    async fn injected_failures_surface_as_errors() {
        let store: InMemoryStateStore = InMemoryStateStore::default();
        store.fail_writes(true);

        assert!(store.put_toggle(TOGGLE_NAME, ToggleStatus::On).await.is_err());
        assert!(store.append_log(record("a")).await.is_err());

        store.fail_writes(false);
        store.fail_reads(true);

        assert!(store.get_toggle(TOGGLE_NAME).await.is_err());
        assert!(store.scan_logs().await.is_err());
    }
}
