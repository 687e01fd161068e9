use crate::{ComputeControl, ComputeError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// A control plane for tests which records every stop request and can
/// be armed to reject them.
#[derive(Default)]
pub struct RecordingComputeControl {
    stopped: Mutex<Vec<String>>,
    reject: AtomicBool,
}

impl RecordingComputeControl {
    pub fn reject_requests(&self, reject: bool) {
        self.reject.store(reject, Ordering::SeqCst);
    }

    /// Instance ids stopped so far, in call order.
    pub fn stopped(&self) -> Vec<String> {
        self.stopped.lock().unwrap().clone()
    }
}

#[async_trait]
impl ComputeControl for RecordingComputeControl {
    async fn stop_instance(&self, instance_id: &str) -> Result<(), ComputeError> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(ComputeError::Rejected("injected rejection".to_string()));
        }

        self.stopped.lock().unwrap().push(instance_id.to_string());

        Ok(())
    }
}
