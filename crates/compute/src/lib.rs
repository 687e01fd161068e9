use async_trait::async_trait;
use std::fmt::{Display, Formatter};

mod recording;

pub use recording::RecordingComputeControl;

/// Control plane for compute instances.
#[async_trait]
pub trait ComputeControl: Send + Sync {
    /// Requests that one instance transition to a stopped state.
    ///
    /// Succeeds when the platform accepts the stop request; it does
    /// not wait for the instance to actually reach stopped.
    async fn stop_instance(&self, instance_id: &str) -> Result<(), ComputeError>;
}

/// Errors from the compute control plane.
#[derive(Debug)]
pub enum ComputeError {
    // The platform rejected the stop request
    Rejected(String),
}

impl Display for ComputeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ComputeError::Rejected(message) => {
                write!(f, "Stop request rejected: {message}")
            }
        }
    }
}

impl std::error::Error for ComputeError {}
