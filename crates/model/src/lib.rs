pub mod alarm;
pub mod env;
pub mod event;
pub mod response;

mod record;
mod toggle;

pub use record::SavingsLogRecord;
pub use response::Response;
pub use toggle::{InvalidToggleStatus, ToggleRecord, ToggleStatus, TOGGLE_NAME};

pub type Error = Box<dyn std::error::Error + Send + Sync>;
