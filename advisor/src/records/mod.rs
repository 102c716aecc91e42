//! Saved questionnaire results (CSV) and bulk export.

pub mod error;
pub mod record;
pub mod store;

pub use error::{PersistenceError, PersistenceResult};
pub use record::{StudentRecord, NOT_AVAILABLE, TIMESTAMP_FORMAT};
pub use store::RecordStore;
