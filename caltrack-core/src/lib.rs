//! caltrack Core Library
//!
//! Calorie records, the key-value storage port and the tracker that keeps
//! running totals in sync with storage and a display.

pub mod models;
pub mod record_store;
pub mod storage;
pub mod tracker;

pub use models::{CalorieEntry, EntryId, Meal, Workout};
pub use record_store::{RecordError, RecordStore, DEFAULT_CALORIE_LIMIT, DEFAULT_TOTAL_CALORIES};
pub use storage::{FileStore, KeyValueStore, MemoryStore, RecordKey, StorageError};
pub use tracker::{Summary, Tracker, TrackerDisplay, TrackerResult};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
