//! Key-value persistence port for caltrack.
//!
//! Records are kept in a flat string-keyed store, one value per key:
//! - `calorieLimit`: stringified integer
//! - `totalCalories`: stringified integer
//! - `meals`: JSON array of meals
//! - `workouts`: JSON array of workouts
//!
//! The store knows nothing about these shapes; [`crate::RecordStore`] does
//! the encoding. Backends:
//! - [`MemoryStore`]: in-process map, nothing survives the process
//! - [`FileStore`]: one file per key inside a data directory

mod file;
mod memory;
mod record_key;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use record_key::RecordKey;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A string-keyed store where an absent key is distinct from any value.
pub trait KeyValueStore {
    /// Returns the value for `key`, or `None` if it was never set (or removed).
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the value for `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Errors that can occur in a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error for {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Value for key '{0}' is not valid UTF-8")]
    InvalidUtf8(String),
}
