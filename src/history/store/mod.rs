//! Persistence collaborators for the conversion history.
//!
//! A store holds one serialized history under a single fixed key. The
//! history log never owns storage lifetime; it reads, prepends, writes
//! back, and removes through this trait. Stores do no locking: two logs
//! sharing a backing store race, and the last write wins.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use super::error::StoreError;
use super::record::ConversionRecord;
use super::snapshot::StoreFormat;
use serde::{Deserialize, Serialize};

/// Default key history is stored under
pub const DEFAULT_STORAGE_KEY: &str = "tempHistory";

/// Where and how a store keeps the history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key the serialized history lives under
    pub key: String,
    /// Encoding of the stored snapshot
    pub format: StoreFormat,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_STORAGE_KEY.to_string(),
            format: StoreFormat::Json,
        }
    }
}

impl StoreConfig {
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_format(mut self, format: StoreFormat) -> Self {
        self.format = format;
        self
    }
}

/// Capability interface for reading and writing the stored history.
///
/// # Example Implementation
///
/// ```rust
/// use thermoscope::history::{ConversionRecord, HistoryStore, StoreError};
///
/// struct NullStore;
///
/// impl HistoryStore for NullStore {
///     fn load(&self) -> Result<Vec<ConversionRecord>, StoreError> {
///         Ok(Vec::new())
///     }
///
///     fn save(&mut self, _records: &[ConversionRecord]) -> Result<(), StoreError> {
///         Ok(())
///     }
///
///     fn remove(&mut self) -> Result<(), StoreError> {
///         Ok(())
///     }
/// }
/// ```
pub trait HistoryStore {
    /// Read the stored records, most-recent-first.
    ///
    /// Returns an empty list when nothing is stored. Unreadable or
    /// corrupt content is an error.
    fn load(&self) -> Result<Vec<ConversionRecord>, StoreError>;

    /// Replace the stored records.
    fn save(&mut self, records: &[ConversionRecord]) -> Result<(), StoreError>;

    /// Delete the stored history. Removing nothing is not an error.
    fn remove(&mut self) -> Result<(), StoreError>;
}

impl<T: HistoryStore + ?Sized> HistoryStore for Box<T> {
    fn load(&self) -> Result<Vec<ConversionRecord>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, records: &[ConversionRecord]) -> Result<(), StoreError> {
        (**self).save(records)
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        (**self).remove()
    }
}
