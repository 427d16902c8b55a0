//! Conversion history and its persistence.
//!
//! This module is the stateful edge of the crate:
//! - Immutable `ConversionRecord` values, one per successful conversion
//! - `HistoryLog`, a most-recent-first log over an injected store
//! - `HistoryStore` implementations (in-memory and file-backed)
//! - Versioned snapshots validated on load
//!
//! Storage errors stay inside this module. Callers of `HistoryLog` never
//! see them; they are logged and the history degrades to what could be
//! read.

mod error;
mod log;
mod record;
mod snapshot;
mod store;

pub use error::{RecordViolation, StoreError};
pub use log::HistoryLog;
pub use record::ConversionRecord;
pub use snapshot::{HistorySnapshot, StoreFormat, OUTPUT_TOLERANCE, SNAPSHOT_VERSION};
pub use store::{FileStore, HistoryStore, MemoryStore, StoreConfig, DEFAULT_STORAGE_KEY};
