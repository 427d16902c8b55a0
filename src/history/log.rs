//! Most-recent-first conversion history over an injected store.

use super::record::ConversionRecord;
use super::store::HistoryStore;
use tracing::{debug, warn};

/// Ordered conversion history.
///
/// The log keeps no copy of its own: every `list` re-reads the store so
/// that other writers sharing it are never hidden behind a stale cache.
/// Storage failures are logged and absorbed; an unreadable store reads as
/// an empty history.
///
/// # Example
///
/// ```rust
/// use thermoscope::core::{convert, Unit};
/// use thermoscope::history::{ConversionRecord, HistoryLog, MemoryStore};
///
/// let mut log = HistoryLog::new(MemoryStore::new());
///
/// let first = convert(0.0, Unit::Celsius, Unit::Fahrenheit).unwrap();
/// log.append(ConversionRecord::from_conversion(0.0, Unit::Celsius, first));
///
/// let second = convert(37.0, Unit::Celsius, Unit::Fahrenheit).unwrap();
/// log.append(ConversionRecord::from_conversion(37.0, Unit::Celsius, second));
///
/// let records = log.list();
/// assert_eq!(records[0].output_value(), 98.6);
/// assert_eq!(records[1].output_value(), 32.0);
///
/// log.clear();
/// assert!(log.list().is_empty());
/// ```
#[derive(Debug)]
pub struct HistoryLog<P: HistoryStore> {
    store: P,
}

impl<P: HistoryStore> HistoryLog<P> {
    pub fn new(store: P) -> Self {
        Self { store }
    }

    /// Current records, most-recent-first.
    pub fn list(&self) -> Vec<ConversionRecord> {
        match self.store.load() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "stored history unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Insert `record` at the front and write the history back.
    ///
    /// Returns the history as it should now be rendered. If the write
    /// fails the returned view still contains the new record.
    pub fn append(&mut self, record: ConversionRecord) -> Vec<ConversionRecord> {
        let mut records = self.list();
        records.insert(0, record);

        match self.store.save(&records) {
            Ok(()) => debug!(len = records.len(), "history appended"),
            Err(e) => warn!(error = %e, "failed to persist history"),
        }
        records
    }

    /// Remove every record from the store.
    pub fn clear(&mut self) {
        match self.store.remove() {
            Ok(()) => debug!("history cleared"),
            Err(e) => warn!(error = %e, "failed to clear stored history"),
        }
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}
