//! In-memory key-value store.

use super::{HistoryStore, StoreConfig};
use crate::history::error::StoreError;
use crate::history::record::ConversionRecord;
use crate::history::snapshot::HistorySnapshot;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

type Entries = HashMap<String, Vec<u8>>;

/// Session-scoped store keeping encoded snapshots in memory.
///
/// Clones share the same entries, the way several browser tabs share one
/// storage area. Writes can be made to fail on demand to exercise
/// degraded persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<Entries>>,
    fail_writes: Arc<AtomicBool>,
    config: StoreConfig,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Make every subsequent `save` and `remove` fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw bytes stored under the configured key.
    pub fn raw(&self) -> Option<Vec<u8>> {
        self.entries().ok()?.get(&self.config.key).cloned()
    }

    /// Overwrite the stored bytes directly, bypassing encoding.
    pub fn put_raw(&self, bytes: impl Into<Vec<u8>>) -> Result<(), StoreError> {
        self.entries()?.insert(self.config.key.clone(), bytes.into());
        Ok(())
    }

    fn entries(&self) -> Result<MutexGuard<'_, Entries>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes are disabled".to_string()));
        }
        Ok(())
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<ConversionRecord>, StoreError> {
        let bytes = match self.entries()?.get(&self.config.key) {
            Some(bytes) => bytes.clone(),
            None => return Ok(Vec::new()),
        };
        HistorySnapshot::decode(&bytes, self.config.format)?.into_records()
    }

    fn save(&mut self, records: &[ConversionRecord]) -> Result<(), StoreError> {
        self.check_writable()?;
        let bytes = HistorySnapshot::new(records.to_vec()).encode(self.config.format)?;
        self.entries()?.insert(self.config.key.clone(), bytes);
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        self.check_writable()?;
        self.entries()?.remove(&self.config.key);
        Ok(())
    }
}
