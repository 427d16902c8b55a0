//! Durable store keeping one file per key inside a directory.

use super::{HistoryStore, StoreConfig};
use crate::history::error::StoreError;
use crate::history::record::ConversionRecord;
use crate::history::snapshot::HistorySnapshot;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed store.
///
/// The snapshot for key `k` lives at `<dir>/k.json` (or `k.bin`). Writes
/// go to a temporary file first and are renamed into place, so a crash
/// mid-write never leaves a half-written history behind.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
    config: StoreConfig,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>, config: StoreConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    /// Path of the snapshot file for the configured key.
    pub fn path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.config.key, self.config.format.extension()))
    }
}

impl HistoryStore for FileStore {
    fn load(&self) -> Result<Vec<ConversionRecord>, StoreError> {
        let bytes = match fs::read(self.path()) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        HistorySnapshot::decode(&bytes, self.config.format)?.into_records()
    }

    fn save(&mut self, records: &[ConversionRecord]) -> Result<(), StoreError> {
        let bytes = HistorySnapshot::new(records.to_vec()).encode(self.config.format)?;
        fs::create_dir_all(&self.dir)?;

        let path = self.path();
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
