//! History persistence error types.

use crate::core::Unit;
use thiserror::Error;

/// Errors that can occur while reading or writing stored history.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage could not be read or written
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Storage is not usable at all (quota exceeded, lock poisoned, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Encoding history to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding stored bytes failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Stored content decoded but broke record invariants
    #[error("Stored history is corrupt: {0}")]
    Corrupt(String),
}

/// A single broken invariant found in stored history.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordViolation {
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Record {index}: value is not a finite number")]
    NonFiniteValue { index: usize },

    #[error("Record {index}: input {value}°{unit} is below absolute zero")]
    BelowAbsoluteZero { index: usize, value: f64, unit: Unit },

    #[error("Record {index}: output {value}°{unit} is below absolute zero")]
    OutputBelowAbsoluteZero { index: usize, value: f64, unit: Unit },

    #[error("Record {index}: output {stored}°{unit} does not match converted {expected}°{unit}")]
    OutputMismatch {
        index: usize,
        stored: f64,
        expected: f64,
        unit: Unit,
    },

    #[error("Record {index}: conversion °{from} to °{to} is not supported")]
    UnsupportedPair { index: usize, from: Unit, to: Unit },
}
