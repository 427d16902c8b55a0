//! Persisted envelope around the conversion history.
//!
//! Stores never write bare record lists; they write a `HistorySnapshot`
//! carrying a format version and the time it was saved. Decoded
//! snapshots are validated before their records are trusted.

use super::error::{RecordViolation, StoreError};
use super::record::ConversionRecord;
use crate::core::{convert, is_supported, Unit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Largest accepted gap between a stored output and its recomputed value.
///
/// Records hold a rounded input, so recomputing can move the output by
/// up to two rounding steps.
pub const OUTPUT_TOLERANCE: f64 = 0.02;

/// Encoding used for stored snapshots.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreFormat {
    /// Human-readable JSON
    #[default]
    Json,
    /// Compact bincode
    Binary,
}

impl StoreFormat {
    /// File extension used by file-backed stores.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Binary => "bin",
        }
    }
}

/// Serializable snapshot of the history, most-recent-first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was written
    pub saved_at: DateTime<Utc>,

    /// Records, index 0 being the latest conversion
    pub records: Vec<ConversionRecord>,
}

impl HistorySnapshot {
    pub fn new(records: Vec<ConversionRecord>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            records,
        }
    }

    pub fn encode(&self, format: StoreFormat) -> Result<Vec<u8>, StoreError> {
        match format {
            StoreFormat::Json => serde_json::to_vec(self)
                .map_err(|e| StoreError::SerializationFailed(e.to_string())),
            StoreFormat::Binary => {
                bincode::serialize(self).map_err(|e| StoreError::SerializationFailed(e.to_string()))
            }
        }
    }

    pub fn decode(bytes: &[u8], format: StoreFormat) -> Result<Self, StoreError> {
        match format {
            StoreFormat::Json => serde_json::from_slice(bytes)
                .map_err(|e| StoreError::DeserializationFailed(e.to_string())),
            StoreFormat::Binary => bincode::deserialize(bytes)
                .map_err(|e| StoreError::DeserializationFailed(e.to_string())),
        }
    }

    /// Check every record, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<RecordViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<RecordViolation>>> = Vec::new();

        if self.version != SNAPSHOT_VERSION {
            checks.push(Validation::fail(RecordViolation::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            }));
        }

        for (index, record) in self.records.iter().enumerate() {
            checks.push(check_record(index, record));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and unwrap the records.
    ///
    /// Any violation turns the whole snapshot into `StoreError::Corrupt`.
    pub fn into_records(self) -> Result<Vec<ConversionRecord>, StoreError> {
        match self.validate() {
            Validation::Success(_) => Ok(self.records),
            Validation::Failure(violations) => {
                let reasons: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                Err(StoreError::Corrupt(reasons.join("; ")))
            }
        }
    }
}

fn check_record(
    index: usize,
    record: &ConversionRecord,
) -> Validation<(), NonEmptyVec<RecordViolation>> {
    if !record.input_value().is_finite() || !record.output_value().is_finite() {
        return Validation::fail(RecordViolation::NonFiniteValue { index });
    }

    let (from, to) = (record.input_unit(), record.output_unit());
    if !is_supported(from, to) {
        return Validation::fail(RecordViolation::UnsupportedPair { index, from, to });
    }

    if below_floor(record.input_value(), from) {
        return Validation::fail(RecordViolation::BelowAbsoluteZero {
            index,
            value: record.input_value(),
            unit: from,
        });
    }

    if below_floor(record.output_value(), to) {
        return Validation::fail(RecordViolation::OutputBelowAbsoluteZero {
            index,
            value: record.output_value(),
            unit: to,
        });
    }

    match convert(record.input_value(), from, to) {
        Ok(expected) if (expected.value() - record.output_value()).abs() <= OUTPUT_TOLERANCE => {
            Validation::success(())
        }
        Ok(expected) => Validation::fail(RecordViolation::OutputMismatch {
            index,
            stored: record.output_value(),
            expected: expected.value(),
            unit: to,
        }),
        Err(_) => Validation::fail(RecordViolation::UnsupportedPair { index, from, to }),
    }
}

fn below_floor(value: f64, unit: Unit) -> bool {
    value < unit.absolute_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::convert;

    fn record(value: f64, from: Unit, to: Unit) -> ConversionRecord {
        ConversionRecord::from_conversion(value, from, convert(value, from, to).unwrap())
    }

    fn sample() -> HistorySnapshot {
        HistorySnapshot::new(vec![
            record(37.0, Unit::Celsius, Unit::Fahrenheit),
            record(212.0, Unit::Fahrenheit, Unit::Celsius),
        ])
    }

    #[test]
    fn json_snapshot_decodes() {
        let bytes = sample().encode(StoreFormat::Json).unwrap();
        let decoded = HistorySnapshot::decode(&bytes, StoreFormat::Json).unwrap();

        assert_eq!(decoded.version, SNAPSHOT_VERSION);
        assert_eq!(decoded.records, sample().records);
    }

    #[test]
    fn binary_snapshot_decodes() {
        let bytes = sample().encode(StoreFormat::Binary).unwrap();
        let decoded = HistorySnapshot::decode(&bytes, StoreFormat::Binary).unwrap();

        assert_eq!(decoded.records, sample().records);
    }

    #[test]
    fn garbage_fails_to_decode() {
        let result = HistorySnapshot::decode(b"not json", StoreFormat::Json);
        assert!(matches!(result, Err(StoreError::DeserializationFailed(_))));
    }

    #[test]
    fn valid_snapshot_passes_validation() {
        assert!(sample().validate().is_success());
        assert_eq!(sample().into_records().unwrap().len(), 2);
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let json = r#"{
            "version": 7,
            "saved_at": "2026-01-01T00:00:00Z",
            "records": [
                {"inputTemp": -300.0, "inputUnit": "C", "outputTemp": -508.0, "outputUnit": "F"},
                {"inputTemp": 10.0, "inputUnit": "K", "outputTemp": -263.15, "outputUnit": "C"}
            ]
        }"#;
        let snapshot = HistorySnapshot::decode(json.as_bytes(), StoreFormat::Json).unwrap();

        match snapshot.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, RecordViolation::UnsupportedVersion { found: 7, .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, RecordViolation::BelowAbsoluteZero { index: 0, .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, RecordViolation::UnsupportedPair { index: 1, .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn corrupt_snapshot_yields_error() {
        let mut snapshot = sample();
        snapshot.version = 0;

        let result = snapshot.into_records();
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn output_below_floor_is_rejected() {
        let json = r#"{
            "version": 1,
            "saved_at": "2026-01-01T00:00:00Z",
            "records": [
                {"inputTemp": 10.0, "inputUnit": "C", "outputTemp": -999.0, "outputUnit": "K"}
            ]
        }"#;
        let snapshot = HistorySnapshot::decode(json.as_bytes(), StoreFormat::Json).unwrap();

        match snapshot.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.iter().any(|e| matches!(
                    e,
                    RecordViolation::OutputBelowAbsoluteZero { index: 0, unit: Unit::Kelvin, .. }
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn output_must_match_conversion() {
        let json = r#"{
            "version": 1,
            "saved_at": "2026-01-01T00:00:00Z",
            "records": [
                {"inputTemp": 37.0, "inputUnit": "C", "outputTemp": 98.6, "outputUnit": "F"},
                {"inputTemp": 37.0, "inputUnit": "C", "outputTemp": 500.0, "outputUnit": "F"}
            ]
        }"#;
        let snapshot = HistorySnapshot::decode(json.as_bytes(), StoreFormat::Json).unwrap();

        match snapshot.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, RecordViolation::OutputMismatch { index: 1, .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn recomputed_output_tolerates_input_rounding() {
        let snapshot = HistorySnapshot::new(vec![
            record(36.666, Unit::Celsius, Unit::Fahrenheit),
            record(-273.149, Unit::Celsius, Unit::Kelvin),
            record(0.005, Unit::Fahrenheit, Unit::Celsius),
        ]);
        assert!(snapshot.validate().is_success());
    }

    #[test]
    fn format_extensions() {
        assert_eq!(StoreFormat::Json.extension(), "json");
        assert_eq!(StoreFormat::Binary.extension(), "bin");
        assert_eq!(StoreFormat::default(), StoreFormat::Json);
    }
}
