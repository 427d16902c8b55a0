//! Thermoscope: temperature conversion with a persisted history
//!
//! Thermoscope follows a "pure core, imperative shell" layout. The core
//! converts between Celsius, Fahrenheit and Kelvin and validates values
//! against absolute zero with no side effects. The history log records
//! each successful conversion, most-recent-first, through an injected
//! store. The shell wires keyboard input and a display to both.
//!
//! # Core Concepts
//!
//! - **Converter**: `convert` and `validate`, pivoting through Celsius
//! - **History**: immutable `ConversionRecord`s in a `HistoryLog`
//! - **Stores**: `HistoryStore` implementations, in memory or on disk
//! - **Shell**: `Widget`, `InputBuffer` and `DisplaySink`
//!
//! # Example
//!
//! ```rust
//! use thermoscope::core::{convert, Unit};
//! use thermoscope::history::{ConversionRecord, HistoryLog, MemoryStore};
//!
//! let mut history = HistoryLog::new(MemoryStore::new());
//!
//! let result = convert(37.0, Unit::Celsius, Unit::Fahrenheit).unwrap();
//! assert_eq!(result.to_string(), "98.60°F");
//!
//! history.append(ConversionRecord::from_conversion(37.0, Unit::Celsius, result));
//! assert_eq!(history.list()[0].output_value(), 98.6);
//! ```

pub mod core;
pub mod history;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{convert, validate, ConversionError, Temperature, Unit};
pub use crate::history::{ConversionRecord, HistoryLog, HistoryStore};
