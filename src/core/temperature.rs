//! Temperature values and two-decimal rounding.

use super::converter::{validate, ConversionError};
use super::unit::Unit;
use serde::Serialize;
use std::fmt;

/// Round to two decimal places, halves away from zero.
///
/// Negative zero is normalized to `0.0` so it never displays as `-0.00`.
///
/// # Example
///
/// ```rust
/// use thermoscope::core::round2;
///
/// assert_eq!(round2(98.6), 98.6);
/// assert_eq!(round2(37.777), 37.78);
/// assert_eq!(round2(-0.001), 0.0);
/// ```
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// A numeric value tagged with its unit.
///
/// A `Temperature` never sits below the absolute-zero floor of its unit:
/// `new` validates, and conversions only produce validated values.
///
/// `Display` renders the value with exactly two decimals followed by
/// `°` and the unit symbol, e.g. `98.60°F`. Temperatures serialize but
/// are never deserialized directly; stored values come back through
/// validated history snapshots.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct Temperature {
    value: f64,
    unit: Unit,
}

impl Temperature {
    /// Create a validated temperature.
    ///
    /// # Example
    ///
    /// ```rust
    /// use thermoscope::core::{ConversionError, Temperature, Unit};
    ///
    /// let body = Temperature::new(37.0, Unit::Celsius).unwrap();
    /// assert_eq!(body.to_string(), "37.00°C");
    ///
    /// let err = Temperature::new(-1.0, Unit::Kelvin).unwrap_err();
    /// assert!(matches!(err, ConversionError::BelowAbsoluteZero { .. }));
    /// ```
    pub fn new(value: f64, unit: Unit) -> Result<Self, ConversionError> {
        validate(value, unit)?;
        Ok(Self { value, unit })
    }

    pub(crate) fn from_validated(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°{}", self.value, self.unit)
    }
}
