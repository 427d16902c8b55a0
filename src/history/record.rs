//! Immutable record of one successful conversion.

use crate::core::{round2, ConversionError, Temperature, Unit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single successful conversion.
///
/// Records are immutable values: both sides are rounded to two decimals
/// when the record is created and nothing changes them afterwards. The
/// serialized keys (`inputTemp`, `inputUnit`, `outputTemp`, `outputUnit`)
/// are the stored history format.
///
/// # Example
///
/// ```rust
/// use thermoscope::core::{convert, Unit};
/// use thermoscope::history::ConversionRecord;
///
/// let output = convert(37.0, Unit::Celsius, Unit::Fahrenheit).unwrap();
/// let record = ConversionRecord::from_conversion(37.0, Unit::Celsius, output);
///
/// assert_eq!(record.output_value(), 98.6);
/// assert_eq!(record.to_string(), "37°C = 98.60°F");
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    input_temp: f64,
    input_unit: Unit,
    output_temp: f64,
    output_unit: Unit,
}

impl ConversionRecord {
    /// Create a record from the input of a conversion and its result.
    pub fn from_conversion(input_value: f64, input_unit: Unit, output: Temperature) -> Self {
        Self {
            input_temp: round2(input_value),
            input_unit,
            output_temp: round2(output.value()),
            output_unit: output.unit(),
        }
    }

    pub fn input_value(&self) -> f64 {
        self.input_temp
    }

    pub fn input_unit(&self) -> Unit {
        self.input_unit
    }

    pub fn output_value(&self) -> f64 {
        self.output_temp
    }

    pub fn output_unit(&self) -> Unit {
        self.output_unit
    }

    /// The output as a validated temperature.
    ///
    /// Fails if the record was deserialized outside a validated snapshot
    /// and holds an output below absolute zero.
    pub fn output(&self) -> Result<Temperature, ConversionError> {
        Temperature::new(self.output_temp, self.output_unit)
    }
}

/// History line: input as entered, output with two decimals.
impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{} = {:.2}°{}",
            self.input_temp, self.input_unit, self.output_temp, self.output_unit
        )
    }
}
