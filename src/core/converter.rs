//! Pure unit conversion with absolute-zero validation.
//!
//! Celsius is the pivot representation. Only the three conversions the
//! widget offers are supported: Celsius to Fahrenheit, Fahrenheit to
//! Celsius and Celsius to Kelvin. Kelvin is produced, never consumed.

use super::temperature::{round2, Temperature};
use super::unit::Unit;
use thiserror::Error;

/// Reasons a single conversion attempt is rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ConversionError {
    #[error("Please enter a valid number!")]
    NotANumber,

    #[error("Temperature cannot be below absolute zero ({}°{unit})!", .unit.absolute_zero())]
    BelowAbsoluteZero { value: f64, unit: Unit },

    #[error("Conversion from °{from} to °{to} is not supported")]
    UnsupportedConversion { from: Unit, to: Unit },
}

/// Check that `value` is a finite number at or above the floor of `unit`.
///
/// # Example
///
/// ```rust
/// use thermoscope::core::{validate, ConversionError, Unit};
///
/// assert!(validate(-273.15, Unit::Celsius).is_ok());
/// assert_eq!(validate(f64::NAN, Unit::Celsius), Err(ConversionError::NotANumber));
/// assert!(validate(-459.68, Unit::Fahrenheit).is_err());
/// ```
pub fn validate(value: f64, unit: Unit) -> Result<(), ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::NotANumber);
    }
    if value < unit.absolute_zero() {
        return Err(ConversionError::BelowAbsoluteZero { value, unit });
    }
    Ok(())
}

/// Validate a value parsed from user text.
///
/// Empty or whitespace-only text is `NotANumber` regardless of what the
/// parser produced for it.
pub fn validate_input(raw: &str, value: f64, unit: Unit) -> Result<(), ConversionError> {
    if raw.trim().is_empty() {
        return Err(ConversionError::NotANumber);
    }
    validate(value, unit)
}

/// Convert `value` from one unit to another.
///
/// Validation runs first; nothing is computed for invalid input. The
/// result is rounded to two decimal places.
///
/// # Example
///
/// ```rust
/// use thermoscope::core::{convert, Unit};
///
/// let fahrenheit = convert(37.0, Unit::Celsius, Unit::Fahrenheit).unwrap();
/// assert_eq!(fahrenheit.value(), 98.6);
/// assert_eq!(fahrenheit.to_string(), "98.60°F");
///
/// let kelvin = convert(0.0, Unit::Celsius, Unit::Kelvin).unwrap();
/// assert_eq!(kelvin.value(), 273.15);
/// ```
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<Temperature, ConversionError> {
    validate(value, from)?;

    let converted = match (from, to) {
        (Unit::Celsius, Unit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Unit::Fahrenheit, Unit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Unit::Celsius, Unit::Kelvin) => value + 273.15,
        _ => return Err(ConversionError::UnsupportedConversion { from, to }),
    };

    Ok(Temperature::from_validated(round2(converted), to))
}

/// Whether `convert` accepts the `(from, to)` pair.
pub fn is_supported(from: Unit, to: Unit) -> bool {
    matches!(
        (from, to),
        (Unit::Celsius, Unit::Fahrenheit)
            | (Unit::Fahrenheit, Unit::Celsius)
            | (Unit::Celsius, Unit::Kelvin)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_to_fahrenheit() {
        assert_eq!(convert(100.0, Unit::Celsius, Unit::Fahrenheit).unwrap().value(), 212.0);
        assert_eq!(convert(0.0, Unit::Celsius, Unit::Fahrenheit).unwrap().value(), 32.0);
        assert_eq!(convert(-40.0, Unit::Celsius, Unit::Fahrenheit).unwrap().value(), -40.0);
    }

    #[test]
    fn fahrenheit_to_celsius() {
        assert_eq!(convert(212.0, Unit::Fahrenheit, Unit::Celsius).unwrap().value(), 100.0);
        assert_eq!(convert(98.6, Unit::Fahrenheit, Unit::Celsius).unwrap().value(), 37.0);
        assert_eq!(convert(0.0, Unit::Fahrenheit, Unit::Celsius).unwrap().value(), -17.78);
    }

    #[test]
    fn celsius_to_kelvin() {
        let kelvin = convert(-273.15, Unit::Celsius, Unit::Kelvin).unwrap();
        assert_eq!(kelvin.value(), 0.0);
        assert_eq!(kelvin.unit(), Unit::Kelvin);
    }

    #[test]
    fn celsius_floor_is_inclusive() {
        let result = convert(-273.15, Unit::Celsius, Unit::Fahrenheit).unwrap();
        assert_eq!(result.value(), -459.67);

        let err = convert(-273.16, Unit::Celsius, Unit::Kelvin).unwrap_err();
        assert!(matches!(err, ConversionError::BelowAbsoluteZero { unit: Unit::Celsius, .. }));
    }

    #[test]
    fn fahrenheit_floor_is_inclusive() {
        let result = convert(-459.67, Unit::Fahrenheit, Unit::Celsius).unwrap();
        assert_eq!(result.value(), -273.15);

        let err = convert(-459.68, Unit::Fahrenheit, Unit::Celsius).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::BelowAbsoluteZero { unit: Unit::Fahrenheit, .. }
        ));
    }

    #[test]
    fn rounding_is_numeric_half_up() {
        // 274.265 has no exact binary form; numeric rounding still goes up.
        let kelvin = convert(1.115, Unit::Celsius, Unit::Kelvin).unwrap();
        assert_eq!(kelvin.value(), 274.27);
        assert_eq!(kelvin.to_string(), "274.27°K");
    }

    #[test]
    fn kelvin_floor_is_validated() {
        assert!(validate(0.0, Unit::Kelvin).is_ok());
        assert!(validate(-0.01, Unit::Kelvin).is_err());
    }

    #[test]
    fn validation_runs_before_pair_check() {
        let err = convert(f64::NAN, Unit::Kelvin, Unit::Celsius).unwrap_err();
        assert_eq!(err, ConversionError::NotANumber);
    }

    #[test]
    fn unsupported_pairs_fail() {
        for from in Unit::ALL {
            for to in Unit::ALL {
                let result = convert(10.0, from, to);
                if is_supported(from, to) {
                    assert!(result.is_ok(), "{from} -> {to} should convert");
                } else {
                    assert_eq!(result, Err(ConversionError::UnsupportedConversion { from, to }));
                }
            }
        }
    }

    #[test]
    fn blank_text_is_not_a_number() {
        assert_eq!(validate_input("", 0.0, Unit::Celsius), Err(ConversionError::NotANumber));
        assert_eq!(validate_input("   ", 5.0, Unit::Celsius), Err(ConversionError::NotANumber));
        assert!(validate_input("5", 5.0, Unit::Celsius).is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(ConversionError::NotANumber.to_string(), "Please enter a valid number!");
        assert_eq!(
            ConversionError::BelowAbsoluteZero { value: -500.0, unit: Unit::Fahrenheit }.to_string(),
            "Temperature cannot be below absolute zero (-459.67°F)!"
        );
        assert_eq!(
            ConversionError::UnsupportedConversion { from: Unit::Kelvin, to: Unit::Celsius }
                .to_string(),
            "Conversion from °K to °C is not supported"
        );
    }
}
