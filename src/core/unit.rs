//! Temperature units and their physical floors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit a temperature value is expressed in.
///
/// Serializes as its one-letter symbol (`"C"`, `"F"`, `"K"`), which is
/// also how units appear in persisted history.
///
/// # Example
///
/// ```rust
/// use thermoscope::core::Unit;
///
/// assert_eq!(Unit::Celsius.symbol(), "C");
/// assert_eq!(Unit::Fahrenheit.absolute_zero(), -459.67);
/// assert_eq!(Unit::Kelvin.to_string(), "K");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
}

impl Unit {
    /// All supported units.
    pub const ALL: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

    /// One-letter symbol used in display strings and storage.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
            Self::Kelvin => "K",
        }
    }

    /// Lowest physically valid value in this unit.
    pub fn absolute_zero(&self) -> f64 {
        match self {
            Self::Celsius => -273.15,
            Self::Fahrenheit => -459.67,
            Self::Kelvin => 0.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_single_letters() {
        assert_eq!(Unit::Celsius.symbol(), "C");
        assert_eq!(Unit::Fahrenheit.symbol(), "F");
        assert_eq!(Unit::Kelvin.symbol(), "K");
    }

    #[test]
    fn absolute_zero_floors() {
        assert_eq!(Unit::Celsius.absolute_zero(), -273.15);
        assert_eq!(Unit::Fahrenheit.absolute_zero(), -459.67);
        assert_eq!(Unit::Kelvin.absolute_zero(), 0.0);
    }

    #[test]
    fn unit_serializes_as_symbol() {
        let json = serde_json::to_string(&Unit::Fahrenheit).unwrap();
        assert_eq!(json, "\"F\"");

        let unit: Unit = serde_json::from_str("\"K\"").unwrap();
        assert_eq!(unit, Unit::Kelvin);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let result: Result<Unit, _> = serde_json::from_str("\"R\"");
        assert!(result.is_err());
    }
}
