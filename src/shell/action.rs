//! User actions and their keyboard shortcuts.

use crate::core::Unit;

/// A conversion the widget offers.
///
/// Each action fixes its source unit: the text field holds Celsius for
/// the Fahrenheit and Kelvin actions and Fahrenheit for the Celsius one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    ToFahrenheit,
    ToCelsius,
    ToKelvin,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::ToFahrenheit, Action::ToCelsius, Action::ToKelvin];

    pub fn source(&self) -> Unit {
        match self {
            Self::ToFahrenheit | Self::ToKelvin => Unit::Celsius,
            Self::ToCelsius => Unit::Fahrenheit,
        }
    }

    pub fn target(&self) -> Unit {
        match self {
            Self::ToFahrenheit => Unit::Fahrenheit,
            Self::ToCelsius => Unit::Celsius,
            Self::ToKelvin => Unit::Kelvin,
        }
    }
}

/// What a single key press asks the widget to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KeyCommand {
    Convert(Action),
    Backspace,
    /// A digit or the decimal point, already normalized
    Insert(char),
}

impl KeyCommand {
    /// Map a key name as reported by a keyboard event.
    ///
    /// `Enter` and `f` convert to Fahrenheit, `c` to Celsius and `k` to
    /// Kelvin (letters are case-insensitive). Digits and `.` insert
    /// themselves; `,` inserts a decimal point. Anything else is ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use thermoscope::shell::{Action, KeyCommand};
    ///
    /// assert_eq!(KeyCommand::from_key("Enter"), Some(KeyCommand::Convert(Action::ToFahrenheit)));
    /// assert_eq!(KeyCommand::from_key("K"), Some(KeyCommand::Convert(Action::ToKelvin)));
    /// assert_eq!(KeyCommand::from_key(","), Some(KeyCommand::Insert('.')));
    /// assert_eq!(KeyCommand::from_key("x"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Backspace" => return Some(Self::Backspace),
            "Enter" => return Some(Self::Convert(Action::ToFahrenheit)),
            _ => {}
        }

        let mut chars = key.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        match ch.to_ascii_lowercase() {
            'f' => Some(Self::Convert(Action::ToFahrenheit)),
            'c' => Some(Self::Convert(Action::ToCelsius)),
            'k' => Some(Self::Convert(Action::ToKelvin)),
            '.' | ',' => Some(Self::Insert('.')),
            d if d.is_ascii_digit() => Some(Self::Insert(d)),
            _ => None,
        }
    }
}
