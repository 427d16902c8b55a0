//! Text-field editing and number parsing.

/// Contents of the temperature text field.
///
/// Only digits and a single decimal point can be typed in. `set_text`
/// replaces the contents wholesale, e.g. for pasted text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append a digit or decimal point; other characters are ignored.
    ///
    /// A comma counts as a decimal point. A second decimal point is
    /// dropped.
    pub fn insert(&mut self, ch: char) {
        match ch {
            '.' | ',' => {
                if !self.text.contains('.') {
                    self.text.push('.');
                }
            }
            d if d.is_ascii_digit() => self.text.push(d),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Parse the current contents with [`parse_input`].
    pub fn value(&self) -> f64 {
        parse_input(&self.text)
    }
}

/// Parse the leading number of `text`, or NaN if there is none.
///
/// Leading whitespace is skipped, a comma is read as a decimal point,
/// and trailing garbage after the number is ignored.
///
/// # Example
///
/// ```rust
/// use thermoscope::shell::parse_input;
///
/// assert_eq!(parse_input("37"), 37.0);
/// assert_eq!(parse_input(" -12,5"), -12.5);
/// assert_eq!(parse_input("98.6abc"), 98.6);
/// assert!(parse_input("abc").is_nan());
/// assert!(parse_input("").is_nan());
/// ```
pub fn parse_input(text: &str) -> f64 {
    let normalized = text.trim_start().replace(',', ".");
    let bytes = normalized.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    normalized[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_append() {
        let mut input = InputBuffer::new();
        for ch in ['3', '7'] {
            input.insert(ch);
        }
        assert_eq!(input.text(), "37");
        assert_eq!(input.value(), 37.0);
    }

    #[test]
    fn single_decimal_point() {
        let mut input = InputBuffer::new();
        for ch in ['1', '.', '5', '.', ',', '2'] {
            input.insert(ch);
        }
        assert_eq!(input.text(), "1.52");
    }

    #[test]
    fn comma_becomes_point() {
        let mut input = InputBuffer::new();
        for ch in ['0', ',', '5'] {
            input.insert(ch);
        }
        assert_eq!(input.text(), "0.5");
    }

    #[test]
    fn other_characters_are_dropped() {
        let mut input = InputBuffer::new();
        for ch in ['a', '-', '4', ' '] {
            input.insert(ch);
        }
        assert_eq!(input.text(), "4");
    }

    #[test]
    fn backspace_and_clear() {
        let mut input = InputBuffer::new();
        input.set_text("123");
        input.backspace();
        assert_eq!(input.text(), "12");

        input.clear();
        assert!(input.is_empty());
        input.backspace();
        assert!(input.is_empty());
    }

    #[test]
    fn parse_accepts_partial_forms() {
        assert_eq!(parse_input("5."), 5.0);
        assert_eq!(parse_input(".5"), 0.5);
        assert_eq!(parse_input("+3"), 3.0);
        assert_eq!(parse_input("1e2"), 100.0);
        assert_eq!(parse_input("1e"), 1.0);
        assert_eq!(parse_input("12abc"), 12.0);
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert!(parse_input(".").is_nan());
        assert!(parse_input("-").is_nan());
        assert!(parse_input("   ").is_nan());
        assert!(parse_input("abc").is_nan());
    }
}
