//! The converter widget: input buffer, history and display wired together.

use super::action::{Action, KeyCommand};
use super::input::InputBuffer;
use crate::core::{convert, validate_input, ConversionError, Temperature};
use crate::history::{ConversionRecord, HistoryLog, HistoryStore};
use tracing::debug;

/// How the display should style a message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Success,
    Error,
}

/// Where the widget sends results and the rendered history.
pub trait DisplaySink {
    /// Show a formatted result or error message.
    fn show_result(&mut self, message: &str, status: Status);

    /// Re-render the whole history, most-recent-first.
    fn show_history(&mut self, records: &[ConversionRecord]);
}

/// Outcome of one conversion attempt.
pub type Outcome = Result<Temperature, ConversionError>;

/// Formatted message and status for an outcome.
///
/// # Example
///
/// ```rust
/// use thermoscope::core::{convert, ConversionError, Unit};
/// use thermoscope::shell::{render_outcome, Status};
///
/// let ok = convert(37.0, Unit::Celsius, Unit::Fahrenheit);
/// assert_eq!(render_outcome(&ok), ("98.60°F".to_string(), Status::Success));
///
/// let err = Err(ConversionError::NotANumber);
/// assert_eq!(render_outcome(&err).1, Status::Error);
/// ```
pub fn render_outcome(outcome: &Outcome) -> (String, Status) {
    match outcome {
        Ok(temperature) => (temperature.to_string(), Status::Success),
        Err(e) => (e.to_string(), Status::Error),
    }
}

/// Adapter between user input and the pure core.
///
/// A successful conversion is recorded in history, shown, and clears the
/// text field. A failed one only shows its error; history and input are
/// left as they were so the user can correct and retry.
pub struct Widget<P: HistoryStore, D: DisplaySink> {
    input: InputBuffer,
    history: HistoryLog<P>,
    display: D,
}

impl<P: HistoryStore, D: DisplaySink> Widget<P, D> {
    /// Create the widget and render the stored history.
    pub fn new(history: HistoryLog<P>, mut display: D) -> Self {
        display.show_history(&history.list());
        Self {
            input: InputBuffer::new(),
            history,
            display,
        }
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    pub fn history(&self) -> &HistoryLog<P> {
        &self.history
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run a conversion on the current text.
    pub fn run(&mut self, action: Action) -> Outcome {
        let source = action.source();
        let value = self.input.value();
        let outcome = validate_input(self.input.text(), value, source)
            .and_then(|()| convert(value, source, action.target()));

        let (message, status) = render_outcome(&outcome);
        if let Ok(temperature) = &outcome {
            debug!(%value, from = %source, result = %temperature, "conversion succeeded");
            let view = self
                .history
                .append(ConversionRecord::from_conversion(value, source, *temperature));
            self.display.show_result(&message, status);
            self.display.show_history(&view);
            self.input.clear();
        } else {
            debug!(text = self.input.text(), %message, "conversion rejected");
            self.display.show_result(&message, status);
        }
        outcome
    }

    /// Handle a key press. Returns the outcome if it triggered a conversion.
    pub fn press_key(&mut self, key: &str) -> Option<Outcome> {
        match KeyCommand::from_key(key)? {
            KeyCommand::Convert(action) => Some(self.run(action)),
            KeyCommand::Backspace => {
                self.input.backspace();
                None
            }
            KeyCommand::Insert(ch) => {
                self.input.insert(ch);
                None
            }
        }
    }

    /// Empty the stored history and re-render it.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.display.show_history(&self.history.list());
    }
}
