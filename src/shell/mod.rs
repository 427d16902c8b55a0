//! Imperative shell around the pure core.
//!
//! Keyboard and keypad input, text parsing and result display all live
//! here. The shell calls plain functions in [`crate::core`] and
//! [`crate::history`]; nothing in those modules knows about it.

mod action;
mod input;
mod widget;

pub use action::{Action, KeyCommand};
pub use input::{parse_input, InputBuffer};
pub use widget::{render_outcome, DisplaySink, Outcome, Status, Widget};
