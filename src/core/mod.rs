//! Pure conversion core.
//!
//! This module contains the side-effect-free part of the crate:
//! - Units and their absolute-zero floors
//! - Validated temperatures with two-decimal rounding
//! - Conversion between units, pivoting through Celsius
//!
//! Nothing here touches storage or the display; the same inputs always
//! give the same outputs, so these functions are safe to call from any
//! thread.

mod converter;
mod temperature;
mod unit;

pub use converter::{convert, is_supported, validate, validate_input, ConversionError};
pub use temperature::{round2, Temperature};
pub use unit::Unit;
