//! Decoding of inbound size reports.
//!
//! The embedded page posts `{"height": <number>, "width": <number>}` as JSON
//! text through the one-way message channel. This is the adversarial boundary:
//! the page runs arbitrary markup, so anything that is not a well-formed
//! report is rejected with a [`DecodeError`] and never reaches the reconciler.

use crate::error::DecodeError;

/// A decoded size report from the embedded page.
///
/// Both fields are guaranteed finite and non-negative after [`decode`].
///
/// [`decode`]: SizeReport::decode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReport {
    pub height: f64,
    pub width: f64,
}

impl SizeReport {
    /// Decode a raw message body into a size report.
    ///
    /// Returns a tagged error instead of panicking or using exceptions for
    /// control flow; callers absorb the error and leave state untouched.
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let height = numeric_field(&value, "height")?;
        let width = numeric_field(&value, "width")?;
        Ok(Self { height, width })
    }
}

fn numeric_field(value: &serde_json::Value, name: &'static str) -> Result<f64, DecodeError> {
    let number = value
        .get(name)
        .and_then(serde_json::Value::as_f64)
        .ok_or(DecodeError::MissingField(name))?;
    if !number.is_finite() || number < 0.0 {
        return Err(DecodeError::OutOfRange(name));
    }
    Ok(number)
}
