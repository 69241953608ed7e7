use std::fmt;

use crate::interpreter::value::Value;

/// How float results are shown to the user.
///
/// This is presentation only. The [`Value`] returned by evaluation keeps its
/// integer/float distinction regardless of the style chosen here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FloatStyle {
    /// Show floats exactly as [`Value`]'s `Display` does, e.g. `5.0`.
    Exact,
    /// Show floats with no fractional part as integers, e.g. `10 / 2` shows
    /// `5`. Non-integral, infinite and NaN values are unaffected.
    #[default]
    TrimIntegral,
}

impl fmt::Display for FloatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("exact"),
            Self::TrimIntegral => f.write_str("trim-integral"),
        }
    }
}

/// Renders a value according to `style`.
///
/// # Example
/// ```
/// use sandcalc::{
///     format::{FloatStyle, render},
///     interpreter::value::Value,
/// };
///
/// assert_eq!(render(&Value::Float(5.0), FloatStyle::TrimIntegral), "5");
/// assert_eq!(render(&Value::Float(5.0), FloatStyle::Exact), "5.0");
/// assert_eq!(render(&Value::Float(2.5), FloatStyle::TrimIntegral), "2.5");
/// assert_eq!(render(&Value::Integer(14), FloatStyle::Exact), "14");
/// ```
#[must_use]
pub fn render(value: &Value, style: FloatStyle) -> String {
    match (value, style) {
        (Value::Float(x), FloatStyle::TrimIntegral) if x.is_finite() && x.fract() == 0.0 => {
            // `-0.0` shows as `0`, not `-0`.
            if *x == 0.0 { "0".to_string() } else { format!("{x:.0}") }
        },
        _ => value.to_string(),
    }
}
