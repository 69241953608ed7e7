use std::fmt;

/// Represents the result of evaluating an expression.
///
/// The distinction between an exact integer and an approximate
/// floating-point quantity is kept all the way through evaluation: literals
/// without a `.` or exponent are integers, division always yields a float,
/// and any operation involving a float yields a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An exact 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Float(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl Value {
    /// Returns `true` for [`Value::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns `true` for [`Value::Float`].
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns the integer payload, or `None` for floats.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Float(_) => None,
        }
    }

    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` round to the nearest representable float.
    ///
    /// # Example
    /// ```
    /// use sandcalc::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_f64(), 3.0);
    /// assert_eq!(Value::Float(0.5).as_f64(), 0.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(n) => *n as f64,
            Self::Float(x) => *x,
        }
    }

    /// Returns `true` if the value is exactly zero (`0`, `0.0` or `-0.0`).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Float(x) => *x == 0.0,
        }
    }

    /// Promotes both operands to `f64`.
    #[must_use]
    pub const fn promote_to_float(self, other: Self) -> (f64, f64) {
        (self.as_f64(), other.as_f64())
    }
}

impl fmt::Display for Value {
    /// Integers print as plain digits. Floats print in the shortest form that
    /// reads back to the same value, and always look like floats: `14.0`,
    /// `0.25`, `1e+16`, `1.5e-05`, `inf`, `nan`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write_float(f, *x),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
    }

    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{x:e}");
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    if x.fract() == 0.0 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}
