//! Operand values and their canonical text form

use std::fmt;

/// Smallest float that no longer fits an i128 (2^127).
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// A calculator operand. Typed without a decimal point it stays an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    /// Read the text of the entry field.
    ///
    /// Leading and trailing points are ignored (`"5."` is `5`). Integers too
    /// large for i128 are read as floats. Anything unreadable is zero.
    pub fn from_entry(text: &str) -> Self {
        let text = text.trim().trim_matches('.');
        if text.is_empty() || text == "-" {
            return Number::Int(0);
        }
        if !text.contains('.') {
            if let Ok(n) = text.parse::<i128>() {
                return Number::Int(n);
            }
        }
        text.parse::<f64>().map(Number::Float).unwrap_or(Number::Int(0))
    }

    /// Collapse an integral float into an integer.
    pub fn normalized(self) -> Self {
        match self {
            Number::Float(f) if f.fract() == 0.0 && f >= -I128_BOUND && f < I128_BOUND => {
                Number::Int(f as i128)
            }
            other => other,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl fmt::Display for Number {
    /// Shortest text that reads back to the same value, never with a
    /// trailing `.0` and never as `-0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) if x == 0.0 => write!(f, "0"),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n.into())
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}
