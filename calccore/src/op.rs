//! The four arithmetic operators

use crate::error::{CalcError, Result};
use crate::number::Number;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Keypad order, top to bottom.
    pub const ALL: [Operator; 4] = [Operator::Div, Operator::Mul, Operator::Sub, Operator::Add];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Apply `lhs op rhs`.
    ///
    /// Integer add/sub/mul stay exact until they overflow i128, then fall
    /// back to floats. Division is always true division. A zero divisor
    /// yields `UndefinedResult` for `0 / 0` and `DivisionByZero` otherwise.
    pub fn apply(self, lhs: Number, rhs: Number) -> Result<Number> {
        if self == Operator::Div && rhs.is_zero() {
            return Err(if lhs.is_zero() {
                CalcError::UndefinedResult
            } else {
                CalcError::DivisionByZero
            });
        }

        let exact = match (self, lhs, rhs) {
            (Operator::Add, Number::Int(a), Number::Int(b)) => a.checked_add(b),
            (Operator::Sub, Number::Int(a), Number::Int(b)) => a.checked_sub(b),
            (Operator::Mul, Number::Int(a), Number::Int(b)) => a.checked_mul(b),
            _ => None,
        };
        if let Some(n) = exact {
            return Ok(Number::Int(n));
        }

        let (a, b) = (lhs.to_f64(), rhs.to_f64());
        let value = match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => a / b,
        };
        if !value.is_finite() {
            return Err(CalcError::Overflow);
        }
        Ok(Number::Float(value))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' | '×' => Ok(Operator::Mul),
            '/' | '÷' => Ok(Operator::Div),
            other => Err(CalcError::UnknownOperator(other)),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::try_from(c),
            (Some(c), Some(_)) => Err(CalcError::UnknownOperator(c)),
            (None, _) => Err(CalcError::UnknownOperator(' ')),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_parse_back() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().to_string().parse::<Operator>(), Ok(op));
        }
        assert_eq!("×".parse::<Operator>(), Ok(Operator::Mul));
    }

    #[test]
    fn test_unknown_operator() {
        assert_eq!("%".parse::<Operator>(), Err(CalcError::UnknownOperator('%')));
        assert_eq!(Operator::try_from('^'), Err(CalcError::UnknownOperator('^')));
        assert!("".parse::<Operator>().is_err());
        assert!("++".parse::<Operator>().is_err());
    }

    #[test]
    fn test_integer_arithmetic_is_exact() {
        assert_eq!(Operator::Add.apply(Number::Int(5), Number::Int(3)), Ok(Number::Int(8)));
        assert_eq!(Operator::Sub.apply(Number::Int(5), Number::Int(8)), Ok(Number::Int(-3)));
        assert_eq!(Operator::Mul.apply(Number::Int(-4), Number::Int(6)), Ok(Number::Int(-24)));
    }

    #[test]
    fn test_division_is_true_division() {
        assert_eq!(Operator::Div.apply(Number::Int(7), Number::Int(2)), Ok(Number::Float(3.5)));
        assert_eq!(Operator::Div.apply(Number::Int(6), Number::Int(3)), Ok(Number::Float(2.0)));
    }

    #[test]
    fn test_zero_divisor() {
        assert_eq!(
            Operator::Div.apply(Number::Int(8), Number::Int(0)),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Div.apply(Number::Int(0), Number::Float(0.0)),
            Err(CalcError::UndefinedResult)
        );
        assert_eq!(
            Operator::Div.apply(Number::Float(-2.5), Number::Float(0.0)),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        let r = Operator::Mul.apply(Number::Int(i128::MAX), Number::Int(2)).unwrap();
        assert!(matches!(r, Number::Float(_)));
    }

    #[test]
    fn test_float_overflow() {
        assert_eq!(
            Operator::Mul.apply(Number::Float(1e308), Number::Int(10)),
            Err(CalcError::Overflow)
        );
    }
}
