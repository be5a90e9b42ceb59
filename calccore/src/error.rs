//! Calculation errors

use thiserror::Error;

/// Everything that can go wrong while evaluating `operand op entry`.
///
/// The `Display` strings are the default texts shown in the entry field;
/// the app may override them through [`crate::config::ErrorMessages`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// A non-zero number divided by zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// Zero divided by zero.
    #[error("Result is undefined")]
    UndefinedResult,
    /// A symbol outside `+ - * /` was offered as an operator.
    #[error("Unknown operator '{0}'")]
    UnknownOperator(char),
    /// The result does not fit in a finite float.
    #[error("Overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, CalcError>;
