//! Discrete input events fed to the evaluator

use crate::op::Operator;

/// One key on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Digit(u8),
    Point,
    ToggleSign,
    Backspace,
    Clear,
    Operator(Operator),
    Equals,
}

impl Input {
    /// Map a typed character to a keypad key.
    ///
    /// `,` is accepted as a decimal point for keyboards that put it there.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Input::Digit(d as u8)),
            '.' | ',' => Some(Input::Point),
            '=' => Some(Input::Equals),
            'c' | 'C' => Some(Input::Clear),
            other => Operator::try_from(other).ok().map(Input::Operator),
        }
    }

    /// Label drawn on the keypad button.
    pub fn label(self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::Point => ".".to_string(),
            Input::ToggleSign => "+/-".to_string(),
            Input::Backspace => "⌫".to_string(),
            Input::Clear => "C".to_string(),
            Input::Operator(op) => op.to_string(),
            Input::Equals => "=".to_string(),
        }
    }

    /// Whether the key stays usable while an error is shown.
    pub fn allowed_in_error(self) -> bool {
        matches!(self, Input::Digit(_) | Input::Backspace | Input::Clear)
    }
}
