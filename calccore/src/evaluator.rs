//! Expression evaluator
//!
//! Holds the number being typed (the entry) and at most one pending
//! `operand op` pair (the tape). There is no precedence: every operation
//! is applied to the result of the previous one.
//!
//! | state       | tape                       | expression line |
//! |-------------|----------------------------|-----------------|
//! | `Idle`      | `Tape::Empty`              | (empty)         |
//! | `PendingOp` | `Tape::Pending`            | `5 + `          |
//! | `Result`    | `Tape::Finished`           | `5 + 3 =`       |
//!
//! An error sits on top of any state. While it is set, only digits,
//! backspace and clear are accepted, and each of them dismisses it.

use crate::error::{CalcError, Result};
use crate::input::Input;
use crate::number::Number;
use crate::op::Operator;
use tracing::{debug, trace};

/// Default cap on typed characters, not counting a leading `-`.
pub const DEFAULT_MAX_ENTRY_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    PendingOp,
    Result,
}

/// The running expression shown above the entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tape {
    Empty,
    Pending { operand: Number, op: Operator },
    Finished { operand: Number, op: Operator, rhs: Number },
}

#[derive(Debug, Clone)]
pub struct Evaluator {
    entry: String,
    tape: Tape,
    error: Option<CalcError>,
    max_entry_len: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_max_entry_len(DEFAULT_MAX_ENTRY_LEN)
    }

    pub fn with_max_entry_len(max_entry_len: usize) -> Self {
        Self {
            entry: "0".to_string(),
            tape: Tape::Empty,
            error: None,
            max_entry_len: max_entry_len.max(1),
        }
    }

    // --- accessors ---

    pub fn state(&self) -> State {
        match self.tape {
            Tape::Empty => State::Idle,
            Tape::Pending { .. } => State::PendingOp,
            Tape::Finished { .. } => State::Result,
        }
    }

    pub fn tape(&self) -> Tape {
        self.tape
    }

    /// The stored `operand op` waiting for a second operand.
    pub fn pending(&self) -> Option<(Number, Operator)> {
        match self.tape {
            Tape::Pending { operand, op } => Some((operand, op)),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn is_error_state(&self) -> bool {
        self.error.is_some()
    }

    pub fn max_entry_len(&self) -> usize {
        self.max_entry_len
    }

    /// Text for the entry field: the typed number, or the error message.
    pub fn current_entry_text(&self) -> String {
        match self.error {
            Some(err) => err.to_string(),
            None => self.entry.clone(),
        }
    }

    /// Text for the expression line above the entry.
    pub fn current_expression_text(&self) -> String {
        match self.tape {
            Tape::Empty => String::new(),
            Tape::Pending { operand, op } => format!("{} {} ", operand, op),
            Tape::Finished { operand, op, rhs } => format!("{} {} {} =", operand, op, rhs),
        }
    }

    // --- input ---

    /// Dispatch one keypad key. Only `Equals` can produce a value or an error.
    pub fn handle(&mut self, input: Input) -> Result<Option<String>> {
        trace!(?input, "key");
        match input {
            Input::Digit(d) => self.input_digit(d),
            Input::Point => self.input_point(),
            Input::ToggleSign => self.toggle_sign(),
            Input::Backspace => self.backspace(),
            Input::Clear => self.clear(),
            Input::Operator(op) => self.apply_operator(op),
            Input::Equals => return self.calculate(),
        }
        Ok(None)
    }

    pub fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        self.dismiss_error();
        self.leave_result();

        let c = char::from(b'0' + digit);
        match self.entry.as_str() {
            "0" => self.entry = c.to_string(),
            "-0" => self.entry = format!("-{}", c),
            _ if self.has_room() => self.entry.push(c),
            _ => {}
        }
    }

    pub fn input_point(&mut self) {
        if self.is_error_state() {
            return;
        }
        self.leave_result();
        if !self.entry.contains('.') && self.has_room() {
            self.entry.push('.');
        }
    }

    pub fn toggle_sign(&mut self) {
        if self.is_error_state() {
            return;
        }
        self.leave_result();
        if let Some(rest) = self.entry.strip_prefix('-') {
            self.entry = rest.to_string();
        } else if self.entry != "0" {
            self.entry.insert(0, '-');
        }
    }

    pub fn backspace(&mut self) {
        self.dismiss_error();
        self.leave_result();

        let len = self.entry.chars().count();
        if len <= 1 || (len == 2 && self.entry.starts_with('-')) {
            self.entry = "0".to_string();
        } else {
            self.entry.pop();
        }
    }

    pub fn clear(&mut self) {
        self.entry = "0".to_string();
        self.tape = Tape::Empty;
        self.error = None;
    }

    /// Press an operator key.
    ///
    /// Pressing the operator that is already pending computes the
    /// intermediate result and chains it. Pressing a different one only
    /// swaps the pending operator.
    pub fn apply_operator(&mut self, op: Operator) {
        if self.is_error_state() {
            return;
        }
        match self.tape {
            Tape::Empty | Tape::Finished { .. } => self.commit(op),
            Tape::Pending { operand, op: current } if current != op => {
                debug!(from = %current, to = %op, "operator substituted");
                self.tape = Tape::Pending { operand, op };
            }
            Tape::Pending { .. } => {
                if let Ok(Some(_)) = self.calculate() {
                    self.commit(op);
                }
            }
        }
    }

    /// Press `=`.
    ///
    /// Returns `Ok(None)` when there is nothing to compute: no pending
    /// operator, a finished expression, or an error being shown.
    pub fn calculate(&mut self) -> Result<Option<String>> {
        if self.is_error_state() {
            return Ok(None);
        }
        let Tape::Pending { operand, op } = self.tape else {
            return Ok(None);
        };

        let rhs = Number::from_entry(&self.entry).normalized();
        match op.apply(operand, rhs) {
            Ok(value) => {
                let text = value.normalized().to_string();
                debug!("{} {} {} = {}", operand, op, rhs, text);
                self.tape = Tape::Finished { operand, op, rhs };
                self.entry = text.clone();
                Ok(Some(text))
            }
            Err(err) => {
                debug!(%err, "{} {} {} failed", operand, op, rhs);
                self.error = Some(err);
                Err(err)
            }
        }
    }

    // --- helpers ---

    fn commit(&mut self, op: Operator) {
        let operand = Number::from_entry(&self.entry).normalized();
        self.tape = Tape::Pending { operand, op };
        self.entry = "0".to_string();
    }

    fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            self.entry = "0".to_string();
        }
    }

    /// Typing after `=` starts a fresh expression but keeps the result.
    fn leave_result(&mut self) {
        if let Tape::Finished { .. } = self.tape {
            self.tape = Tape::Empty;
        }
    }

    fn has_room(&self) -> bool {
        self.entry.trim_start_matches('-').chars().count() < self.max_entry_len
    }
}
