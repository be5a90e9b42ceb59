//! calccore — the arithmetic side of the calculator
//!
//! No widgets live here. The app feeds [`Input`]s into an [`Evaluator`]
//! and redraws the two texts it exposes.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod input;
pub mod number;
pub mod op;

pub use config::Config;
pub use error::CalcError;
pub use evaluator::{Evaluator, State, Tape};
pub use input::Input;
pub use number::Number;
pub use op::Operator;
