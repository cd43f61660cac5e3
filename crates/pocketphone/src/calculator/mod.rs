//! Four-function calculator
//!
//! - `operation`: the closed operator set and the pure `evaluate` function
//! - `format`: display formatting of results
//! - `key`: keypad keys, parsed from characters for replay
//! - `engine`: the Idle / Pending / Evaluated state machine

mod engine;
mod format;
mod key;
mod operation;

pub use engine::{CalculatorEngine, EngineState, Readout, ERROR_TEXT};
pub use format::{format_number, parse_number, FRACTION_DIGITS};
pub use key::CalcKey;
pub use operation::{evaluate, Operation};
