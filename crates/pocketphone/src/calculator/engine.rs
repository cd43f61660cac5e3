//! Calculator evaluation engine
//!
//! The engine is an explicit three-state machine. The display is kept as a
//! typed [`Readout`]: numerals being typed stay text, finished results keep
//! their full `f64` and are only formatted when shown.

use tracing::debug;

use super::format::{format_number, parse_number};
use super::key::CalcKey;
use super::operation::Operation;

/// Text shown when a result is not finite (divide by zero, overflow)
pub const ERROR_TEXT: &str = "Error";

/// What the display currently holds
#[derive(Debug, Clone, PartialEq)]
pub enum Readout {
    /// A numeral being typed, e.g. `"0."` or `"-12"`
    Entry(String),
    /// A computed value
    Result(f64),
    /// Terminal divide-by-zero display
    Error,
}

impl Readout {
    /// Renders the readout as display text
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Entry(text) => text.clone(),
            Self::Result(value) => format_number(*value),
            Self::Error => ERROR_TEXT.to_string(),
        }
    }

    /// Numeric value of the readout, `None` for [`Readout::Error`]
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Entry(text) => parse_number(text),
            Self::Result(value) => Some(*value),
            Self::Error => None,
        }
    }

    /// Returns true for the error sentinel
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl Default for Readout {
    fn default() -> Self {
        Self::Entry("0".to_string())
    }
}

/// Engine state; each variant carries only the fields valid in it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EngineState {
    /// No operator selected yet
    #[default]
    Idle,
    /// Left operand captured, waiting for the right one
    Pending {
        /// Left-hand operand
        accumulator: f64,
        /// Operator to apply on `=` or on the next operator press
        operator: Operation,
    },
    /// A result was just shown; the next digit starts a fresh number
    Evaluated,
}

/// Four-function calculator with left-to-right chaining
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    readout: Readout,
    state: EngineState,
}

impl CalculatorEngine {
    /// Creates an engine showing `"0"` in the idle state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> String {
        self.readout.text()
    }

    /// Current typed readout
    #[must_use]
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Left operand, present only while an operator is pending
    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        match self.state {
            EngineState::Pending { accumulator, .. } => Some(accumulator),
            _ => None,
        }
    }

    /// Operator waiting to be applied
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        match self.state {
            EngineState::Pending { operator, .. } => Some(operator),
            _ => None,
        }
    }

    /// True right after `=` until the next digit
    #[must_use]
    pub fn is_just_evaluated(&self) -> bool {
        matches!(self.state, EngineState::Evaluated)
    }

    /// Dispatches a keypad key
    pub fn press(&mut self, key: CalcKey) -> String {
        match key {
            CalcKey::Digit(d) => self.digit(d),
            CalcKey::Operator(op) => self.set_operator(op),
            CalcKey::Equals => self.equals(),
            CalcKey::ToggleSign => self.toggle_sign(),
            CalcKey::Percent => self.percent(),
            CalcKey::Clear => self.clear_all(),
        }
    }

    /// Enters a digit or the decimal point
    pub fn digit(&mut self, d: char) -> String {
        if !(d.is_ascii_digit() || d == '.') {
            debug!(key = %d, "ignoring non-digit key");
            return self.display();
        }

        if self.is_just_evaluated() || self.readout.is_error() {
            self.state = EngineState::Idle;
            self.readout = Readout::Entry(if d == '.' {
                "0.".to_string()
            } else {
                d.to_string()
            });
            return self.display();
        }

        let mut current = self.readout.text();
        if d == '.' && current.contains('.') {
            return current;
        }
        if current == "0" && d != '.' {
            current.clear();
        }
        current.push(d);
        self.readout = Readout::Entry(current);
        self.display()
    }

    /// Selects the next operator, chaining any pending one first
    pub fn set_operator(&mut self, next: Operation) -> String {
        let Some(value) = self.readout.value() else {
            debug!(operator = %next, "operator ignored while showing error");
            return self.display();
        };

        let accumulator = match self.state {
            EngineState::Pending {
                accumulator,
                operator,
            } => operator.apply(accumulator, value),
            EngineState::Idle | EngineState::Evaluated => value,
        };

        if !accumulator.is_finite() {
            debug!("chained evaluation is not finite");
            return self.fail();
        }

        debug!(accumulator, operator = %next, "operator pending");
        self.state = EngineState::Pending {
            accumulator,
            operator: next,
        };
        self.readout = Readout::default();
        self.display()
    }

    /// Applies the pending operator, if any
    pub fn equals(&mut self) -> String {
        let EngineState::Pending {
            accumulator,
            operator,
        } = self.state
        else {
            return self.display();
        };
        let Some(value) = self.readout.value() else {
            return self.display();
        };

        let result = operator.apply(accumulator, value);
        if !result.is_finite() {
            debug!(accumulator, operator = %operator, value, "evaluation failed");
            return self.fail();
        }

        debug!(accumulator, operator = %operator, value, result, "evaluated");
        self.readout = Readout::Result(result);
        self.state = EngineState::Evaluated;
        self.display()
    }

    /// Adds or removes a leading minus sign; no-op on `"0"`
    pub fn toggle_sign(&mut self) -> String {
        let next = match &self.readout {
            Readout::Error => return self.display(),
            Readout::Entry(text) if text == "0" => return self.display(),
            Readout::Result(_) if self.display() == "0" => return self.display(),
            Readout::Entry(text) => Readout::Entry(match text.strip_prefix('-') {
                Some(unsigned) => unsigned.to_string(),
                None => format!("-{text}"),
            }),
            Readout::Result(value) => Readout::Result(-value),
        };
        self.readout = next;
        self.display()
    }

    /// Divides the displayed value by 100
    pub fn percent(&mut self) -> String {
        match self.readout.value() {
            Some(value) if value.is_finite() => self.readout = Readout::Result(value / 100.0),
            Some(_) => {
                debug!("percent of an entry too large for f64");
                return self.fail();
            }
            None => {}
        }
        self.display()
    }

    /// Resets to the initial state
    pub fn clear_all(&mut self) -> String {
        *self = Self::new();
        self.display()
    }

    fn fail(&mut self) -> String {
        self.readout = Readout::Error;
        self.state = EngineState::Evaluated;
        self.display()
    }
}
