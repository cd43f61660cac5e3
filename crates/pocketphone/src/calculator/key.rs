//! Keypad keys and key-sequence parsing

use serde::{Deserialize, Serialize};

use super::operation::Operation;
use crate::error::{PhoneError, PhoneResult};

/// A single calculator key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalcKey {
    /// A digit `0`-`9` or the decimal point
    Digit(char),
    /// One of the four operators
    Operator(Operation),
    /// Evaluate (`=`)
    Equals,
    /// Flip the sign (`+/−`)
    ToggleSign,
    /// Divide by 100 (`%`)
    Percent,
    /// Reset everything (`C`)
    Clear,
}

impl CalcKey {
    /// Maps a typed character to a key.
    ///
    /// `~` and `±` stand for the sign toggle, `c`/`C` for clear.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Self::Digit(c)),
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            '~' | '±' => Some(Self::ToggleSign),
            'c' | 'C' => Some(Self::Clear),
            other => Operation::from_char(other).map(Self::Operator),
        }
    }

    /// Parses a key sequence such as `"12 + 7 ="`, skipping whitespace
    pub fn parse_sequence(input: &str) -> PhoneResult<Vec<Self>> {
        input
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(position, c)| {
                Self::from_char(c).ok_or(PhoneError::InvalidKey { key: c, position })
            })
            .collect()
    }

    /// Label printed on the keypad button
    #[must_use]
    pub fn label(&self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit('.') => ".",
            Self::Digit(d) => d
                .to_digit(10)
                .and_then(|n| DIGITS.get(n as usize))
                .copied()
                .unwrap_or("?"),
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::ToggleSign => "+/−",
            Self::Percent => "%",
            Self::Clear => "C",
        }
    }
}
