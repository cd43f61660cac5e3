//! Binary operators for the four-function calculator
//!
//! A closed enum with one exhaustive evaluation function: there is no
//! fallthrough case for unknown operator symbols.

use serde::{Deserialize, Serialize};

/// Arithmetic operator selectable on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the symbol printed on the keypad
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Maps a typed character to an operator.
    ///
    /// Accepts both the keypad glyphs and their ASCII stand-ins
    /// (`*`, `x` for multiply, `/` for divide).
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division by zero does not panic or return an error: it yields `NaN`,
    /// which the engine renders as the `"Error"` display.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluates `a op b`; with no operator the right operand passes through.
#[must_use]
pub fn evaluate(a: f64, b: f64, op: Option<Operation>) -> f64 {
    match op {
        Some(op) => op.apply(a, b),
        None => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "×");
        assert_eq!(Operation::Divide.symbol(), "÷");
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(Operation::Divide.to_string(), "÷");
    }

    #[test]
    fn test_from_char_ascii_and_glyphs() {
        assert_eq!(Operation::from_char('+'), Some(Operation::Add));
        assert_eq!(Operation::from_char('-'), Some(Operation::Subtract));
        assert_eq!(Operation::from_char('*'), Some(Operation::Multiply));
        assert_eq!(Operation::from_char('x'), Some(Operation::Multiply));
        assert_eq!(Operation::from_char('×'), Some(Operation::Multiply));
        assert_eq!(Operation::from_char('/'), Some(Operation::Divide));
        assert_eq!(Operation::from_char('÷'), Some(Operation::Divide));
        assert_eq!(Operation::from_char('%'), None);
        assert_eq!(Operation::from_char('7'), None);
    }

    #[test]
    fn test_symbol_round_trips_through_from_char() {
        for op in Operation::ALL {
            let c = op.symbol().chars().next().unwrap();
            assert_eq!(Operation::from_char(c), Some(op));
        }
    }

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operation::Multiply.apply(2.0, 3.0), 6.0);
        assert_eq!(Operation::Divide.apply(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_divide_by_zero_is_not_finite() {
        assert!(!Operation::Divide.apply(7.0, 0.0).is_finite());
        assert!(!Operation::Divide.apply(0.0, 0.0).is_finite());
        assert!(!Operation::Divide.apply(-7.0, -0.0).is_finite());
    }

    #[test]
    fn test_evaluate_without_operator_passes_right_operand() {
        assert_eq!(evaluate(99.0, 4.0, None), 4.0);
    }

    #[test]
    fn test_evaluate_with_operator() {
        assert_eq!(evaluate(10.0, 4.0, Some(Operation::Subtract)), 6.0);
    }

    proptest! {
        #[test]
        fn prop_add_is_sum(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            prop_assert_eq!(evaluate(a, b, Some(Operation::Add)), a + b);
        }

        #[test]
        fn prop_divide_by_zero_never_finite(a in -1e10f64..1e10f64) {
            prop_assert!(!evaluate(a, 0.0, Some(Operation::Divide)).is_finite());
        }

        #[test]
        fn prop_divide_nonzero_is_finite(a in -1e6f64..1e6f64, b in 1e-3f64..1e6f64) {
            prop_assert!(evaluate(a, b, Some(Operation::Divide)).is_finite());
        }

        #[test]
        fn prop_identity_pass_through(a in any::<f64>(), b in -1e10f64..1e10f64) {
            prop_assert_eq!(evaluate(a, b, None), b);
        }
    }
}
