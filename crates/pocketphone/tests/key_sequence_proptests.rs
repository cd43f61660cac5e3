//! Property-based tests for replaying calculator key sequences

use pocketphone::calculator::{
    evaluate, format_number, CalcKey, CalculatorEngine, EngineState, Operation, ERROR_TEXT,
};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        9 => proptest::char::range('0', '9'),
        1 => Just('.'),
    ]
}

fn operator_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn key_strategy() -> impl Strategy<Value = CalcKey> {
    prop_oneof![
        6 => digit_strategy().prop_map(CalcKey::Digit),
        2 => operator_strategy().prop_map(CalcKey::Operator),
        1 => Just(CalcKey::Equals),
        1 => Just(CalcKey::ToggleSign),
        1 => Just(CalcKey::Percent),
        1 => Just(CalcKey::Clear),
    ]
}

fn replay(keys: &[CalcKey]) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    for key in keys {
        engine.press(*key);
    }
    engine
}

// ===== Engine invariants =====

proptest! {
    /// Whatever is pressed, the display is a decimal literal or "Error"
    #[test]
    fn prop_display_is_number_or_error(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let engine = replay(&keys);
        let display = engine.display();
        if display != ERROR_TEXT {
            prop_assert!(display.parse::<f64>().is_ok(), "bad display {display:?}");
            prop_assert!(display.matches('.').count() <= 1);
        }
    }

    /// The accumulator is only held while an operator is pending
    #[test]
    fn prop_accumulator_only_when_pending(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let engine = replay(&keys);
        let pending = matches!(engine.state(), EngineState::Pending { .. });
        prop_assert_eq!(engine.accumulator().is_some(), pending);
        prop_assert_eq!(engine.pending_operator().is_some(), pending);
    }

    /// Clear always restores the initial engine
    #[test]
    fn prop_clear_resets(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut engine = replay(&keys);
        engine.clear_all();
        prop_assert_eq!(engine.display(), "0");
        prop_assert_eq!(engine.state(), EngineState::Idle);
        prop_assert!(!engine.is_just_evaluated());
    }

    /// Operators chain strictly left to right
    #[test]
    fn prop_left_to_right(
        a in 0u32..1000,
        b in 0u32..1000,
        c in 0u32..1000,
        first in prop_oneof![Just(Operation::Add), Just(Operation::Subtract), Just(Operation::Multiply)],
        second in prop_oneof![Just(Operation::Add), Just(Operation::Subtract), Just(Operation::Multiply)],
    ) {
        let input = format!("{a}{}{b}{}{c}=", first.symbol(), second.symbol());
        let keys = CalcKey::parse_sequence(&input).unwrap();
        let engine = replay(&keys);

        let expected = evaluate(
            evaluate(f64::from(a), f64::from(b), Some(first)),
            f64::from(c),
            Some(second),
        );
        prop_assert_eq!(engine.display(), format_number(expected));
    }

    /// Dividing by a typed zero always ends in "Error"
    #[test]
    fn prop_divide_by_zero(a in 0u32..1_000_000, zeros in 1usize..4) {
        let input = format!("{a}÷{}=", "0".repeat(zeros));
        let engine = replay(&CalcKey::parse_sequence(&input).unwrap());
        prop_assert_eq!(engine.display(), ERROR_TEXT);
    }

    /// A digit after any result starts a fresh entry
    #[test]
    fn prop_digit_after_equals_starts_fresh(
        keys in prop::collection::vec(key_strategy(), 0..20),
        d in proptest::char::range('1', '9'),
    ) {
        let mut engine = replay(&keys);
        engine.equals();
        if engine.is_just_evaluated() {
            prop_assert_eq!(engine.digit(d), d.to_string());
        }
    }
}

// ===== Key parsing =====

proptest! {
    /// Every keypad character parses, whitespace is skipped
    #[test]
    fn prop_parse_sequence_accepts_keypad_chars(input in "[0-9.+\\-*/x=%~cC ]{0,30}") {
        let keys = CalcKey::parse_sequence(&input).unwrap();
        prop_assert_eq!(keys.len(), input.chars().filter(|c| !c.is_whitespace()).count());
    }

    /// Letters other than the clear and multiply aliases are rejected
    #[test]
    fn prop_parse_sequence_rejects_letters(
        prefix in "[0-9]{0,5}",
        bad in "[abd-wyzA-BD-WYZ]",
    ) {
        let input = format!("{prefix}{bad}");
        prop_assert!(CalcKey::parse_sequence(&input).is_err());
    }
}
