//! Pure reducer function for calculator state transitions
//!
//! `(CalculatorState, CalculatorAction) -> CalculatorState`
//!
//! The reducer never fails. Actions that make no sense for the current
//! state (an eleventh digit, a second decimal point, evaluating without an
//! operation) return the state unchanged.

use super::actions::{CalculatorAction, Digit, Operation};
use super::state::{CalculatorState, MAX_OPERAND_LEN, MAX_RESULT_LEN};

/// Apply a single action to the calculator state
///
/// # Purity Guarantees
///
/// - No I/O
/// - No mutations of the input beyond consuming it
/// - Deterministic (same inputs -> same output)
pub fn apply(state: CalculatorState, action: CalculatorAction) -> CalculatorState {
    match action {
        CalculatorAction::EnterDigit(digit) => enter_digit(state, digit),
        CalculatorAction::EnterDecimalPoint => enter_decimal_point(state),
        CalculatorAction::Clear => CalculatorState::default(),
        CalculatorAction::Backspace => backspace(state),
        CalculatorAction::SetOperation(operation) => set_operation(state, operation),
        CalculatorAction::Evaluate => evaluate(state),
    }
}

fn enter_digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    if state.operation.is_none() {
        if state.first_operand.len() >= MAX_OPERAND_LEN {
            return state;
        }
        let mut first_operand = state.first_operand;
        first_operand.push(digit.as_char());
        return CalculatorState {
            first_operand,
            ..state
        };
    }

    if state.second_operand.len() >= MAX_OPERAND_LEN {
        return state;
    }
    let mut second_operand = state.second_operand;
    second_operand.push(digit.as_char());
    CalculatorState {
        second_operand,
        ..state
    }
}

fn enter_decimal_point(state: CalculatorState) -> CalculatorState {
    if state.operation.is_none()
        && !state.first_operand.is_empty()
        && !state.first_operand.contains('.')
    {
        let mut first_operand = state.first_operand;
        first_operand.push('.');
        return CalculatorState {
            first_operand,
            ..state
        };
    }

    // Only reachable with an operation pending, since second_operand is
    // empty otherwise.
    if !state.second_operand.is_empty() && !state.second_operand.contains('.') {
        let mut second_operand = state.second_operand;
        second_operand.push('.');
        return CalculatorState {
            second_operand,
            ..state
        };
    }

    state
}

fn set_operation(state: CalculatorState, operation: Operation) -> CalculatorState {
    if state.first_operand.is_empty() {
        return state;
    }
    CalculatorState {
        operation: Some(operation),
        ..state
    }
}

fn backspace(state: CalculatorState) -> CalculatorState {
    if !state.second_operand.is_empty() {
        let mut second_operand = state.second_operand;
        second_operand.pop();
        return CalculatorState {
            second_operand,
            ..state
        };
    }

    if state.operation.is_some() {
        return CalculatorState {
            operation: None,
            ..state
        };
    }

    let mut first_operand = state.first_operand;
    first_operand.pop();
    CalculatorState {
        first_operand,
        ..state
    }
}

fn evaluate(state: CalculatorState) -> CalculatorState {
    let Some(operation) = state.operation else {
        return state;
    };
    let (Ok(lhs), Ok(rhs)) = (
        state.first_operand.parse::<f64>(),
        state.second_operand.parse::<f64>(),
    ) else {
        return state;
    };

    CalculatorState {
        first_operand: format_result(operation.compute(lhs, rhs)),
        ..CalculatorState::default()
    }
}

/// Shortest decimal text for `value`, at most [`MAX_RESULT_LEN`] characters.
///
/// Text that fits is returned as is (`8`, `0.25`, `inf`). Longer text is cut
/// with a plain slice, not a rounding step, as long as the cut keeps the
/// integer part and at least one significant digit. Otherwise the slice would
/// change the magnitude, so the value is written in exponent form instead.
pub fn format_result(value: f64) -> String {
    let plain = value.to_string();
    if plain.len() <= MAX_RESULT_LEN {
        return plain;
    }

    let integer_len = plain.find('.').unwrap_or(plain.len());
    let first_significant = plain.find(|c: char| ('1'..='9').contains(&c));
    let keeps_magnitude = integer_len <= MAX_RESULT_LEN
        && first_significant.is_some_and(|i| i < MAX_RESULT_LEN);

    if keeps_magnitude {
        plain.chars().take(MAX_RESULT_LEN).collect()
    } else {
        exponent_text(value)
    }
}

/// Exponent form of `value` that fits in [`MAX_RESULT_LEN`] characters.
///
/// Uses the shortest mantissa when it fits, otherwise the longest rounded
/// mantissa that does. The exponent itself is never cut.
fn exponent_text(value: f64) -> String {
    let shortest = format!("{:e}", value);
    if shortest.len() <= MAX_RESULT_LEN {
        return shortest;
    }
    (0..MAX_RESULT_LEN)
        .rev()
        .map(|precision| format!("{:.*e}", precision, value))
        .find(|text| text.len() <= MAX_RESULT_LEN)
        .unwrap_or(shortest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> CalculatorAction {
        CalculatorAction::EnterDigit(Digit::try_from(d).unwrap())
    }

    fn state(first: &str, operation: Option<Operation>, second: &str) -> CalculatorState {
        CalculatorState {
            first_operand: first.to_string(),
            operation,
            second_operand: second.to_string(),
        }
    }

    fn run(actions: &[CalculatorAction]) -> CalculatorState {
        actions
            .iter()
            .fold(CalculatorState::new(), |s, a| apply(s, *a))
    }

    #[test]
    fn test_reducer_is_pure() {
        let before = state("12", Some(Operation::Add), "3");
        let first = apply(before.clone(), digit(4));
        let second = apply(before.clone(), digit(4));

        assert_eq!(first, second);
        assert_eq!(before.second_operand, "3");
        assert_eq!(first.second_operand, "34");
    }

    #[test]
    fn test_digits_go_to_first_operand_without_operation() {
        let s = run(&[digit(1), digit(2)]);
        assert_eq!(s, state("12", None, ""));
    }

    #[test]
    fn test_digits_go_to_second_operand_with_operation() {
        let s = run(&[
            digit(1),
            CalculatorAction::SetOperation(Operation::Subtract),
            digit(9),
        ]);
        assert_eq!(s, state("1", Some(Operation::Subtract), "9"));
    }

    #[test]
    fn test_operand_length_cap() {
        let actions: Vec<_> = (0..12).map(|i| digit(i % 10)).collect();
        let s = run(&actions);
        assert_eq!(s.first_operand, "01234567");

        let capped = state("1", Some(Operation::Add), "12345678");
        assert_eq!(apply(capped.clone(), digit(9)), capped);
    }

    #[test]
    fn test_cap_is_not_enforced_retroactively() {
        let long = state("123456789", None, "");
        assert_eq!(apply(long.clone(), digit(1)), long);
        assert_eq!(apply(long, CalculatorAction::Backspace).first_operand, "12345678");
    }

    #[test]
    fn test_decimal_point_not_subject_to_length_cap() {
        let full = state("12345678", None, "");
        let s = apply(full, CalculatorAction::EnterDecimalPoint);
        assert_eq!(s.first_operand, "12345678.");

        // The operand is now over the cap, so further digits are ignored
        assert_eq!(apply(s.clone(), digit(5)), s);

        let full = state("1", Some(Operation::Add), "12345678");
        let s = apply(full, CalculatorAction::EnterDecimalPoint);
        assert_eq!(s.second_operand, "12345678.");
        assert_eq!(apply(s.clone(), digit(5)), s);
    }

    #[test]
    fn test_decimal_point_requires_a_digit() {
        let s = apply(CalculatorState::new(), CalculatorAction::EnterDecimalPoint);
        assert!(s.is_empty());

        let pending = state("4", Some(Operation::Add), "");
        assert_eq!(apply(pending.clone(), CalculatorAction::EnterDecimalPoint), pending);
    }

    #[test]
    fn test_decimal_point_only_once_per_operand() {
        let s = run(&[
            digit(1),
            CalculatorAction::EnterDecimalPoint,
            digit(5),
            CalculatorAction::EnterDecimalPoint,
        ]);
        assert_eq!(s.first_operand, "1.5");

        let s = run(&[
            digit(2),
            CalculatorAction::SetOperation(Operation::Multiply),
            digit(3),
            CalculatorAction::EnterDecimalPoint,
            CalculatorAction::EnterDecimalPoint,
            digit(7),
        ]);
        assert_eq!(s, state("2", Some(Operation::Multiply), "3.7"));
    }

    #[test]
    fn test_decimal_point_skips_to_second_operand() {
        // First operand already has a point; the second still gets one
        let s = apply(
            state("1.5", Some(Operation::Add), "2"),
            CalculatorAction::EnterDecimalPoint,
        );
        assert_eq!(s, state("1.5", Some(Operation::Add), "2."));
    }

    #[test]
    fn test_set_operation_requires_first_operand() {
        let s = apply(
            CalculatorState::new(),
            CalculatorAction::SetOperation(Operation::Add),
        );
        assert!(s.operation.is_none());
    }

    #[test]
    fn test_set_operation_replaces_pending() {
        let s = run(&[
            digit(6),
            CalculatorAction::SetOperation(Operation::Add),
            digit(2),
            CalculatorAction::SetOperation(Operation::Divide),
        ]);
        assert_eq!(s, state("6", Some(Operation::Divide), "2"));
    }

    #[test]
    fn test_backspace_priority() {
        let s = apply(state("12", Some(Operation::Add), "34"), CalculatorAction::Backspace);
        assert_eq!(s, state("12", Some(Operation::Add), "3"));

        let s = apply(state("12", Some(Operation::Add), ""), CalculatorAction::Backspace);
        assert_eq!(s, state("12", None, ""));

        let s = apply(state("12", None, ""), CalculatorAction::Backspace);
        assert_eq!(s, state("1", None, ""));

        let s = apply(CalculatorState::new(), CalculatorAction::Backspace);
        assert!(s.is_empty());
    }

    #[test]
    fn test_clear_from_any_state() {
        for s in [
            CalculatorState::new(),
            state("1", None, ""),
            state("1.5", Some(Operation::Multiply), "22"),
            state("inf", None, ""),
        ] {
            assert_eq!(apply(s, CalculatorAction::Clear), CalculatorState::default());
        }
    }

    #[test]
    fn test_five_plus_three() {
        let s = run(&[
            digit(5),
            CalculatorAction::SetOperation(Operation::Add),
            digit(3),
            CalculatorAction::Evaluate,
        ]);
        assert_eq!(s, state("8", None, ""));
    }

    #[test]
    fn test_evaluate_each_operation() {
        let cases = [
            (Operation::Add, "1.5", "2", "3.5"),
            (Operation::Subtract, "2", "5", "-3"),
            (Operation::Multiply, "2.5", "4", "10"),
            (Operation::Divide, "1", "4", "0.25"),
        ];
        for (op, lhs, rhs, expected) in cases {
            let s = apply(state(lhs, Some(op), rhs), CalculatorAction::Evaluate);
            assert_eq!(s, state(expected, None, ""), "{lhs} {op} {rhs}");
        }
    }

    #[test]
    fn test_evaluate_without_operation_is_noop() {
        let s = state("42", None, "");
        assert_eq!(apply(s.clone(), CalculatorAction::Evaluate), s);
    }

    #[test]
    fn test_evaluate_without_second_operand_is_noop() {
        let s = state("42", Some(Operation::Add), "");
        assert_eq!(apply(s.clone(), CalculatorAction::Evaluate), s);
    }

    #[test]
    fn test_trailing_decimal_point_parses() {
        let s = apply(state("5.", Some(Operation::Add), "1"), CalculatorAction::Evaluate);
        assert_eq!(s.first_operand, "6");
    }

    #[test]
    fn test_divide_by_zero_is_infinity() {
        let s = run(&[
            digit(1),
            CalculatorAction::SetOperation(Operation::Divide),
            digit(0),
            CalculatorAction::Evaluate,
        ]);
        assert_eq!(s, state("inf", None, ""));
    }

    #[test]
    fn test_zero_by_zero_is_nan() {
        let s = apply(state("0", Some(Operation::Divide), "0"), CalculatorAction::Evaluate);
        assert_eq!(s.first_operand, "NaN");
    }

    #[test]
    fn test_result_truncated_to_fifteen_chars() {
        let s = apply(state("1", Some(Operation::Divide), "3"), CalculatorAction::Evaluate);
        assert_eq!(s.first_operand, "0.3333333333333");
        assert_eq!(s.first_operand.len(), MAX_RESULT_LEN);
    }

    #[test]
    fn test_large_result_keeps_magnitude() {
        let s = apply(
            state("99999999", Some(Operation::Multiply), "99999999"),
            CalculatorAction::Evaluate,
        );
        assert_eq!(s.first_operand, "9.9999998e15");

        // Chaining pushes the value further out; the exponent must survive
        let s = apply(
            CalculatorState {
                operation: Some(Operation::Multiply),
                second_operand: "99999999".to_string(),
                ..s
            },
            CalculatorAction::Evaluate,
        );
        assert!(s.first_operand.len() <= MAX_RESULT_LEN);
        let value: f64 = s.first_operand.parse().unwrap();
        let expected = 9_999_999_800_000_000.0_f64 * 99_999_999.0;
        assert!(((value - expected) / expected).abs() < 1e-9, "{}", s.first_operand);
    }

    #[test]
    fn test_large_negative_result_keeps_magnitude() {
        let s = apply(
            state("-99999999", Some(Operation::Multiply), "99999999"),
            CalculatorAction::Evaluate,
        );
        assert_eq!(s.first_operand, "-9.9999998e15");
    }

    #[test]
    fn test_tiny_result_keeps_magnitude() {
        let s = apply(
            state("0.0000001", Some(Operation::Divide), "10000000"),
            CalculatorAction::Evaluate,
        );
        let value: f64 = s.first_operand.parse().unwrap();
        assert!(s.first_operand.contains('e'), "{}", s.first_operand);
        assert!(((value - 1e-14) / 1e-14).abs() < 1e-9, "{}", s.first_operand);
    }

    #[test]
    fn test_result_can_feed_next_calculation() {
        let s = run(&[
            digit(9),
            CalculatorAction::SetOperation(Operation::Subtract),
            digit(4),
            CalculatorAction::Evaluate,
            CalculatorAction::SetOperation(Operation::Multiply),
            digit(2),
            CalculatorAction::Evaluate,
        ]);
        assert_eq!(s.first_operand, "10");
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(8.0), "8");
        assert_eq!(format_result(-0.5), "-0.5");
        assert_eq!(format_result(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_result(1e15), "1e15");
        assert_eq!(format_result(123_456_789_012_345.0), "123456789012345");
        assert_eq!(format_result(1e-20), "1e-20");
    }
}
