//! Actions accepted by the calculator reducer

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CalcError;

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Numeric value of the digit
    pub fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for the digit
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(CalcError::InvalidDigit(value.to_string()))
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or_else(|| CalcError::InvalidDigit(c.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pending arithmetic operation between the two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Symbol shown between the operands
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "x",
            Operation::Divide => "/",
        }
    }

    /// Apply the operation with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity or NaN rather than an error.
    pub fn compute(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Discrete user actions
///
/// Actions describe what happened; [`crate::calculator::apply`] decides
/// what it means for the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorAction {
    /// Append a digit to the operand being edited
    EnterDigit(Digit),

    /// Append a decimal point to the operand being edited
    EnterDecimalPoint,

    /// Reset to the empty state
    Clear,

    /// Remove the most recent input
    Backspace,

    /// Set or replace the pending operation
    SetOperation(Operation),

    /// Compute the result
    Evaluate,
}

impl CalculatorAction {
    /// Map a typed key to an action.
    ///
    /// Both `*` and `x` select multiplication. Backspace accepts the BS and
    /// DEL control characters. Returns `None` for keys with no meaning.
    pub fn from_key(key: char) -> Option<Self> {
        let action = match key {
            '0'..='9' => CalculatorAction::EnterDigit(Digit::try_from(key).ok()?),
            '.' => CalculatorAction::EnterDecimalPoint,
            '+' => CalculatorAction::SetOperation(Operation::Add),
            '-' => CalculatorAction::SetOperation(Operation::Subtract),
            '*' | 'x' | 'X' => CalculatorAction::SetOperation(Operation::Multiply),
            '/' => CalculatorAction::SetOperation(Operation::Divide),
            '=' => CalculatorAction::Evaluate,
            'c' | 'C' => CalculatorAction::Clear,
            '\u{8}' | '\u{7f}' => CalculatorAction::Backspace,
            _ => return None,
        };
        Some(action)
    }
}
