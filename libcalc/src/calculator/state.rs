//! Calculator edit state

use serde::{Deserialize, Serialize};

use super::actions::Operation;

/// Maximum number of characters accepted into an operand by digit entry
pub const MAX_OPERAND_LEN: usize = 8;

/// Maximum number of characters kept from an evaluated result
pub const MAX_RESULT_LEN: usize = 15;

/// Current edit state of the calculator
///
/// Immutable value; a new one is produced for every applied action.
/// `second_operand` is only ever non-empty while an operation is pending,
/// and an operation is only ever pending while `first_operand` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Left-hand operand text
    pub first_operand: String,

    /// Pending operation, if any
    pub operation: Option<Operation>,

    /// Right-hand operand text
    pub second_operand: String,
}

impl CalculatorState {
    /// Create the empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Is this the canonical empty state?
    pub fn is_empty(&self) -> bool {
        self.first_operand.is_empty() && self.operation.is_none() && self.second_operand.is_empty()
    }

    /// Text shown on the calculator display: first operand, operation symbol, second operand
    pub fn display(&self) -> String {
        let symbol = self.operation.map(Operation::symbol).unwrap_or("");
        format!("{}{}{}", self.first_operand, symbol, self.second_operand)
    }
}
