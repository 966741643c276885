//! Calculator core
//!
//! - Actions: what the user can do (digits, decimal point, operations, ...)
//! - State: the two operand strings and the pending operation
//! - Reducer: pure function (State, Action) -> State
//!
//! The display layer never edits state directly; it feeds actions through
//! [`apply`] (usually via [`crate::session::CalculatorSession`]).

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::{CalculatorAction, Digit, Operation};
pub use reducer::apply;
pub use state::{CalculatorState, MAX_OPERAND_LEN, MAX_RESULT_LEN};
