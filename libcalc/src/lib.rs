//! Calcpad - a four-function calculator core
//!
//! This library provides the calculator state reducer, a session that owns
//! the current state and notifies its display, and the model behind the
//! build verification screen.

pub mod calculator;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod verification;

// Re-export commonly used types
pub use calculator::{apply, CalculatorAction, CalculatorState, Digit, Operation};
pub use config::Config;
pub use error::{CalcError, ConfigError, Result};
pub use session::{CalculatorSession, SessionEvent};
pub use verification::VerificationScreen;
