//! Actions for the app reducer

use libcalc::{CalculatorAction, CalculatorState, VerificationScreen};

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === UI Events ===
    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Navigate to a different screen
    NavigateTo(Screen),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Calculator ===
    /// Calculator input; dispatched to the calculator session, not reduced here
    Calculator(CalculatorAction),

    /// The calculator session reported a new state
    CalculatorChanged(CalculatorState),

    // === Verification ===
    /// The verification clock was refreshed
    VerificationRefreshed(VerificationScreen),
}

/// Screen/View identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Four-function calculator
    Calculator,

    /// Build verification banner and clock
    Verification,
}
