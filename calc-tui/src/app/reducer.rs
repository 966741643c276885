//! Pure reducer function for app state transitions
//!
//! `(AppState, Action) -> AppState`
//!
//! Calculator input is not reduced here: the controller dispatches it to the
//! calculator session and feeds the resulting state back as
//! `Action::CalculatorChanged`.

use super::actions::Action;
use super::state::AppState;

/// Pure reducer function
///
/// - No I/O
/// - No clock reads (clock values arrive inside actions)
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::NavigateTo(screen) => AppState {
            current_screen: screen,
            help_visible: false,
            ..state
        },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Calculator ===
        // Handled by the session outside the reducer
        Action::Calculator(_) => state,

        Action::CalculatorChanged(calculator) => AppState {
            calculator,
            ..state
        },

        // === Verification ===
        Action::VerificationRefreshed(verification) => AppState {
            verification,
            ..state
        },
    }
}
