//! Application module
//!
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//! - Keymap: key events -> actions
//! - Controller: owns the state and the calculator session, decides when
//!   the screen must be redrawn

pub mod actions;
pub mod controller;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod state;

pub use actions::{Action, Screen};
pub use controller::App;
pub use reducer::reduce;
pub use state::{AppState, UiConfig};
