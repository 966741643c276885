//! Keybindings
//!
//! Maps key events to actions. Global keys work on every screen; calculator
//! keys only while the calculator screen has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use libcalc::CalculatorAction;

use super::actions::{Action, Screen};
use super::state::AppState;

/// Map a key event to an action, or `None` if the key means nothing here
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return Some(Action::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(Action::Quit),

        (KeyCode::F(1), _) => {
            return Some(if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            });
        }

        (KeyCode::F(2), _) => return Some(Action::NavigateTo(Screen::Calculator)),
        (KeyCode::F(3), _) => return Some(Action::NavigateTo(Screen::Verification)),

        (KeyCode::Esc, _) if state.help_visible => return Some(Action::HideHelp),

        _ => {}
    }

    if !state.accepts_calculator_input() {
        return None;
    }

    let action = match key.code {
        KeyCode::Enter => CalculatorAction::Evaluate,
        KeyCode::Backspace => CalculatorAction::Backspace,
        KeyCode::Delete => CalculatorAction::Clear,
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            CalculatorAction::from_key(c)?
        }
        _ => return None,
    };
    Some(Action::Calculator(action))
}
