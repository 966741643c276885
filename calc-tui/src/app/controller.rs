//! Application controller
//!
//! Owns the [`AppState`] and the [`CalculatorSession`]. Every event goes
//! through [`App::handle_event`], which reports whether the screen needs to
//! be redrawn. The render loop draws only when told to.

use std::time::Instant;

use crossbeam_channel::Receiver;
use libcalc::{CalculatorSession, SessionEvent};

use super::actions::{Action, Screen};
use super::event::TuiEvent;
use super::keymap::map_key;
use super::reducer::reduce;
use super::state::AppState;

pub struct App {
    state: AppState,
    session: CalculatorSession,
    session_events: Receiver<SessionEvent>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppState::new())
    }
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut session = CalculatorSession::new();
        let session_events = session.subscribe();
        Self {
            state,
            session,
            session_events,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Handle one terminal event. Returns `true` if a redraw is needed.
    pub fn handle_event(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::Key(key) => match map_key(&self.state, key) {
                Some(action) => self.dispatch(action),
                None => false,
            },
            // The frame size changed even though the state did not
            TuiEvent::Resize(w, h) => {
                self.dispatch(Action::Resize(w, h));
                true
            }
            TuiEvent::Tick => self.tick(Instant::now()),
        }
    }

    /// Route an action and report whether anything visible changed
    pub fn dispatch(&mut self, action: Action) -> bool {
        let mut changed = match action {
            Action::Calculator(calculator_action) => {
                self.session.dispatch(calculator_action);
                false
            }
            action => self.reduce(action),
        };

        // Explicit notification from the session
        while let Ok(SessionEvent::StateChanged { state }) = self.session_events.try_recv() {
            changed |= self.reduce(Action::CalculatorChanged(state));
        }
        changed
    }

    /// Refresh the verification clock when its period elapsed
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state.current_screen != Screen::Verification {
            return self.dispatch(Action::Tick);
        }

        let mut verification = self.state.verification.clone();
        if verification.refresh_if_due(now) {
            self.dispatch(Action::VerificationRefreshed(verification))
        } else {
            false
        }
    }

    fn reduce(&mut self, action: Action) -> bool {
        let next = reduce(self.state.clone(), action);
        let changed = next != self.state;
        self.state = next;
        changed
    }
}
