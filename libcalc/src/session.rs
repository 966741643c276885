//! Calculator session with explicit change notification
//!
//! The session owns the single [`CalculatorState`] of a screen. The display
//! layer sends actions through [`CalculatorSession::dispatch`] and learns
//! about changes from the [`SessionEvent`]s it receives after subscribing,
//! instead of observing the state implicitly.
//!
//! # Example
//!
//! ```
//! use libcalc::{CalculatorAction, CalculatorSession, Operation, SessionEvent};
//!
//! let mut session = CalculatorSession::new();
//! let events = session.subscribe();
//!
//! session.dispatch(CalculatorAction::from_key('7').unwrap());
//! session.dispatch(CalculatorAction::SetOperation(Operation::Add));
//!
//! let SessionEvent::StateChanged { state } = events.try_recv().unwrap();
//! assert_eq!(state.first_operand, "7");
//! assert_eq!(session.state().display(), "7+");
//! ```

use crossbeam_channel::{Receiver, Sender};
use serde::Serialize;

use crate::calculator::{apply, CalculatorAction, CalculatorState};

/// Events emitted by a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The state changed; carries the new state
    StateChanged { state: CalculatorState },
}

/// Owner of the current calculator state
#[derive(Debug, Default)]
pub struct CalculatorSession {
    state: CalculatorState,
    subscribers: Vec<Sender<SessionEvent>>,
}

impl CalculatorSession {
    /// Create a session holding the empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Subscribe to change notifications
    ///
    /// Each subscriber gets every event emitted after it subscribed.
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (sender, receiver) = crossbeam_channel::unbounded();
        self.subscribers.push(sender);
        receiver
    }

    /// Number of registered subscribers
    ///
    /// A dropped receiver is still counted until the next emitted event
    /// prunes it.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply an action and notify subscribers if the state changed
    ///
    /// Returns `true` when the action had an effect.
    pub fn dispatch(&mut self, action: CalculatorAction) -> bool {
        let previous = std::mem::take(&mut self.state);
        let next = apply(previous.clone(), action);
        let changed = next != previous;
        self.state = next;

        tracing::debug!(
            ?action,
            changed,
            display = %self.state.display(),
            "dispatched calculator action"
        );

        if changed {
            self.emit(SessionEvent::StateChanged {
                state: self.state.clone(),
            });
        }
        changed
    }

    /// Reset to the empty state (same as dispatching `Clear`)
    pub fn reset(&mut self) -> bool {
        self.dispatch(CalculatorAction::Clear)
    }

    fn emit(&mut self, event: SessionEvent) {
        // Drop subscribers whose receiver is gone
        self.subscribers
            .retain(|sender| sender.send(event.clone()).is_ok());
    }
}
