//! Transition table entries.

use crate::core::{Action, Event, Guard, State};

/// A single row of a transition table.
///
/// A transition fires when the machine sits in `from`, an event of kind
/// `on` arrives, and the guard (if any) passes. Rows are data: the table
/// order is significant, because the interpreter evaluates rows top to
/// bottom and the first eligible row wins. That order is how competing
/// guarded transitions from the same state are resolved.
pub struct Transition<S: State, C, E: Event> {
    /// Source state
    pub from: S,
    /// Event kind this row responds to
    pub on: E::Kind,
    /// Optional eligibility predicate over (context, event)
    pub guard: Option<Guard<C, E>>,
    /// Target state
    pub to: S,
    /// Transition actions, applied in order between exit and entry actions
    pub actions: Vec<Action<C, E>>,
}

impl<S: State, C, E: Event> Transition<S, C, E> {
    /// Check whether this row fires for the given machine state, context,
    /// and event. Pure.
    pub fn is_eligible(&self, state: &S, context: &C, event: &E) -> bool {
        if *state != self.from || event.kind() != self.on {
            return false;
        }
        self.guard
            .as_ref()
            .is_none_or(|guard| guard.check(context, event))
    }

    /// Whether this row is internal: it targets its own source state and
    /// therefore runs no exit or entry actions.
    pub fn is_internal(&self) -> bool {
        self.from == self.to
    }
}

impl<S: State, C, E: Event> Clone for Transition<S, C, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            on: self.on,
            guard: self.guard.clone(),
            to: self.to.clone(),
            actions: self.actions.clone(),
        }
    }
}
