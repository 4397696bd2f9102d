//! Builder for constructing transition table rows.

use crate::builder::error::BuildError;
use crate::core::{Action, Event, Guard, State};
use crate::machine::Transition;

/// Builder for constructing transitions with a fluent API.
///
/// `from`, `on`, and `to` are required; the guard and the action list are
/// optional. A row with no actions still moves the machine (and still
/// triggers entry/exit actions of the nodes it crosses).
pub struct TransitionBuilder<S: State, C, E: Event> {
    from: Option<S>,
    on: Option<E::Kind>,
    guard: Option<Guard<C, E>>,
    to: Option<S>,
    actions: Vec<Action<C, E>>,
}

impl<S: State, C, E: Event> TransitionBuilder<S, C, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            on: None,
            guard: None,
            to: None,
            actions: Vec::new(),
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the event kind this row responds to (required).
    pub fn on(mut self, kind: E::Kind) -> Self {
        self.on = Some(kind);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard<C, E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard from a named closure (optional).
    pub fn when<F>(mut self, name: &'static str, predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(name, predicate));
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Append a transition action (optional, order preserved).
    pub fn action(mut self, action: Action<C, E>) -> Self {
        self.actions.push(action);
        self
    }

    /// Append several transition actions at once.
    pub fn actions(mut self, actions: Vec<Action<C, E>>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, C, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let on = self.on.ok_or(BuildError::MissingEventKind)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            on,
            guard: self.guard,
            to,
            actions: self.actions,
        })
    }
}

impl<S: State, C, E: Event> Default for TransitionBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
