//! Builder for constructing charts.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Action, Event, State};
use crate::machine::{Chart, Transition};

/// Builder for constructing charts with a fluent API.
///
/// Besides collecting the transition table, the builder validates the
/// chart's shape up front: an initial state and at least one row are
/// required, and every node name referenced by an entry action, exit
/// action, or completion edge must appear on the path of some state in
/// the table. Row order is preserved - it is the guard precedence.
pub struct ChartBuilder<S: State, C, E: Event> {
    initial: Option<S>,
    transitions: Vec<Transition<S, C, E>>,
    entry_actions: Vec<(&'static str, Action<C, E>)>,
    exit_actions: Vec<(&'static str, Action<C, E>)>,
    completions: Vec<(&'static str, S)>,
}

impl<S: State, C: Clone, E: Event> ChartBuilder<S, C, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            entry_actions: Vec::new(),
            exit_actions: Vec::new(),
            completions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a row using a transition builder.
    /// Returns an error if the row fails validation.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<S, C, E>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built row.
    pub fn add_transition(mut self, transition: Transition<S, C, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Register an entry action for the named node. It fires whenever a
    /// transition enters the node, exactly once per entry.
    pub fn on_entry(mut self, node: &'static str, action: Action<C, E>) -> Self {
        self.entry_actions.push((node, action));
        self
    }

    /// Register an exit action for the named node. It fires whenever a
    /// transition (or completion edge) leaves the node.
    pub fn on_exit(mut self, node: &'static str, action: Action<C, E>) -> Self {
        self.exit_actions.push((node, action));
        self
    }

    /// Register a completion edge: when a final leaf inside the named
    /// compound node is reached, the chart moves on to `target`.
    pub fn on_done(mut self, node: &'static str, target: S) -> Self {
        self.completions.push((node, target));
        self
    }

    /// Build the chart.
    pub fn build(self) -> Result<Chart<S, C, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut known: Vec<&'static str> = Vec::new();
        let mut learn = |state: &S| {
            for node in state.path() {
                if !known.contains(&node) {
                    known.push(node);
                }
            }
        };
        learn(&initial);
        for transition in &self.transitions {
            learn(&transition.from);
            learn(&transition.to);
        }

        let referenced = self
            .entry_actions
            .iter()
            .map(|(node, _)| *node)
            .chain(self.exit_actions.iter().map(|(node, _)| *node))
            .chain(self.completions.iter().map(|(node, _)| *node));
        for node in referenced {
            if !known.contains(&node) {
                return Err(BuildError::UnknownNode {
                    node: node.to_string(),
                });
            }
        }

        Ok(Chart::from_parts(
            initial,
            self.transitions,
            self.entry_actions,
            self.exit_actions,
            self.completions,
        ))
    }
}

impl<S: State, C: Clone, E: Event> Default for ChartBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
