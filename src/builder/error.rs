//! Build errors for chart and transition builders.

use thiserror::Error;

/// Errors that can occur when building charts and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event kind not specified. Call .on(kind)")]
    MissingEventKind,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("'{node}' does not name a node on any state path in the table")]
    UnknownNode { node: String },
}
