//! State transition history tracking.
//!
//! Provides immutable tracking of machine transitions over time,
//! following functional programming principles: recording returns a new
//! history and never modifies the old one.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// Records are immutable values: a move from one state to another, the
/// name of the event kind that caused it, and when it happened.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the event kind that triggered the transition
    pub event: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable - [`record`](StateHistory::record) returns a new
/// history with the transition appended.
///
/// # Example
///
/// ```rust
/// use corkboard::core::{State, StateHistory, TransitionRecord};
/// use chrono::Utc;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Mode {
///     Idle,
///     Panning,
/// }
///
/// impl State for Mode {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Idle => "idle",
///             Self::Panning => "panning",
///         }
///     }
/// }
///
/// let history = StateHistory::new();
/// let history = history.record(TransitionRecord {
///     from: Mode::Idle,
///     to: Mode::Panning,
///     event: "pointerdown".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path, vec![&Mode::Idle, &Mode::Panning]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<TransitionRecord<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record appended.
    pub fn record(&self, transition: TransitionRecord<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// first record, then the `to` state of every record.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded transitions in order.
    pub fn transitions(&self) -> &[TransitionRecord<S>] {
        &self.transitions
    }
}
