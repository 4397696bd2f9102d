//! Guard predicates for selecting between competing transitions.
//!
//! Guards are pure boolean functions over the current context and the
//! incoming event. They enable declarative transition rules without side
//! effects: when several transitions from the same state respond to the
//! same event kind, the table is evaluated top to bottom and the first
//! transition whose guard passes wins.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over `(context, event)` that determines whether a
/// transition is eligible.
///
/// Guards must be total: given any reachable context/event pair they
/// return a boolean and never fail. A guard carries a name so eligible
/// transitions can be identified in diagnostics and tests.
///
/// # Example
///
/// ```rust
/// use corkboard::core::Guard;
///
/// struct Counter {
///     value: i64,
/// }
///
/// let positive = Guard::new("isPositive", |counter: &Counter, _event: &()| {
///     counter.value > 0
/// });
///
/// assert!(positive.check(&Counter { value: 3 }, &()));
/// assert!(!positive.check(&Counter { value: -3 }, &()));
/// assert_eq!(positive.name(), "isPositive");
/// ```
pub struct Guard<C, E> {
    name: &'static str,
    predicate: Arc<dyn Fn(&C, &E) -> bool + Send + Sync>,
}

impl<C, E> Guard<C, E> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            name,
            predicate: Arc::new(predicate),
        }
    }

    /// Get the guard's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the guard against a context/event pair.
    pub fn check(&self, context: &C, event: &E) -> bool {
        (self.predicate)(context, event)
    }
}

impl<C, E> Clone for Guard<C, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C, E> fmt::Debug for Guard<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}
