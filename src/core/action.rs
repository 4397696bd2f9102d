//! Pure reducer actions that compute the next context.
//!
//! An action is `(context, event) -> context'`: it never mutates its input
//! and never fails. All writes to the shared context happen through
//! actions; everything else only reads snapshots.

use std::fmt;
use std::sync::Arc;

/// Named pure reducer producing a new context from the old one plus the
/// triggering event.
///
/// Actions must be total over every context shape reachable from the
/// transition table. An action handed an event without the payload it
/// needs returns the context unchanged rather than failing.
///
/// # Example
///
/// ```rust
/// use corkboard::core::Action;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter {
///     value: i64,
/// }
///
/// let increment = Action::new("increment", |counter: &Counter, step: &i64| Counter {
///     value: counter.value + step,
/// });
///
/// let counter = Counter { value: 1 };
/// let next = increment.apply(&counter, &2);
///
/// assert_eq!(next.value, 3);
/// assert_eq!(counter.value, 1); // original untouched
/// ```
pub struct Action<C, E> {
    name: &'static str,
    reducer: Arc<dyn Fn(&C, &E) -> C + Send + Sync>,
}

impl<C, E> Action<C, E> {
    /// Create an action from a pure reducer function.
    pub fn new<F>(name: &'static str, reducer: F) -> Self
    where
        F: Fn(&C, &E) -> C + Send + Sync + 'static,
    {
        Action {
            name,
            reducer: Arc::new(reducer),
        }
    }

    /// Get the action's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Compute the next context. Pure: the input context is not modified.
    pub fn apply(&self, context: &C, event: &E) -> C {
        (self.reducer)(context, event)
    }
}

impl<C, E> Clone for Action<C, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            reducer: Arc::clone(&self.reducer),
        }
    }
}

impl<C, E> fmt::Debug for Action<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish()
    }
}

/// Apply an ordered list of actions left to right, each receiving the
/// output of the previous one plus the triggering event.
///
/// This is the whole contract of the context store: an event resolves to
/// an action list, and the new context is the fold of that list over the
/// old context.
///
/// # Example
///
/// ```rust
/// use corkboard::core::{apply_all, Action};
///
/// let double = Action::new("double", |value: &i64, _: &()| value * 2);
/// let add_one = Action::new("addOne", |value: &i64, _: &()| value + 1);
///
/// // (3 * 2) + 1, not (3 + 1) * 2: order matters.
/// assert_eq!(apply_all(3, &[double, add_one], &()), 7);
/// ```
pub fn apply_all<C, E>(context: C, actions: &[Action<C, E>], event: &E) -> C {
    actions
        .iter()
        .fold(context, |context, action| action.apply(&context, event))
}
