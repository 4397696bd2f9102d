//! Event trait for machine input.
//!
//! Transition tables are keyed on an event's *kind* (its discriminant),
//! while guards and actions pattern-match the full payload. Encoding the
//! kind as an associated type keeps the table pure data: a transition can
//! say "fires on pointer-down" without closing over a payload shape.

use std::fmt::Debug;

/// Trait for machine input events.
///
/// # Example
///
/// ```rust
/// use corkboard::core::Event;
///
/// #[derive(Clone, Debug)]
/// enum DoorEvent {
///     Push { force: f64 },
///     Pull,
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum DoorEventKind {
///     Push,
///     Pull,
/// }
///
/// impl Event for DoorEvent {
///     type Kind = DoorEventKind;
///
///     fn kind(&self) -> DoorEventKind {
///         match self {
///             Self::Push { .. } => DoorEventKind::Push,
///             Self::Pull => DoorEventKind::Pull,
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Push { force: 3.0 }.kind(), DoorEventKind::Push);
/// ```
pub trait Event: Clone + Debug {
    /// Payload-free discriminant used to match events against transitions.
    type Kind: Copy + PartialEq + Debug + Send + Sync;

    /// Get this event's kind.
    fn kind(&self) -> Self::Kind;
}
