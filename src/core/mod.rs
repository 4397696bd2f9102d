//! Core state machine types.
//!
//! This module contains the pure functional heart of the machine:
//! - State definitions via the `State` trait (with hierarchy via `path`)
//! - Event kinds via the `Event` trait
//! - Guard predicates for choosing between competing transitions
//! - Pure reducer actions and the ordered-application contract
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects), following the
//! "pure core, imperative shell" philosophy. The only imperative piece
//! of the crate is the dispatch loop, which lives elsewhere.

mod action;
mod event;
mod guard;
mod history;
mod state;

pub use action::{apply_all, Action};
pub use event::Event;
pub use guard::Guard;
pub use history::{StateHistory, TransitionRecord};
pub use state::State;
