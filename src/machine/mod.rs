//! Generic hierarchical state machine interpreter.
//!
//! A [`Chart`] is the machine *as data*: an ordered transition table,
//! entry/exit actions keyed by node name, and completion edges for
//! compound nodes. [`Chart::step`] interprets one event against that data
//! and returns the resulting state and context without mutating anything,
//! so the same chart value serves live dispatch, replay, and tests alike.

mod chart;
mod transition;

pub use chart::{Chart, Step};
pub use transition::Transition;
