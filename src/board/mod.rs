//! The corkboard domain: context, entities, events, guards, actions, and
//! the interaction machine built from them.
//!
//! Everything here is the concrete instantiation of the generic chart
//! interpreter for the board: the [`Context`] is the single shared value
//! actions fold over, and [`BoardMachine`] holds the transition tables
//! that decide what happens when.

pub mod actions;
pub mod context;
pub mod entity;
pub mod event;
pub mod guards;
pub mod machine;

pub use context::{Context, ScaleRange, Seed, CORKBOARD_SURFACE};
pub use entity::{Entity, EntityBody, WorldPoint, PIN_BODY};
pub use event::{InputEvent, InputKind, PointerEvent};
pub use machine::{BoardMachine, Configuration, LinkingState, MonitorState, ReactingState};
