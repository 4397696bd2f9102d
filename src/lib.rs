//! Corkboard: a hierarchical, parallel interaction state machine.
//!
//! The crate drives an interactive canvas - place pins, link them, drag
//! them, pan, zoom - by interpreting a stream of pointer and keyboard
//! events against a machine held entirely as data. The core is pure:
//! guards are predicates, actions are reducers producing a new context
//! value, and the interpreter threads both through every step. The one
//! imperative piece is the [`Dispatcher`], which serializes events and
//! publishes read-only snapshots to observers such as a renderer.
//!
//! # Core Concepts
//!
//! - **Context**: the shared application value (camera, pointer,
//!   entities, selection), mutated only by full replacement
//! - **Guards**: pure predicates choosing between competing transitions
//! - **Actions**: pure reducers computing the next context
//! - **Chart**: a hierarchical transition table interpreted generically
//! - **Configuration**: the active leaf of each parallel region
//!
//! # Example
//!
//! ```rust
//! use corkboard::{Dispatcher, InputEvent, PointerEvent, ReactingState, Seed};
//!
//! let mut dispatcher = Dispatcher::new(Seed::default()).unwrap();
//!
//! // Drag across the empty board: the camera pans by the move delta.
//! dispatcher.send(InputEvent::PointerMove(
//!     PointerEvent::at(0.0, 0.0).over("corkboard"),
//! ));
//! dispatcher.send(InputEvent::PointerDown(
//!     PointerEvent::at(0.0, 0.0).over("corkboard"),
//! ));
//! dispatcher.send(InputEvent::PointerMove(
//!     PointerEvent::at(10.0, 4.0).over("corkboard"),
//! ));
//!
//! assert_eq!(dispatcher.configuration().reacting, ReactingState::Panning);
//! assert_eq!(dispatcher.context().pan_x, 10.0);
//! assert_eq!(dispatcher.context().pan_y, 4.0);
//! ```

pub mod board;
pub mod builder;
pub mod core;
pub mod dispatch;
pub mod machine;

// Re-export commonly used types
pub use board::{
    BoardMachine, Configuration, Context, Entity, EntityBody, InputEvent, InputKind, LinkingState,
    MonitorState, PointerEvent, ReactingState, ScaleRange, Seed, WorldPoint,
};
pub use builder::{BuildError, ChartBuilder, TransitionBuilder};
pub use core::{apply_all, Action, Event, Guard, State, StateHistory, TransitionRecord};
pub use dispatch::{Dispatcher, Snapshot};
pub use machine::{Chart, Step, Transition};
