//! The corkboard interaction machine.
//!
//! Two regions run in parallel and each sees every incoming event:
//!
//! - `monitoringMouse` never changes state; it only folds pointer-move
//!   events into the context (position, delta, hover, world mapping).
//! - `reactingToMouse` is the hierarchical gesture machine: `idle`,
//!   `moving`, `panning`, `placingPin`, `selecting`, and the compound
//!   `linking` node whose `done` leaf completes back to `idle`.
//!
//! Region order per event is monitoring first, then reacting, threading
//! the context between them - a pan or drag therefore observes the delta
//! the same pointer-move just produced.

use crate::board::actions;
use crate::board::context::Context;
use crate::board::event::{InputEvent, InputKind};
use crate::board::guards;
use crate::builder::{BuildError, ChartBuilder, TransitionBuilder};
use crate::core::State;
use crate::machine::Chart;
use serde::{Deserialize, Serialize};

/// The single state of the pointer-monitoring region.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonitorState {
    MonitoringMouse,
}

impl State for MonitorState {
    fn name(&self) -> &'static str {
        "monitoringMouse"
    }
}

/// Leaves of the compound `linking` node.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkingState {
    FirstPoint,
    SecondPoint,
    Done,
}

impl LinkingState {
    fn leaf_name(self) -> &'static str {
        match self {
            Self::FirstPoint => "firstPoint",
            Self::SecondPoint => "secondPoint",
            Self::Done => "done",
        }
    }
}

/// States of the gesture region.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReactingState {
    Idle,
    Moving,
    Panning,
    PlacingPin,
    Selecting,
    Linking(LinkingState),
}

impl State for ReactingState {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Moving => "moving",
            Self::Panning => "panning",
            Self::PlacingPin => "placingPin",
            Self::Selecting => "selecting",
            Self::Linking(inner) => inner.leaf_name(),
        }
    }

    fn path(&self) -> Vec<&'static str> {
        match self {
            Self::Linking(_) => vec!["linking", self.name()],
            _ => vec![self.name()],
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Linking(LinkingState::Done))
    }
}

/// Active leaf of each parallel region. Together with the context this
/// is the complete machine state; it is replaced atomically on every
/// processed event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Configuration {
    pub monitoring: MonitorState,
    pub reacting: ReactingState,
}

impl Configuration {
    /// The configuration every machine starts in.
    pub fn initial() -> Self {
        Self {
            monitoring: MonitorState::MonitoringMouse,
            reacting: ReactingState::Idle,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::initial()
    }
}

/// The two region charts of the corkboard machine.
pub struct BoardMachine {
    monitoring: Chart<MonitorState, Context, InputEvent>,
    reacting: Chart<ReactingState, Context, InputEvent>,
}

impl BoardMachine {
    /// Build both region charts.
    pub fn new() -> Result<Self, BuildError> {
        Ok(Self {
            monitoring: monitoring_chart()?,
            reacting: reacting_chart()?,
        })
    }

    /// The pointer-monitoring region's chart.
    pub fn monitoring(&self) -> &Chart<MonitorState, Context, InputEvent> {
        &self.monitoring
    }

    /// The gesture region's chart.
    pub fn reacting(&self) -> &Chart<ReactingState, Context, InputEvent> {
        &self.reacting
    }
}

fn row() -> TransitionBuilder<ReactingState, Context, InputEvent> {
    TransitionBuilder::new()
}

fn monitoring_chart() -> Result<Chart<MonitorState, Context, InputEvent>, BuildError> {
    ChartBuilder::new()
        .initial(MonitorState::MonitoringMouse)
        .transition(
            TransitionBuilder::new()
                .from(MonitorState::MonitoringMouse)
                .on(InputKind::PointerMove)
                .to(MonitorState::MonitoringMouse)
                .action(actions::update_mouse_coordinates()),
        )?
        .build()
}

fn reacting_chart() -> Result<Chart<ReactingState, Context, InputEvent>, BuildError> {
    use LinkingState as L;
    use ReactingState::{Idle, Linking, Moving, Panning, PlacingPin, Selecting};

    // Row order within a (state, event) group is guard precedence:
    // first match wins.
    ChartBuilder::new()
        .initial(Idle)
        // idle
        .transition(
            row()
                .from(Idle)
                .on(InputKind::PointerDown)
                .guard(guards::is_shift_held())
                .to(Selecting),
        )?
        .transition(
            row()
                .from(Idle)
                .on(InputKind::PointerDown)
                .guard(guards::is_hovering_corkboard())
                .to(Panning),
        )?
        .transition(
            row()
                .from(Idle)
                .on(InputKind::PointerDown)
                .guard(guards::is_hovering_draggable())
                .to(Moving),
        )?
        .transition(row().from(Idle).on(InputKind::BeginPlacingPin).to(PlacingPin))?
        .transition(
            row()
                .from(Idle)
                .on(InputKind::BeginLinking)
                .to(Linking(L::FirstPoint)),
        )?
        .transition(
            row()
                .from(Idle)
                .on(InputKind::Zoom)
                .to(Idle)
                .action(actions::set_zoom()),
        )?
        // moving
        .transition(
            row()
                .from(Moving)
                .on(InputKind::PointerUp)
                .to(Idle)
                .action(actions::reset_selection()),
        )?
        .transition(
            row()
                .from(Moving)
                .on(InputKind::PointerMove)
                .to(Moving)
                .action(actions::move_picked()),
        )?
        // panning
        .transition(row().from(Panning).on(InputKind::PointerUp).to(Idle))?
        .transition(
            row()
                .from(Panning)
                .on(InputKind::PointerMove)
                .to(Panning)
                .action(actions::pan_mouse()),
        )?
        // placingPin
        .transition(
            row()
                .from(PlacingPin)
                .on(InputKind::PointerUp)
                .to(Idle)
                .action(actions::place_pin_under_mouse()),
        )?
        // selecting
        .transition(
            row()
                .from(Selecting)
                .on(InputKind::PointerUp)
                .to(Idle)
                .action(actions::append_hover_to_selection()),
        )?
        // linking
        .transition(
            row()
                .from(Linking(L::FirstPoint))
                .on(InputKind::PointerUp)
                .guard(guards::is_hovering_draggable())
                .to(Linking(L::SecondPoint))
                .action(actions::select_hovered()),
        )?
        .transition(
            row()
                .from(Linking(L::FirstPoint))
                .on(InputKind::PointerUp)
                .to(Linking(L::Done)),
        )?
        .transition(
            row()
                .from(Linking(L::SecondPoint))
                .on(InputKind::PointerDown)
                .guard(guards::is_hovering_draggable())
                .to(Linking(L::Done))
                .action(actions::link_entities()),
        )?
        .transition(
            row()
                .from(Linking(L::SecondPoint))
                .on(InputKind::PointerDown)
                .to(Linking(L::Done)),
        )?
        .on_entry("moving", actions::append_hover_to_selection())
        .on_exit("linking", actions::reset_selection())
        .on_done("linking", Idle)
        .build()
}
