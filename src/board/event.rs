//! The input event vocabulary.
//!
//! Events arrive from an external input-normalization layer already
//! translated into this tagged vocabulary; the core performs no geometry
//! lookups of its own. `clientX`/`clientY` are screen coordinates relative
//! to the rendering surface's origin, and `entity` is present only when
//! the pointer sits on a designated drag handle.

use crate::core::Event;
use serde::{Deserialize, Serialize};

/// Payload shared by the three pointer event kinds.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerEvent {
    /// Pointer identifier as reported by the input layer
    pub id: String,
    /// Id of the entity or surface under the pointer, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    pub client_x: f64,
    pub client_y: f64,
    #[serde(default)]
    pub shift_key: bool,
}

impl PointerEvent {
    /// A pointer event at the given screen position, over empty space.
    pub fn at(client_x: f64, client_y: f64) -> Self {
        Self {
            id: "0".to_string(),
            entity: None,
            client_x,
            client_y,
            shift_key: false,
        }
    }

    /// Mark the event as hovering the given entity or surface id.
    pub fn over(mut self, entity: &str) -> Self {
        self.entity = Some(entity.to_string());
        self
    }

    /// Mark the event's shift modifier as held.
    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }
}

/// External input events, tagged the way the wire carries them.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    #[serde(rename = "pointermove")]
    PointerMove(PointerEvent),
    #[serde(rename = "pointerdown")]
    PointerDown(PointerEvent),
    #[serde(rename = "pointerup")]
    PointerUp(PointerEvent),
    #[serde(rename = "zoom")]
    Zoom { scale: f64 },
    #[serde(rename = "beginPlacingPin")]
    BeginPlacingPin,
    #[serde(rename = "beginLinking")]
    BeginLinking,
}

impl InputEvent {
    /// The pointer payload, if this is a pointer event.
    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::PointerMove(pointer) | Self::PointerDown(pointer) | Self::PointerUp(pointer) => {
                Some(pointer)
            }
            _ => None,
        }
    }
}

/// Payload-free discriminants for [`InputEvent`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputKind {
    PointerMove,
    PointerDown,
    PointerUp,
    Zoom,
    BeginPlacingPin,
    BeginLinking,
}

impl InputKind {
    /// The wire name of this event kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PointerMove => "pointermove",
            Self::PointerDown => "pointerdown",
            Self::PointerUp => "pointerup",
            Self::Zoom => "zoom",
            Self::BeginPlacingPin => "beginPlacingPin",
            Self::BeginLinking => "beginLinking",
        }
    }
}

impl Event for InputEvent {
    type Kind = InputKind;

    fn kind(&self) -> InputKind {
        match self {
            Self::PointerMove(_) => InputKind::PointerMove,
            Self::PointerDown(_) => InputKind::PointerDown,
            Self::PointerUp(_) => InputKind::PointerUp,
            Self::Zoom { .. } => InputKind::Zoom,
            Self::BeginPlacingPin => InputKind::BeginPlacingPin,
            Self::BeginLinking => InputKind::BeginLinking,
        }
    }
}
