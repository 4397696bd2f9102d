//! Entities placed on the board.

use serde::{Deserialize, Serialize};

/// The body a freshly placed pin carries.
pub const PIN_BODY: &str = "!";

/// A point in world coordinates (camera-independent).
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// Payload of an entity, discriminated by its kind.
///
/// Serializes as `{"type": "pin", "body": "!"}` and so on, which is the
/// shape renderers consume.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "body", rename_all = "lowercase")]
pub enum EntityBody {
    Pin(String),
    Text(String),
    Image(String),
    Line { from: WorldPoint, to: WorldPoint },
}

/// A placeable, linkable object on the board.
///
/// `id` is opaque, generated at creation, and immutable thereafter.
/// `x`/`y` are world coordinates. `links` is an ordered sequence of
/// outgoing connections; `None` means no links. Every id written into
/// `links` must reference an existing entity at write time - readers may
/// tolerate stale ids, writers must not create them.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub body: EntityBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
}

impl Entity {
    /// Create a pin entity at the given world position.
    pub fn pin(id: String, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            body: EntityBody::Pin(PIN_BODY.to_string()),
            links: None,
        }
    }

    /// Create a text entity at the given world position.
    pub fn text(id: String, x: f64, y: f64, text: String) -> Self {
        Self {
            id,
            x,
            y,
            body: EntityBody::Text(text),
            links: None,
        }
    }

    /// Create an image entity at the given world position.
    pub fn image(id: String, x: f64, y: f64, reference: String) -> Self {
        Self {
            id,
            x,
            y,
            body: EntityBody::Image(reference),
            links: None,
        }
    }

    /// Create a line entity. The entity sits at the line's `from` point.
    pub fn line(id: String, from: WorldPoint, to: WorldPoint) -> Self {
        Self {
            id,
            x: from.x,
            y: from.y,
            body: EntityBody::Line { from, to },
            links: None,
        }
    }

    /// The entity's kind discriminator.
    pub fn kind(&self) -> &'static str {
        match self.body {
            EntityBody::Pin(_) => "pin",
            EntityBody::Text(_) => "text",
            EntityBody::Image(_) => "image",
            EntityBody::Line { .. } => "line",
        }
    }
}
