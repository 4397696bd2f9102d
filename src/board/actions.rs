//! Action set for the corkboard machine.
//!
//! Every action is a pure reducer `(context, event) -> context'` and is
//! total: an action handed an event without the payload it needs, or a
//! context whose selection holds ids that no longer resolve, returns an
//! unchanged (or partially applied) context instead of failing. Stale
//! selection ids are skipped; links are only ever written to entities
//! that exist.

use crate::board::context::Context;
use crate::board::entity::{Entity, WorldPoint};
use crate::board::event::InputEvent;
use crate::core::Action;

/// Track the pointer: screen position, frame delta, hover target, and
/// the world-space position through the inverse camera transform.
///
/// After this action, `world == (mouse - pan) / scale` holds exactly for
/// the freshly written mouse position.
pub fn update_mouse_coordinates() -> Action<Context, InputEvent> {
    Action::new("updateMouseCoordinates", |context: &Context, event: &InputEvent| {
        let Some(pointer) = event.pointer() else {
            return context.clone();
        };
        let mut next = context.clone();
        next.delta_x = pointer.client_x - context.mouse_x;
        next.delta_y = pointer.client_y - context.mouse_y;
        next.mouse_x = pointer.client_x;
        next.mouse_y = pointer.client_y;
        next.hover_id = pointer.entity.clone().unwrap_or_default();
        next.world_x = (next.mouse_x - next.pan_x) / next.scale;
        next.world_y = (next.mouse_y - next.pan_y) / next.scale;
        next
    })
}

/// Create a pin entity under the pointer's current world position.
pub fn place_pin_under_mouse() -> Action<Context, InputEvent> {
    Action::new("placePinUnderMouse", |context: &Context, _: &InputEvent| {
        let mut next = context.clone();
        let id = next.fresh_entity_id();
        next.id_serial += 1;
        next.entities
            .insert(id.clone(), Entity::pin(id, next.world_x, next.world_y));
        next
    })
}

/// Create a line entity from the recorded click anchor to the pointer's
/// current world position.
///
/// No transition currently invokes this; it is defined for the planned
/// drag-to-link gesture and exercised only directly.
pub fn place_line() -> Action<Context, InputEvent> {
    Action::new("placeLine", |context: &Context, _: &InputEvent| {
        let mut next = context.clone();
        let id = next.fresh_entity_id();
        next.id_serial += 1;
        let from = WorldPoint {
            x: next.clicked_x,
            y: next.clicked_y,
        };
        let to = WorldPoint {
            x: next.world_x,
            y: next.world_y,
        };
        next.entities.insert(id.clone(), Entity::line(id, from, to));
        next
    })
}

/// Empty the selection.
pub fn reset_selection() -> Action<Context, InputEvent> {
    Action::new("resetSelection", |context: &Context, _: &InputEvent| {
        let mut next = context.clone();
        next.selected_ids.clear();
        next
    })
}

/// Pan the camera by the pointer's frame delta.
pub fn pan_mouse() -> Action<Context, InputEvent> {
    Action::new("panMouse", |context: &Context, _: &InputEvent| {
        let mut next = context.clone();
        next.pan_x += context.delta_x;
        next.pan_y += context.delta_y;
        next
    })
}

/// Move every selected entity by the pointer's frame delta. Ids that no
/// longer resolve are skipped; each moved entity is a fresh value, not an
/// aliased mutation.
pub fn move_picked() -> Action<Context, InputEvent> {
    Action::new("movePicked", |context: &Context, _: &InputEvent| {
        let mut next = context.clone();
        for id in &context.selected_ids {
            if let Some(entity) = next.entities.get(id) {
                let mut moved = entity.clone();
                moved.x += context.delta_x;
                moved.y += context.delta_y;
                next.entities.insert(id.clone(), moved);
            }
        }
        next
    })
}

/// Point the first selected entity's links at the hovered entity,
/// replacing any links it had. A no-op when either endpoint is missing,
/// so a dangling reference is never written.
pub fn link_entities() -> Action<Context, InputEvent> {
    Action::new("linkEntities", |context: &Context, _: &InputEvent| {
        let Some(first) = context.selected_ids.first() else {
            return context.clone();
        };
        if !context.entities.contains_key(&context.hover_id) {
            return context.clone();
        }
        let mut next = context.clone();
        if let Some(entity) = next.entities.get_mut(first) {
            entity.links = Some(vec![context.hover_id.clone()]);
        }
        next
    })
}

/// Set the camera scale from a zoom event, clamped into the configured
/// range.
pub fn set_zoom() -> Action<Context, InputEvent> {
    Action::new("setZoom", |context: &Context, event: &InputEvent| {
        let InputEvent::Zoom { scale } = event else {
            return context.clone();
        };
        let mut next = context.clone();
        next.scale = next.scale_range.clamp(*scale);
        next
    })
}

/// Append the hovered id to the selection. Deliberately does not
/// deduplicate - repeated shift-clicks accumulate, matching the board's
/// historical behavior.
pub fn append_hover_to_selection() -> Action<Context, InputEvent> {
    Action::new("appendHoverToSelection", |context: &Context, _: &InputEvent| {
        let mut next = context.clone();
        next.selected_ids.push(context.hover_id.clone());
        next
    })
}

/// Replace the selection with the hovered id alone.
pub fn select_hovered() -> Action<Context, InputEvent> {
    Action::new("selectHovered", |context: &Context, _: &InputEvent| {
        let mut next = context.clone();
        next.selected_ids = vec![context.hover_id.clone()];
        next
    })
}
