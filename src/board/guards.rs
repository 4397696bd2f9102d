//! Guard set for the corkboard machine.
//!
//! Three predicates decide which of the competing pointer-down rows in
//! `idle` fires, and whether a linking click hit something linkable.
//! All of them are total over any reachable context/event pair.

use crate::board::context::{Context, CORKBOARD_SURFACE};
use crate::board::event::InputEvent;
use crate::core::Guard;

/// Passes when the pointer hovers the bare board surface.
pub fn is_hovering_corkboard() -> Guard<Context, InputEvent> {
    Guard::new("isHoveringCorkboard", |context: &Context, _: &InputEvent| {
        context.hover_id == CORKBOARD_SURFACE
    })
}

/// Passes when the pointer hovers a draggable entity: anything that is
/// neither empty space nor the board surface.
pub fn is_hovering_draggable() -> Guard<Context, InputEvent> {
    Guard::new("isHoveringDraggable", |context: &Context, _: &InputEvent| {
        context.hovering_draggable()
    })
}

/// Passes when the event is a pointer-down with the shift modifier held.
pub fn is_shift_held() -> Guard<Context, InputEvent> {
    Guard::new("isShiftHeld", |_, event| {
        matches!(event, InputEvent::PointerDown(pointer) if pointer.shift_key)
    })
}
