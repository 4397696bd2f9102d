//! The shared interaction context: camera, pointer, entities, selection.

use crate::board::entity::Entity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Hover id reported when the pointer sits on the bare board surface.
pub const CORKBOARD_SURFACE: &str = "corkboard";

/// Inclusive bounds the camera scale is clamped to.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self { min: 0.5, max: 5.0 }
    }
}

impl ScaleRange {
    /// Clamp a requested scale into the range. Total: a non-finite
    /// request clamps to `min` rather than poisoning the camera.
    pub fn clamp(&self, scale: f64) -> f64 {
        if !(scale > self.min) {
            return self.min;
        }
        if scale > self.max {
            return self.max;
        }
        scale
    }
}

/// The canonical application state threaded through every action.
///
/// Pure data: the context has no behavior beyond derived accessors, and
/// no component other than the action set produces new values of it.
/// Mutation is always full-value replacement - actions clone, modify the
/// clone, and return it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Context {
    /// Pointer position in screen coordinates
    pub mouse_x: f64,
    pub mouse_y: f64,
    /// Frame-to-frame screen delta of the pointer
    pub delta_x: f64,
    pub delta_y: f64,
    /// Pointer position mapped through the inverse camera transform
    pub world_x: f64,
    pub world_y: f64,
    /// Anchor of an in-progress line placement, in world coordinates
    pub clicked_x: f64,
    pub clicked_y: f64,
    /// Id of the entity or surface under the pointer; empty means nothing
    pub hover_id: String,
    /// Camera translation
    pub pan_x: f64,
    pub pan_y: f64,
    /// Camera scale, always inside `scale_range`
    pub scale: f64,
    pub scale_range: ScaleRange,
    /// All entities on the board, by id
    pub entities: HashMap<String, Entity>,
    /// Ordered selection; the machine itself does not deduplicate
    pub selected_ids: Vec<String>,
    pub(crate) id_namespace: Uuid,
    pub(crate) id_serial: u64,
}

/// Caller-supplied seed for machine initialization.
///
/// Pre-populates the entity map and the camera; everything else starts
/// at its documented default. The id namespace exists so replays can be
/// made bit-identical by fixing it; `Default` draws a random one.
#[derive(Clone, Debug)]
pub struct Seed {
    pub entities: HashMap<String, Entity>,
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
    pub scale_range: ScaleRange,
    pub id_namespace: Uuid,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            entities: HashMap::new(),
            pan_x: 0.0,
            pan_y: 0.0,
            scale: 1.0,
            scale_range: ScaleRange::default(),
            id_namespace: Uuid::new_v4(),
        }
    }
}

impl Context {
    /// Create the initial context from a seed. The seeded scale is
    /// clamped like any other scale write.
    pub fn from_seed(seed: Seed) -> Self {
        let scale = seed.scale_range.clamp(seed.scale);
        Self {
            mouse_x: 0.0,
            mouse_y: 0.0,
            delta_x: 0.0,
            delta_y: 0.0,
            world_x: 0.0,
            world_y: 0.0,
            clicked_x: 0.0,
            clicked_y: 0.0,
            hover_id: String::new(),
            pan_x: seed.pan_x,
            pan_y: seed.pan_y,
            scale,
            scale_range: seed.scale_range,
            entities: seed.entities,
            selected_ids: Vec::new(),
            id_namespace: seed.id_namespace,
            id_serial: 0,
        }
    }

    /// Derive the next entity id from the context's id source.
    ///
    /// Deterministic: the same context always yields the same id, which
    /// keeps entity-creating actions pure and replayable. Actions that
    /// consume an id advance `id_serial` in the context they return.
    pub fn fresh_entity_id(&self) -> String {
        Uuid::new_v5(&self.id_namespace, &self.id_serial.to_be_bytes()).to_string()
    }

    /// Whether the pointer currently hovers a draggable entity (anything
    /// except empty space and the board surface).
    pub fn hovering_draggable(&self) -> bool {
        !self.hover_id.is_empty() && self.hover_id != CORKBOARD_SURFACE
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_seed(Seed::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::entity::Entity;

    #[test]
    fn default_context_matches_documented_defaults() {
        let context = Context::default();

        assert_eq!(context.mouse_x, 0.0);
        assert_eq!(context.hover_id, "");
        assert_eq!(context.pan_x, 0.0);
        assert_eq!(context.scale, 1.0);
        assert!(context.entities.is_empty());
        assert!(context.selected_ids.is_empty());
    }

    #[test]
    fn seed_prepopulates_entities_and_camera() {
        let mut seed = Seed::default();
        seed.entities
            .insert("a".to_string(), Entity::pin("a".to_string(), 1.0, 2.0));
        seed.pan_x = 10.0;
        seed.pan_y = -4.0;
        seed.scale = 2.0;

        let context = Context::from_seed(seed);

        assert_eq!(context.entities.len(), 1);
        assert_eq!(context.pan_x, 10.0);
        assert_eq!(context.pan_y, -4.0);
        assert_eq!(context.scale, 2.0);
    }

    #[test]
    fn seeded_scale_is_clamped() {
        let seed = Seed {
            scale: 100.0,
            ..Seed::default()
        };
        assert_eq!(Context::from_seed(seed).scale, 5.0);

        let seed = Seed {
            scale: 0.0,
            ..Seed::default()
        };
        assert_eq!(Context::from_seed(seed).scale, 0.5);
    }

    #[test]
    fn scale_range_clamps_to_bounds() {
        let range = ScaleRange::default();

        assert_eq!(range.clamp(1.0), 1.0);
        assert_eq!(range.clamp(0.1), 0.5);
        assert_eq!(range.clamp(50.0), 5.0);
        assert_eq!(range.clamp(f64::NAN), 0.5);
        assert_eq!(range.clamp(f64::INFINITY), 5.0);
    }

    #[test]
    fn fresh_entity_id_is_deterministic_per_context() {
        let seed = Seed {
            id_namespace: Uuid::nil(),
            ..Seed::default()
        };
        let context = Context::from_seed(seed.clone());
        let same = Context::from_seed(seed);

        assert_eq!(context.fresh_entity_id(), same.fresh_entity_id());
    }

    #[test]
    fn fresh_entity_id_changes_with_serial() {
        let mut context = Context::default();
        let first = context.fresh_entity_id();
        context.id_serial += 1;
        let second = context.fresh_entity_id();

        assert_ne!(first, second);
    }

    #[test]
    fn hovering_draggable_rejects_surface_and_nothing() {
        let mut context = Context::default();
        assert!(!context.hovering_draggable());

        context.hover_id = CORKBOARD_SURFACE.to_string();
        assert!(!context.hovering_draggable());

        context.hover_id = "some-entity".to_string();
        assert!(context.hovering_draggable());
    }
}
