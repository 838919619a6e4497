//! GPU-ready vertex and instance records

use bytemuck::{Pod, Zeroable};

use crate::sim::{Entity, EntityKind};

/// One sprite to draw: where, how big, and which texture slot
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    /// Texture slot, see `kind_slot`
    pub kind: u32,
}

impl SpriteInstance {
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            position: entity.position.to_array(),
            scale: entity.scale().to_array(),
            kind: kind_slot(entity.kind),
        }
    }

    pub fn entity_kind(&self) -> Option<EntityKind> {
        slot_kind(self.kind)
    }
}

/// Texture slot for an entity kind
pub const fn kind_slot(kind: EntityKind) -> u32 {
    match kind {
        EntityKind::Player => 0,
        EntityKind::Goal => 1,
        EntityKind::Hazard => 2,
        EntityKind::Platform => 3,
    }
}

pub const fn slot_kind(slot: u32) -> Option<EntityKind> {
    match slot {
        0 => Some(EntityKind::Player),
        1 => Some(EntityKind::Goal),
        2 => Some(EntityKind::Hazard),
        3 => Some(EntityKind::Platform),
        _ => None,
    }
}

/// Textured 2D vertex for bitmap font quads
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GlyphVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl GlyphVertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
        }
    }
}
