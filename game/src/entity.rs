// game/src/entity.rs
use glam::{IVec2, Vec2};
use engine_core::tiles::{rect::Rect, tile_rules::TileRules, tilemap::TileMap};
use crate::physics::{collision::Collisions, physics_system::update_physics};

/// A moving body that collides with the solid tiles of a map.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsEntity {
    pub entity_type: String,
    /// Top-left corner in pixels.
    pub pos: Vec2,
    /// Width and height in pixels.
    pub size: IVec2,
    pub velocity: Vec2,
    pub collisions: Collisions,
    /// Facing left.
    pub flip: bool,
    /// Movement input of the last step.
    pub last_movement: Vec2,
}

impl PhysicsEntity {
    pub fn new(entity_type: impl Into<String>, pos: Vec2, size: IVec2) -> Self {
        Self {
            entity_type: entity_type.into(),
            pos,
            size,
            velocity: Vec2::ZERO,
            collisions: Collisions::default(),
            flip: false,
            last_movement: Vec2::ZERO,
        }
    }

    /// Integer collision box. The position is truncated toward zero.
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x as i32, self.pos.y as i32, self.size.x, self.size.y)
    }

    /// Advance one physics tick with the given movement input.
    pub fn update(&mut self, tilemap: &TileMap, rules: &TileRules, movement: Vec2) {
        update_physics(self, tilemap, rules, movement);
    }
}
