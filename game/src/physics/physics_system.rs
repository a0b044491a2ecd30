// game/src/physics/physics_system.rs
use glam::Vec2;
use log::trace;
use engine_core::tiles::{tile_rules::TileRules, tilemap::TileMap};
use crate::{
    constants::*,
    entity::PhysicsEntity,
    physics::collision::{resolve_axis, Axis},
};

/// Moves an entity by `movement + velocity`, resolving X fully before Y.
///
/// Resolving the axes in this order keeps fast diagonal movement from
/// slipping into corners, at the cost of axis-dependent results at high
/// speed. Gravity and jump heights are tuned against it.
pub fn update_physics(
    entity: &mut PhysicsEntity,
    tilemap: &TileMap,
    rules: &TileRules,
    movement: Vec2,
) {
    entity.collisions.reset();

    let frame_movement = movement + entity.velocity;

    // Sweep X axis
    entity.pos.x += frame_movement.x;
    let obstacles = tilemap.physics_rects_around(entity.pos, rules);
    if let Some(x) = resolve_axis(
        entity.rect(),
        frame_movement.x,
        Axis::X,
        &obstacles,
        &mut entity.collisions,
    ) {
        entity.pos.x = x as f32;
    }

    // Sweep Y axis, from the corrected X
    entity.pos.y += frame_movement.y;
    let obstacles = tilemap.physics_rects_around(entity.pos, rules);
    if let Some(y) = resolve_axis(
        entity.rect(),
        frame_movement.y,
        Axis::Y,
        &obstacles,
        &mut entity.collisions,
    ) {
        entity.pos.y = y as f32;
    }

    if movement.x > 0.0 {
        entity.flip = false;
    }
    if movement.x < 0.0 {
        entity.flip = true;
    }
    entity.last_movement = movement;

    entity.velocity.y = (entity.velocity.y + GRAVITY).min(TERMINAL_VELOCITY);
    if entity.collisions.down || entity.collisions.up {
        entity.velocity.y = 0.0;
    }

    trace!(
        "{} at {:?}, velocity {:?}, collisions {:?}",
        entity.entity_type,
        entity.pos,
        entity.velocity,
        entity.collisions
    );
}
