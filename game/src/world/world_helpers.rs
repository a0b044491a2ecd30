// game/src/world/world_helpers.rs
use glam::Vec2;
use log::warn;
use engine_core::tiles::{rect::Rect, tilemap::TileMap};
use crate::constants::{ENEMY_SPAWNER, LEAF_TREE, PLAYER_SPAWNER};

/// Where to place the entities of a freshly loaded map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnPoints {
    pub player: Option<Vec2>,
    pub enemies: Vec<Vec2>,
}

/// Pull the spawner tiles out of a map and return their world positions.
///
/// The spawners are removed from the map. If several player spawners exist
/// the last one found wins.
pub fn spawn_points(tilemap: &mut TileMap) -> SpawnPoints {
    let mut points = SpawnPoints::default();

    for spawner in tilemap.extract(&[PLAYER_SPAWNER, ENEMY_SPAWNER], false) {
        let pos = spawner.pos.as_vec2();
        if spawner.variant == PLAYER_SPAWNER.1 {
            points.player = Some(pos);
        } else {
            points.enemies.push(pos);
        }
    }

    if points.player.is_none() {
        warn!("Map has no player spawner.");
    }
    points
}

/// Areas under the map's trees where leaves are emitted.
pub fn leaf_emitters(tilemap: &mut TileMap) -> Vec<Rect> {
    tilemap
        .extract(&[LEAF_TREE], true)
        .into_iter()
        .map(|tree| {
            Rect::new(
                tree.pos.x.saturating_add(4),
                tree.pos.y.saturating_add(4),
                23,
                13,
            )
        })
        .collect()
}
