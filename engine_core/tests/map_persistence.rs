use std::fs;
use glam::IVec2;
use engine_core::storage::map_storage::{load_tilemap, map_path, save_tilemap};
use engine_core::storage::storage_error::StorageError;
use engine_core::tiles::{grid_pos::GridPos, tile::Tile, tile_rules::TileRules, tilemap::TileMap};

fn level() -> TileMap {
    let mut map = TileMap::new(16);
    for i in 0..10 {
        map.set_tile(GridPos::new(3 + i, 10), Tile::new("grass", 1, IVec2::ZERO));
        map.set_tile(GridPos::new(10, 5 + i), Tile::new("stone", 1, IVec2::ZERO));
    }
    map.set_tile(GridPos::new(-4, -2), Tile::new("decor", 3, IVec2::ZERO));
    map.add_offgrid_tile(Tile::new("large_decor", 2, IVec2::new(87, 131)));
    map.add_offgrid_tile(Tile::new("decor", 0, IVec2::new(12, 140)));
    map.add_offgrid_tile(Tile::new("large_decor", 2, IVec2::new(3, 3)));
    map
}

#[test]
fn save_then_load_reproduces_the_map() {
    let dir = tempfile::tempdir().unwrap();
    let path = map_path(dir.path(), 0);
    let mut original = level();
    original.autotile(&TileRules::default());

    save_tilemap(&original, &path).unwrap();
    let restored = load_tilemap(&path).unwrap();

    assert_eq!(restored, original);
    assert_eq!(restored.tile_size(), 16);
    assert_eq!(restored.offgrid_tiles(), original.offgrid_tiles());
}

#[test]
fn save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("level.json");

    level().save(&path).unwrap();
    TileMap::new(8).save(&path).unwrap();

    let restored = load_tilemap(&path).unwrap();
    assert_eq!(restored.tile_size(), 8);
    assert_eq!(restored.tile_count(), 0);
}

#[test]
fn load_replaces_the_whole_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("level.json");
    level().save(&path).unwrap();

    let mut map = TileMap::new(32);
    map.set_tile(GridPos::new(99, 99), Tile::new("stone", 0, IVec2::ZERO));
    map.load(&path).unwrap();

    assert_eq!(map, level());
    assert!(map.get_tile(GridPos::new(99, 99)).is_none());
}

#[test]
fn failed_load_leaves_the_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut map = level();

    let missing = dir.path().join("missing.json");
    assert!(matches!(map.load(&missing), Err(StorageError::Io { .. })));
    assert_eq!(map, level());

    let corrupt = dir.path().join("corrupt.json");
    fs::write(&corrupt, r#"{"tilemap": {"0;0": {"type": "grass"}}, "tile_size": 16"#).unwrap();
    assert!(matches!(map.load(&corrupt), Err(StorageError::Json(_))));
    assert_eq!(map, level());
}

#[test]
fn extracted_tiles_stay_gone_after_a_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("level.json");
    let mut map = level();
    map.set_tile(GridPos::new(2, 2), Tile::new("large_decor", 2, IVec2::ZERO));

    let trees = map.extract(&[("large_decor", 2)], false);
    assert_eq!(trees.len(), 3);
    assert_eq!(trees[2].pos, IVec2::new(32, 32));

    map.save(&path).unwrap();
    let mut restored = load_tilemap(&path).unwrap();
    assert!(restored.extract(&[("large_decor", 2)], false).is_empty());
}
