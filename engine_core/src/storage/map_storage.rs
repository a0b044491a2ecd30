// engine_core/src/storage/map_storage.rs
use std::fs;
use std::path::{Path, PathBuf};
use glam::IVec2;
use log::info;
use crate::constants::MAPS_FOLDER;
use crate::storage::storage_error::StorageError;
use crate::tiles::{grid_pos::GridPos, tilemap::TileMap};

/// Path of a numbered level map inside a data folder.
pub fn map_path(data_dir: &Path, map_id: usize) -> PathBuf {
    data_dir.join(MAPS_FOLDER).join(format!("{map_id}.json"))
}

/// Serialise a map to its JSON document.
pub fn tilemap_to_string(map: &TileMap) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(map)?)
}

/// Parse and validate a JSON map document.
pub fn tilemap_from_str(json: &str) -> Result<TileMap, StorageError> {
    let map: TileMap = serde_json::from_str(json)?;
    validate(&map)?;
    Ok(map)
}

/// Read a map from disk.
pub fn load_tilemap(path: &Path) -> Result<TileMap, StorageError> {
    let json = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    let map = tilemap_from_str(&json)?;

    info!(
        "Loaded map '{}': {} grid tile(s), {} off-grid tile(s), tile size {}.",
        path.display(),
        map.tile_count(),
        map.offgrid_tiles().len(),
        map.tile_size()
    );
    Ok(map)
}

/// Write a map to disk, replacing any existing file.
pub fn save_tilemap(map: &TileMap, path: &Path) -> Result<(), StorageError> {
    let json = tilemap_to_string(map)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }
    fs::write(path, json).map_err(|e| StorageError::io(path, e))?;

    info!(
        "Saved map '{}': {} grid tile(s), {} off-grid tile(s).",
        path.display(),
        map.tile_count(),
        map.offgrid_tiles().len()
    );
    Ok(())
}

fn validate(map: &TileMap) -> Result<(), StorageError> {
    if map.tile_size <= 0 {
        return Err(StorageError::InvalidTileSize(map.tile_size));
    }

    for (key, tile) in &map.tiles {
        if key.0 != tile.pos {
            return Err(StorageError::KeyMismatch {
                key: *key,
                pos: GridPos(tile.pos),
            });
        }
        if !cell_box_fits(key.0, map.tile_size) {
            return Err(StorageError::CoordinateOutOfRange {
                pos: key.0,
                tile_size: map.tile_size,
            });
        }
    }

    for tile in &map.offgrid_tiles {
        if !pixel_box_fits(tile.pos, map.tile_size) {
            return Err(StorageError::CoordinateOutOfRange {
                pos: tile.pos,
                tile_size: map.tile_size,
            });
        }
    }
    Ok(())
}

/// `cell * tile_size` and `(cell + 1) * tile_size` both fit in `i32`.
fn cell_box_fits(cell: IVec2, tile_size: i32) -> bool {
    cell.to_array().into_iter().all(|c| {
        c.checked_mul(tile_size).is_some()
            && c.checked_add(1).and_then(|next| next.checked_mul(tile_size)).is_some()
    })
}

/// `pixel + tile_size` fits in `i32`.
fn pixel_box_fits(pixel: IVec2, tile_size: i32) -> bool {
    pixel
        .to_array()
        .into_iter()
        .all(|p| p.checked_add(tile_size).is_some())
}

impl TileMap {
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        save_tilemap(self, path)
    }

    /// Replace this map with the one stored at `path`.
    /// On error the map is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<(), StorageError> {
        *self = load_tilemap(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use crate::tiles::tile::Tile;

    #[test]
    fn document_has_the_three_top_level_fields() {
        let mut map = TileMap::new(16);
        map.set_tile(GridPos::new(3, 10), Tile::new("grass", 1, IVec2::ZERO));
        map.add_offgrid_tile(Tile::new("decor", 2, IVec2::new(40, 55)));

        let value: serde_json::Value =
            serde_json::from_str(&tilemap_to_string(&map).unwrap()).unwrap();

        assert_eq!(value["tile_size"], 16);
        assert_eq!(value["tilemap"]["3;10"]["type"], "grass");
        assert_eq!(value["tilemap"]["3;10"]["variant"], 1);
        assert_eq!(value["tilemap"]["3;10"]["pos"], serde_json::json!([3, 10]));
        assert_eq!(value["offgrid_tiles"][0]["pos"], serde_json::json!([40, 55]));
        assert_eq!(value.as_object().map(|o| o.len()), Some(3));
    }

    #[test]
    fn reads_hand_written_document() {
        let json = r#"{
            "tilemap": {"-1;2": {"type": "stone", "variant": 0, "pos": [-1, 2]}},
            "tile_size": 8,
            "offgrid_tiles": [{"type": "large_decor", "variant": 2, "pos": [7, 9]}]
        }"#;

        let map = tilemap_from_str(json).unwrap();
        assert_eq!(map.tile_size(), 8);
        assert_eq!(
            map.get_tile(GridPos::new(-1, 2)).map(|t| t.tile_type.as_str()),
            Some("stone")
        );
        assert_eq!(map.offgrid_tiles()[0].pos, IVec2::new(7, 9));
    }

    #[test]
    fn missing_field_is_a_json_error() {
        let json = r#"{"tilemap": {}, "tile_size": 16}"#;
        assert!(matches!(tilemap_from_str(json), Err(StorageError::Json(_))));
    }

    #[test]
    fn negative_variant_is_rejected() {
        let json = r#"{
            "tilemap": {"0;0": {"type": "stone", "variant": -1, "pos": [0, 0]}},
            "tile_size": 16,
            "offgrid_tiles": []
        }"#;
        assert!(matches!(tilemap_from_str(json), Err(StorageError::Json(_))));
    }

    #[test]
    fn zero_tile_size_is_rejected() {
        let json = r#"{"tilemap": {}, "tile_size": 0, "offgrid_tiles": []}"#;
        assert!(matches!(
            tilemap_from_str(json),
            Err(StorageError::InvalidTileSize(0))
        ));
    }

    #[test]
    fn key_must_match_tile_position() {
        let json = r#"{
            "tilemap": {"1;1": {"type": "stone", "variant": 0, "pos": [2, 1]}},
            "tile_size": 16,
            "offgrid_tiles": []
        }"#;
        assert!(matches!(
            tilemap_from_str(json),
            Err(StorageError::KeyMismatch { .. })
        ));
    }

    #[test]
    fn far_grid_cell_is_rejected() {
        let json = r#"{
            "tilemap": {"200000000;0": {"type": "large_decor", "variant": 2, "pos": [200000000, 0]}},
            "tile_size": 16,
            "offgrid_tiles": []
        }"#;
        assert!(matches!(
            tilemap_from_str(json),
            Err(StorageError::CoordinateOutOfRange { tile_size: 16, .. })
        ));
    }

    #[test]
    fn far_offgrid_tile_is_rejected() {
        let json = r#"{
            "tilemap": {},
            "tile_size": 16,
            "offgrid_tiles": [{"type": "decor", "variant": 0, "pos": [2147483640, 0]}]
        }"#;
        assert!(matches!(
            tilemap_from_str(json),
            Err(StorageError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn cells_near_the_limit_still_load() {
        // 134217726 * 16 + 16 == i32::MAX - 15
        let json = r#"{
            "tilemap": {"134217726;-134217728": {"type": "stone", "variant": 0, "pos": [134217726, -134217728]}},
            "tile_size": 16,
            "offgrid_tiles": []
        }"#;
        let map = tilemap_from_str(json).unwrap();
        assert_eq!(map.tile_count(), 1);
    }

    #[test]
    fn aliased_cell_keys_are_rejected() {
        let json = r#"{
            "tilemap": {"1; 2": {"type": "stone", "variant": 0, "pos": [1, 2]}},
            "tile_size": 16,
            "offgrid_tiles": []
        }"#;
        assert!(matches!(tilemap_from_str(json), Err(StorageError::Json(_))));
    }

    #[test]
    fn map_path_uses_maps_folder() {
        assert_eq!(
            map_path(Path::new("data"), 2),
            Path::new("data").join("maps").join("2.json")
        );
    }
}
