// engine_core/src/tiles/tile.rs
use glam::IVec2;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, FromInto};

/// A placed tile.
///
/// `pos` is a cell coordinate for grid tiles and a pixel coordinate
/// for off-grid tiles.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Tile category, e.g. "grass" or "decor".
    #[serde(rename = "type")]
    pub tile_type: String,
    /// Index into the category's sprite list.
    pub variant: usize,
    #[serde_as(as = "FromInto<[i32; 2]>")]
    pub pos: IVec2,
}

impl Tile {
    pub fn new(tile_type: impl Into<String>, variant: usize, pos: IVec2) -> Self {
        Self {
            tile_type: tile_type.into(),
            variant,
            pos,
        }
    }

    /// Returns true if this tile's (type, variant) pair is in `id_pairs`.
    pub fn matches(&self, id_pairs: &[(&str, usize)]) -> bool {
        id_pairs
            .iter()
            .any(|(tile_type, variant)| self.tile_type == *tile_type && self.variant == *variant)
    }
}
