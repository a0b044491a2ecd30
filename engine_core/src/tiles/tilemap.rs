// engine_core/src/tiles/tilemap.rs
use std::collections::HashMap;
use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use crate::constants::{DEFAULT_TILE_SIZE, NEIGHBOR_OFFSETS};
use crate::tiles::{grid_pos::GridPos, rect::Rect, tile::Tile, tile_rules::TileRules};

/// Sparse tile grid plus the free-placed tiles that sit off the grid.
///
/// Field names are the top-level keys of the saved map document.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TileMap {
    /// At most one tile per cell. Each tile's `pos` equals its key.
    #[serde(rename = "tilemap")]
    #[serde_as(as = "HashMap<DisplayFromStr, _>")]
    pub(crate) tiles: HashMap<GridPos, Tile>,
    pub(crate) tile_size: i32,
    /// Pixel-positioned tiles, kept in placement order.
    pub(crate) offgrid_tiles: Vec<Tile>,
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE)
    }
}

impl TileMap {
    pub fn new(tile_size: i32) -> Self {
        Self {
            tiles: HashMap::new(),
            tile_size: tile_size.max(1),
            offgrid_tiles: Vec::new(),
        }
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Insert a tile at a grid coordinate, replacing whatever was there.
    pub fn set_tile(&mut self, pos: GridPos, mut tile: Tile) {
        tile.pos = pos.0;
        self.tiles.insert(pos, tile);
    }

    /// Retrieve a tile, returning `None` for empty cells.
    pub fn get_tile(&self, pos: GridPos) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    /// Remove the tile at a grid coordinate. Empty cells are a no-op.
    pub fn remove_tile(&mut self, pos: GridPos) -> Option<Tile> {
        self.tiles.remove(&pos)
    }

    /// Grid tiles in no particular order.
    pub fn tiles(&self) -> impl Iterator<Item = (&GridPos, &Tile)> {
        self.tiles.iter()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn offgrid_tiles(&self) -> &[Tile] {
        &self.offgrid_tiles
    }

    /// Append a pixel-positioned tile.
    pub fn add_offgrid_tile(&mut self, tile: Tile) {
        self.offgrid_tiles.push(tile);
    }

    /// Remove every off-grid tile whose (type, variant) is in `id_pairs`.
    /// Returns the removed tiles in list order.
    pub fn remove_offgrid_tiles(&mut self, id_pairs: &[(&str, usize)]) -> Vec<Tile> {
        let (removed, kept): (Vec<Tile>, Vec<Tile>) = std::mem::take(&mut self.offgrid_tiles)
            .into_iter()
            .partition(|tile| tile.matches(id_pairs));
        self.offgrid_tiles = kept;
        removed
    }

    pub fn pixel_to_grid(&self, pixel: f32) -> i32 {
        (pixel / self.tile_size as f32).floor() as i32
    }

    /// Tiles in the 3x3 block of cells around the cell containing `world_pos`.
    ///
    /// Order follows `NEIGHBOR_OFFSETS` and is stable between calls.
    pub fn tiles_around(&self, world_pos: Vec2) -> Vec<&Tile> {
        let cell = GridPos::from_world(world_pos, self.tile_size);
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|offset| self.get_tile(cell.offset(*offset)))
            .collect()
    }

    /// Boxes of the solid tiles returned by `tiles_around`, in the same order.
    pub fn physics_rects_around(&self, world_pos: Vec2, rules: &TileRules) -> Vec<Rect> {
        self.tiles_around(world_pos)
            .into_iter()
            .filter(|tile| rules.is_solid(&tile.tile_type))
            .map(|tile| self.cell_rect(GridPos(tile.pos)))
            .collect()
    }

    /// The solid tile in the cell containing `world_pos`, if any.
    pub fn solid_check(&self, world_pos: Vec2, rules: &TileRules) -> Option<&Tile> {
        self.get_tile(GridPos::from_world(world_pos, self.tile_size))
            .filter(|tile| rules.is_solid(&tile.tile_type))
    }

    /// Tiles a renderer would draw for a view whose top-left is at `offset`.
    ///
    /// All off-grid tiles come first in list order, then the grid tiles of every
    /// cell touched by the view, column by column.
    pub fn tiles_in_view(&self, offset: Vec2, view_size: IVec2) -> Vec<&Tile> {
        let first = GridPos::from_world(offset, self.tile_size);
        let last = GridPos::from_world(offset + view_size.as_vec2(), self.tile_size);

        let mut visible: Vec<&Tile> = self.offgrid_tiles.iter().collect();
        for x in first.x()..=last.x() {
            for y in first.y()..=last.y() {
                if let Some(tile) = self.get_tile(GridPos::new(x, y)) {
                    visible.push(tile);
                }
            }
        }
        visible
    }

    /// Pixel box covered by a cell.
    pub fn cell_rect(&self, pos: GridPos) -> Rect {
        let origin = pos.to_world(self.tile_size);
        Rect::new(origin.x, origin.y, self.tile_size, self.tile_size)
    }
}
