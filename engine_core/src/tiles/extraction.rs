// engine_core/src/tiles/extraction.rs
use log::debug;
use crate::tiles::{grid_pos::GridPos, tile::Tile, tilemap::TileMap};

impl TileMap {
    /// Collect copies of every tile whose (type, variant) is in `id_pairs`.
    ///
    /// Off-grid matches come first in list order, then grid matches in no
    /// particular order. Grid matches are returned with pixel positions so
    /// every result is in world space. Unless `keep` is set, matched tiles
    /// are removed from the map.
    pub fn extract(&mut self, id_pairs: &[(&str, usize)], keep: bool) -> Vec<Tile> {
        let mut matches: Vec<Tile> = self
            .offgrid_tiles
            .iter()
            .filter(|tile| tile.matches(id_pairs))
            .cloned()
            .collect();

        if !keep {
            self.offgrid_tiles.retain(|tile| !tile.matches(id_pairs));
        }

        let matched_cells: Vec<GridPos> = self
            .tiles
            .iter()
            .filter(|(_, tile)| tile.matches(id_pairs))
            .map(|(pos, _)| *pos)
            .collect();

        for pos in &matched_cells {
            let tile = if keep {
                self.tiles.get(pos).cloned()
            } else {
                self.tiles.remove(pos)
            };

            if let Some(mut tile) = tile {
                tile.pos = pos.to_world(self.tile_size);
                matches.push(tile);
            }
        }

        debug!(
            "Extracted {} tile(s) matching {:?} (keep: {keep}).",
            matches.len(),
            id_pairs
        );
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn decorated_map() -> TileMap {
        let mut map = TileMap::new(16);
        map.add_offgrid_tile(Tile::new("large_decor", 2, IVec2::new(100, 37)));
        map.add_offgrid_tile(Tile::new("decor", 0, IVec2::new(5, 5)));
        map.add_offgrid_tile(Tile::new("large_decor", 2, IVec2::new(12, 80)));
        map.set_tile(GridPos::new(3, 4), Tile::new("large_decor", 2, IVec2::ZERO));
        map.set_tile(GridPos::new(4, 4), Tile::new("grass", 2, IVec2::ZERO));
        map
    }

    #[test]
    fn offgrid_matches_come_first_and_grid_matches_are_in_pixels() {
        let mut map = decorated_map();
        let found = map.extract(&[("large_decor", 2)], true);

        let positions: Vec<IVec2> = found.iter().map(|t| t.pos).collect();
        assert_eq!(
            positions,
            vec![IVec2::new(100, 37), IVec2::new(12, 80), IVec2::new(48, 64)]
        );
        // Kept tiles stay where they were, in cell coordinates.
        assert_eq!(
            map.get_tile(GridPos::new(3, 4)).map(|t| t.pos),
            Some(IVec2::new(3, 4))
        );
        assert_eq!(map.offgrid_tiles().len(), 3);
    }

    #[test]
    fn removal_empties_both_collections() {
        let mut map = decorated_map();

        assert_eq!(map.extract(&[("large_decor", 2)], false).len(), 3);
        assert!(map.extract(&[("large_decor", 2)], false).is_empty());

        assert_eq!(map.offgrid_tiles().len(), 1);
        assert_eq!(map.tile_count(), 1);
        assert!(map.get_tile(GridPos::new(4, 4)).is_some());
    }

    #[test]
    fn variant_must_match_too() {
        let mut map = decorated_map();
        assert!(map.extract(&[("large_decor", 1), ("grass", 0)], false).is_empty());
        assert_eq!(map.tile_count(), 2);
    }

    #[test]
    fn far_grid_match_clamps_to_i32_bounds() {
        let mut map = TileMap::new(16);
        map.set_tile(GridPos::new(200_000_000, 0), Tile::new("large_decor", 2, IVec2::ZERO));

        let found = map.extract(&[("large_decor", 2)], true);
        assert_eq!(found[0].pos, IVec2::new(i32::MAX, 0));
    }
}
