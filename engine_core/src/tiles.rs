pub mod autotile;
pub mod extraction;
pub mod grid_pos;
pub mod rect;
pub mod tile;
pub mod tile_rules;
pub mod tilemap;
