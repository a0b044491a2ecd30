// engine_core/src/constants.rs
use glam::IVec2;

/// Default tile size in pixels.
pub const DEFAULT_TILE_SIZE: i32 = 16;

/// Moore neighbourhood probed around a cell, in query order.
pub const NEIGHBOR_OFFSETS: [IVec2; 9] = [
    IVec2::new(-1, 0),
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(1, 0),
    IVec2::new(0, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// Name of the tile rules .ron file.
pub const TILE_RULES_RON: &str = "tile_rules.ron";

/// Name of the folder that holds the map .json files.
pub const MAPS_FOLDER: &str = "maps";

/// Basename of the rotating log files.
pub const LOG_BASENAME: &str = "engine_core";

/// Size at which a log file is rotated.
pub const LOG_ROTATE_BYTES: u64 = 5_000_000;

/// Number of rotated log files that are kept.
pub const LOG_KEEP_FILES: usize = 5;
