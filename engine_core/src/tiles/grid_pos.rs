// engine_core/src/tiles/grid_pos.rs
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use glam::{IVec2, Vec2};
use thiserror::Error;

/// Integer cell coordinate on the tile grid.
///
/// The textual form `"{x};{y}"` is the key used in saved maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos(pub IVec2);

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        GridPos(IVec2::new(x, y))
    }

    pub fn x(&self) -> i32 { self.0.x }
    pub fn y(&self) -> i32 { self.0.y }

    /// Convert from world coordinates to the cell that contains them.
    /// Uses floor so negative coordinates land in the cell to their left/above.
    pub fn from_world(world_pos: Vec2, tile_size: i32) -> Self {
        let size = tile_size as f32;
        GridPos::new(
            (world_pos.x / size).floor() as i32,
            (world_pos.y / size).floor() as i32,
        )
    }

    /// Top-left pixel of this cell. Clamps at the `i32` bounds.
    pub fn to_world(&self, tile_size: i32) -> IVec2 {
        self.0.saturating_mul(IVec2::splat(tile_size))
    }

    /// The cell displaced by `offset`. Clamps at the `i32` bounds.
    pub fn offset(&self, offset: IVec2) -> Self {
        GridPos(self.0.saturating_add(offset))
    }
}

impl From<IVec2> for GridPos {
    fn from(value: IVec2) -> Self {
        GridPos(value)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.0.x, self.0.y)
    }
}

/// Failure to read a `"{x};{y}"` cell key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseGridPosError {
    #[error("cell key '{0}' has no ';' separator")]
    MissingSeparator(String),
    #[error("cell key '{key}' has an invalid coordinate: {source}")]
    InvalidCoordinate {
        key: String,
        #[source]
        source: ParseIntError,
    },
    #[error("cell key '{0}' is not in canonical form")]
    NonCanonical(String),
}

impl FromStr for GridPos {
    type Err = ParseGridPosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(';')
            .ok_or_else(|| ParseGridPosError::MissingSeparator(s.to_string()))?;

        let parse = |part: &str| {
            part.parse::<i32>().map_err(|source| ParseGridPosError::InvalidCoordinate {
                key: s.to_string(),
                source,
            })
        };

        let pos = GridPos::new(parse(x)?, parse(y)?);
        // "+1", "01" and "-0" parse, but would alias another key.
        if pos.to_string() != s {
            return Err(ParseGridPosError::NonCanonical(s.to_string()));
        }
        Ok(pos)
    }
}
