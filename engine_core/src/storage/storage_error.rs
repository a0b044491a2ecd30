// engine_core/src/storage/storage_error.rs
use std::io;
use std::path::PathBuf;
use glam::IVec2;
use thiserror::Error;
use crate::tiles::grid_pos::GridPos;

/// Failures while reading or writing maps and rule files.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be read or written.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The map document is not valid JSON or is missing a field.
    #[error("malformed map document: {0}")]
    Json(#[from] serde_json::Error),

    /// The rules file is not valid RON.
    #[error("malformed rules file: {0}")]
    RonRead(#[from] ron::error::SpannedError),

    #[error("could not serialise rules: {0}")]
    RonWrite(#[from] ron::Error),

    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(i32),

    /// A grid entry is stored under a key other than its own position.
    #[error("tile under key '{key}' claims position {pos}")]
    KeyMismatch { key: GridPos, pos: GridPos },

    /// A tile sits so far out that its pixel box does not fit in `i32`.
    #[error("tile at {pos} is out of range for tile size {tile_size}")]
    CoordinateOutOfRange { pos: IVec2, tile_size: i32 },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}
