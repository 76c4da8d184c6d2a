//! Level data errors.
//!
//! Raised while building a collision raster, before any tick runs.

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelError {
    /// Width or height of the tile grid is zero.
    #[error("level has no tiles ({width}x{height})")]
    EmptyLevel { width: u32, height: u32 },

    /// Tile size must be a positive number of pixels.
    #[error("tile size must be positive")]
    ZeroTileSize,

    /// Tile buffer does not match `width * height`.
    #[error("expected {expected} tiles, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },

    /// Rows of a textual level have different lengths.
    #[error("row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Level bounds handed to the session have no area.
    #[error("level bounds are degenerate")]
    DegenerateBounds,
}

impl GameError for LevelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyLevel { .. } => "LEVEL_EMPTY",
            Self::ZeroTileSize => "LEVEL_ZERO_TILE_SIZE",
            Self::TileCountMismatch { .. } => "LEVEL_TILE_COUNT_MISMATCH",
            Self::RaggedRow { .. } => "LEVEL_RAGGED_ROW",
            Self::DegenerateBounds => "LEVEL_DEGENERATE_BOUNDS",
        }
    }
}
