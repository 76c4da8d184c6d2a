//! Errors surfaced by session setup and control calls.
//!
//! Ticks themselves never fail; everything here is raised before the loop
//! starts or by an explicit control call.
use platformer_core::{ConfigError, ErrorSeverity, GameError, LevelError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("viewport {width}x{height} has no area")]
    InvalidViewport { width: f32, height: f32 },

    #[error("position ({x}, {y}) is not finite")]
    InvalidPosition { x: f32, y: f32 },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Level(err) => err.severity(),
            RuntimeError::Config(err) => err.severity(),
            RuntimeError::InvalidViewport { .. } | RuntimeError::InvalidPosition { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Level(err) => err.error_code(),
            RuntimeError::Config(err) => err.error_code(),
            RuntimeError::InvalidViewport { .. } => "RUNTIME_INVALID_VIEWPORT",
            RuntimeError::InvalidPosition { .. } => "RUNTIME_INVALID_POSITION",
        }
    }
}
