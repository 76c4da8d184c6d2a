//! Read-only level data.
//!
//! The collision oracle exposes per-pixel tile classification and the level
//! bounds. [`SimEnv`] bundles it with the active configuration so the tick can
//! reach everything it needs without hard coupling to concrete types.
mod error;
mod map;
mod raster;
mod tile;

pub use error::LevelError;
pub use map::CollisionMap;
pub use raster::CollisionRaster;
pub use tile::TileKind;

use crate::config::PlatformerConfig;

/// Aggregates the read-only inputs of a tick.
#[derive(Clone, Copy)]
pub struct SimEnv<'a> {
    map: &'a dyn CollisionMap,
    config: &'a PlatformerConfig,
}

impl<'a> SimEnv<'a> {
    pub fn new(map: &'a dyn CollisionMap, config: &'a PlatformerConfig) -> Self {
        Self { map, config }
    }

    pub fn map(&self) -> &'a dyn CollisionMap {
        self.map
    }

    pub fn config(&self) -> &'a PlatformerConfig {
        self.config
    }
}

impl core::fmt::Debug for SimEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimEnv")
            .field("bounds", &self.map.bounds())
            .field("config", self.config)
            .finish()
    }
}
