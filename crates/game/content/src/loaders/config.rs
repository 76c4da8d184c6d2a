//! Simulation tuning loader.

use std::path::Path;

use platformer_core::PlatformerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`PlatformerConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates a config. Omitted tables and fields keep their defaults.
    pub fn load(path: &Path) -> LoadResult<PlatformerConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> LoadResult<PlatformerConfig> {
        let config: PlatformerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
        Ok(config)
    }
}
