//! Content factory resolving files inside a data directory.

use std::path::{Path, PathBuf};

use platformer_core::{InputSegment, PlatformerConfig};

use crate::loaders::{ConfigLoader, Level, LevelLoader, LoadResult, ScriptLoader};

/// Loads all content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── levels/
/// │   └── demo.ron
/// └── scripts/
///     └── demo.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Loads `config.toml`, or the defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<PlatformerConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(PlatformerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Loads `levels/{name}.ron`.
    pub fn load_level(&self, name: &str) -> LoadResult<Level> {
        LevelLoader::load(&self.level_path(name))
    }

    /// Loads `scripts/{name}.ron`.
    pub fn load_script(&self, name: &str) -> LoadResult<Vec<InputSegment>> {
        let path = self.data_dir.join("scripts").join(format!("{}.ron", name));
        ScriptLoader::load(&path)
    }

    pub fn level_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("levels").join(format!("{}.ron", name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped() -> ContentFactory {
        ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.level_path("demo"),
            Path::new("/tmp/data/levels/demo.ron")
        );
    }

    #[test]
    fn shipped_content_loads() {
        let factory = shipped();
        let config = factory.load_config().unwrap();
        let level = factory.load_level("demo").unwrap();
        let script = factory.load_script("demo").unwrap();

        config.validate().unwrap();
        assert!(level.map.width() > 0);
        assert!(ScriptLoader::duration(&script) > 0);
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), PlatformerConfig::default());
        assert!(factory.load_level("demo").is_err());
    }
}
