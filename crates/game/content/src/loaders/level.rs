//! Level layout loader.
//!
//! A level file is a character grid plus a legend mapping each character to a
//! tile code:
//!
//! ```ron
//! (
//!     tile_size: 16.0,
//!     spawn: (200.0, 150.0),
//!     rows: [
//!         "..........",
//!         "....H.....",
//!         "####H#####",
//!     ],
//! )
//! ```
//!
//! `legend` is optional; without it [`LevelLoader::default_legend`] applies.
//! A custom legend replaces the default one entirely.

use std::collections::BTreeMap;
use std::path::Path;

use platformer_core::{CollisionRaster, TileKind, Vec2};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Deserialize)]
struct LevelRon {
    tile_size: f32,
    spawn: (f32, f32),
    #[serde(default = "LevelLoader::default_legend")]
    legend: BTreeMap<char, i32>,
    rows: Vec<String>,
}

/// A loaded level: the collision raster and where the player starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub map: CollisionRaster,
    pub spawn: Vec2,
}

/// Loader for level layouts from RON files.
pub struct LevelLoader;

impl LevelLoader {
    pub fn load(path: &Path) -> LoadResult<Level> {
        let content = read_file(path)?;
        let level = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load level {}: {}", path.display(), e))?;
        tracing::info!(
            path = %path.display(),
            width = level.map.width(),
            height = level.map.height(),
            "loaded level"
        );
        Ok(level)
    }

    pub fn parse(content: &str) -> LoadResult<Level> {
        let data: LevelRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;
        let legend = data.legend;

        let mut rows = Vec::with_capacity(data.rows.len());
        for (row, line) in data.rows.iter().enumerate() {
            let tiles = line
                .chars()
                .enumerate()
                .map(|(column, symbol)| {
                    legend
                        .get(&symbol)
                        .map(|code| TileKind::from_code(*code))
                        .ok_or_else(|| {
                            anyhow::anyhow!(
                                "Unknown tile symbol '{}' at row {}, column {}",
                                symbol,
                                row,
                                column
                            )
                        })
                })
                .collect::<LoadResult<Vec<_>>>()?;
            rows.push(tiles);
        }

        let map = CollisionRaster::from_rows(&rows, data.tile_size)
            .map_err(|e| anyhow::anyhow!("Invalid level layout: {}", e))?;
        let spawn = Vec2::new(data.spawn.0, data.spawn.1);
        if !spawn.is_finite() {
            anyhow::bail!("Spawn point must be finite");
        }

        Ok(Level { map, spawn })
    }

    /// `.` empty, `#` dirt, `H` ladder, `S` stone, `X` outside.
    pub fn default_legend() -> BTreeMap<char, i32> {
        BTreeMap::from([
            ('.', TileKind::EMPTY_CODE),
            ('#', TileKind::DIRT_CODE),
            ('H', TileKind::LADDER_CODE),
            ('S', TileKind::STONE_CODE),
            ('X', TileKind::OUTSIDE_CODE),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use platformer_core::CollisionMap;

    const LEVEL: &str = r##"(
        tile_size: 8.0,
        spawn: (12.0, 4.0),
        rows: [
            "....",
            ".H..",
            "#H#S",
        ],
    )"##;

    #[test]
    fn parses_rows_with_default_legend() {
        let level = LevelLoader::parse(LEVEL).unwrap();

        assert_eq!(level.spawn, Vec2::new(12.0, 4.0));
        assert_eq!((level.map.width(), level.map.height()), (4, 3));
        assert_eq!(level.map.tile_size(), 8.0);
        assert_eq!(level.map.tile(1, 1), Some(TileKind::Ladder));
        assert_eq!(level.map.tile(0, 2), Some(TileKind::Dirt));
        assert_eq!(level.map.tile(3, 2), Some(TileKind::Stone));
        assert_eq!(level.map.classify(Vec2::new(9.0, 17.0)), TileKind::Ladder);
    }

    #[test]
    fn custom_legend_codes_become_custom_tiles() {
        let level = LevelLoader::parse(
            r#"(
                tile_size: 16.0,
                spawn: (0.0, 0.0),
                legend: { ' ': 0, '=': 1, '~': 9 },
                rows: [" ~", "=="],
            )"#,
        )
        .unwrap();

        assert_eq!(level.map.tile(1, 0), Some(TileKind::Custom(9)));
        assert!(!TileKind::Custom(9).is_solid());
    }

    #[test]
    fn unknown_symbol_is_reported_with_position() {
        let err = LevelLoader::parse(
            r#"(tile_size: 16.0, spawn: (0.0, 0.0), rows: ["..", ".?"])"#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'?'"), "{message}");
        assert!(message.contains("row 1, column 1"), "{message}");
    }

    #[test]
    fn ragged_and_empty_layouts_are_rejected() {
        assert!(
            LevelLoader::parse(r#"(tile_size: 16.0, spawn: (0.0, 0.0), rows: ["..", "."])"#)
                .is_err()
        );
        assert!(LevelLoader::parse(r#"(tile_size: 16.0, spawn: (0.0, 0.0), rows: [])"#).is_err());
        assert!(
            LevelLoader::parse(r#"(tile_size: 0.0, spawn: (0.0, 0.0), rows: ["."])"#).is_err()
        );
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LEVEL.as_bytes()).unwrap();

        let level = LevelLoader::load(file.path()).unwrap();
        assert_eq!(level.map.bounds().width, 32.0);
    }
}
