//! Input timeline loader.
//!
//! A script is a RON list of segments; omitted fields default to zero:
//!
//! ```ron
//! [
//!     (ticks: 30),
//!     (ticks: 60, axis: (x: 1.0, y: 0.0)),
//!     (ticks: 45, jump: true),
//! ]
//! ```

use std::path::Path;

use platformer_core::InputSegment;

use crate::loaders::{LoadResult, read_file};

pub struct ScriptLoader;

impl ScriptLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<InputSegment>> {
        let content = read_file(path)?;
        let segments = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load script {}: {}", path.display(), e))?;
        tracing::info!(path = %path.display(), segments = segments.len(), "loaded script");
        Ok(segments)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<InputSegment>> {
        let segments: Vec<InputSegment> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse script RON: {}", e))?;
        for (index, segment) in segments.iter().enumerate() {
            if !segment.axis.is_finite() {
                anyhow::bail!("Segment {} has a non-finite axis", index);
            }
        }
        Ok(segments)
    }

    /// Number of ticks covered by `segments`.
    pub fn duration(segments: &[InputSegment]) -> u64 {
        segments.iter().map(|segment| u64::from(segment.ticks)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platformer_core::Vec2;

    #[test]
    fn omitted_fields_default() {
        let segments = ScriptLoader::parse(
            "[(ticks: 2), (ticks: 3, axis: (x: -1.0, y: 0.0)), (ticks: 1, jump: true)]",
        )
        .unwrap();

        assert_eq!(
            segments,
            vec![
                InputSegment::hold(2, 0.0, 0.0),
                InputSegment {
                    ticks: 3,
                    axis: Vec2::new(-1.0, 0.0),
                    jump: false,
                },
                InputSegment::jump(1),
            ]
        );
        assert_eq!(ScriptLoader::duration(&segments), 6);
    }

    #[test]
    fn malformed_script_is_an_error() {
        assert!(ScriptLoader::parse("[(ticks: -1)]").is_err());
        assert!(ScriptLoader::parse("(ticks: 1)").is_err());
    }
}
