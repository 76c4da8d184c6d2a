//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Shipped content next to the workspace.
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data");
pub const DEFAULT_LEVEL: &str = "demo";
pub const DEFAULT_SCRIPT: &str = "demo";
/// Ticks to run when there is neither a script nor an explicit tick count.
pub const DEFAULT_IDLE_TICKS: u64 = 600;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub level: String,
    /// `None` runs without input.
    pub script: Option<String>,
    /// `None` runs until the script ends.
    pub ticks: Option<u64>,
    pub realtime: bool,
    pub viewport: Option<Viewport>,
    /// `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            level: DEFAULT_LEVEL.to_string(),
            script: Some(DEFAULT_SCRIPT.to_string()),
            ticks: None,
            realtime: false,
            viewport: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PLATFORMER_DATA_DIR` - Content directory (default: shipped content)
    /// - `PLATFORMER_LEVEL` - Level name under `levels/` (default: demo)
    /// - `PLATFORMER_SCRIPT` - Script name under `scripts/`, `none` for no input (default: demo)
    /// - `PLATFORMER_TICKS` - Ticks to run (default: script length)
    /// - `PLATFORMER_REALTIME` - Pace ticks at the configured rate (default: false)
    /// - `PLATFORMER_VIEWPORT` - Viewport as `WIDTHxHEIGHT` (default: from config.toml)
    /// - `PLATFORMER_LOG_DIR` - Write `client.log` here instead of stderr
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("PLATFORMER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup("PLATFORMER_LEVEL") {
            config.level = level;
        }
        if let Some(script) = lookup("PLATFORMER_SCRIPT") {
            let script = script.trim();
            config.script = if script.is_empty() || script.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(script.to_string())
            };
        }
        config.ticks = parse(&lookup, "PLATFORMER_TICKS");
        if let Some(realtime) = parse::<bool>(&lookup, "PLATFORMER_REALTIME") {
            config.realtime = realtime;
        }
        config.viewport = parse(&lookup, "PLATFORMER_VIEWPORT");
        config.log_dir = lookup("PLATFORMER_LOG_DIR").map(PathBuf::from);

        config
    }
}

/// Screen size parsed from `WIDTHxHEIGHT`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl FromStr for Viewport {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (width, height) = value
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
        let width: f32 = width.trim().parse().map_err(|e| format!("width: {e}"))?;
        let height: f32 = height.trim().parse().map_err(|e| format!("height: {e}"))?;
        Ok(Self { width, height })
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config(&[]), ClientConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("PLATFORMER_DATA_DIR", "/srv/data"),
            ("PLATFORMER_LEVEL", "caves"),
            ("PLATFORMER_SCRIPT", "none"),
            ("PLATFORMER_TICKS", "120"),
            ("PLATFORMER_REALTIME", "true"),
            ("PLATFORMER_VIEWPORT", "1280x720"),
            ("PLATFORMER_LOG_DIR", "/tmp/logs"),
        ]);

        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        assert_eq!(config.level, "caves");
        assert_eq!(config.script, None);
        assert_eq!(config.ticks, Some(120));
        assert!(config.realtime);
        assert_eq!(
            config.viewport,
            Some(Viewport {
                width: 1280.0,
                height: 720.0
            })
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = config(&[
            ("PLATFORMER_TICKS", "soon"),
            ("PLATFORMER_REALTIME", "yes please"),
            ("PLATFORMER_VIEWPORT", "wide"),
        ]);
        assert_eq!(config.ticks, None);
        assert!(!config.realtime);
        assert_eq!(config.viewport, None);
    }

    #[test]
    fn viewport_parsing() {
        assert_eq!(
            " 800 X 600 ".trim().parse::<Viewport>(),
            Ok(Viewport {
                width: 800.0,
                height: 600.0
            })
        );
        assert!("800".parse::<Viewport>().is_err());
        assert!("axb".parse::<Viewport>().is_err());
    }
}
