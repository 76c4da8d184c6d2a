//! Tunable simulation parameters.
//!
//! Every constant the tick reads lives here as a named field. A config is
//! injected when a session starts and replaced only through
//! `Session::reconfigure`, which re-runs [`PlatformerConfig::validate`].
use core::time::Duration;

use crate::error::{ErrorSeverity, GameError};
use crate::geometry::Vec2;

/// Root configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlatformerConfig {
    pub physics: PhysicsConfig,
    pub camera: CameraConfig,
}

impl PlatformerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.camera.validate()
    }
}

/// Movement, gravity and input constants. Distances are pixels per tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsConfig {
    /// Fixed update frequency.
    pub tick_rate_hz: f32,
    /// Acceleration added to velocity, scaled by the tick duration.
    pub gravity: Vec2,
    /// Horizontal step at full stick deflection.
    pub walk_step: f32,
    /// Ladder step at full stick deflection.
    pub climb_step: f32,
    /// Upward velocity added by an accepted jump.
    pub jump_impulse: f32,
    /// Per-axis analog magnitude treated as zero.
    pub dead_zone: f32,
    /// Vertical speed below which the player counts as grounded.
    pub grounded_epsilon: f32,
    pub probes: ProbeLayout,
}

impl PhysicsConfig {
    pub const DEFAULT_TICK_RATE_HZ: f32 = 60.0;
    pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 10.0);
    pub const DEFAULT_WALK_STEP: f32 = 2.0;
    pub const DEFAULT_CLIMB_STEP: f32 = 0.7;
    pub const DEFAULT_JUMP_IMPULSE: f32 = 5.5;
    pub const DEFAULT_DEAD_ZONE: f32 = 0.075;
    pub const DEFAULT_GROUNDED_EPSILON: f32 = 1.0e-4;

    /// Seconds per tick.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate_hz))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            return Err(ConfigError::TickRate(self.tick_rate_hz));
        }
        if !(0.0..1.0).contains(&self.dead_zone) {
            return Err(ConfigError::DeadZone(self.dead_zone));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFinite("physics.gravity"));
        }
        let scalars = [
            ("physics.walk_step", self.walk_step),
            ("physics.climb_step", self.climb_step),
            ("physics.jump_impulse", self.jump_impulse),
            ("physics.grounded_epsilon", self.grounded_epsilon),
        ];
        for (field, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative(field));
            }
        }
        self.probes.validate()
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: Self::DEFAULT_TICK_RATE_HZ,
            gravity: Self::DEFAULT_GRAVITY,
            walk_step: Self::DEFAULT_WALK_STEP,
            climb_step: Self::DEFAULT_CLIMB_STEP,
            jump_impulse: Self::DEFAULT_JUMP_IMPULSE,
            dead_zone: Self::DEFAULT_DEAD_ZONE,
            grounded_epsilon: Self::DEFAULT_GROUNDED_EPSILON,
            probes: ProbeLayout::default(),
        }
    }
}

/// Probe offsets relative to the sprite's top-center anchor.
///
/// `horizontal` samples the left/right edges of the legs at two heights;
/// `ladder` samples just below both feet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProbeLayout {
    pub horizontal: [Vec2; 4],
    pub ladder: [Vec2; 2],
}

impl ProbeLayout {
    pub const DEFAULT_SPRITE: Self = Self {
        horizontal: [
            Vec2::new(-12.0, 14.0),
            Vec2::new(12.0, 14.0),
            Vec2::new(-12.0, 28.5),
            Vec2::new(12.0, 28.5),
        ],
        ladder: [Vec2::new(-6.0, 29.0), Vec2::new(6.0, 29.0)],
    };

    fn validate(&self) -> Result<(), ConfigError> {
        if self.horizontal.iter().chain(&self.ladder).all(|p| p.is_finite()) {
            Ok(())
        } else {
            Err(ConfigError::NonFinite("physics.probes"))
        }
    }
}

impl Default for ProbeLayout {
    fn default() -> Self {
        Self::DEFAULT_SPRITE
    }
}

/// Camera framing and smoothing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraConfig {
    /// View height in pixels; width follows the viewport aspect ratio.
    pub zoom: f32,
    /// View height used for the very first frame.
    pub initial_zoom: f32,
    /// Interpolation ratio applied per tick.
    pub smoothing: f32,
    /// Viewport size in screen pixels, used only for its aspect ratio.
    pub viewport: Vec2,
}

impl CameraConfig {
    pub const DEFAULT_ZOOM: f32 = 128.0;
    pub const DEFAULT_INITIAL_ZOOM: f32 = 32.0;
    pub const DEFAULT_SMOOTHING: f32 = 0.05 * 0.5;
    pub const DEFAULT_VIEWPORT: Vec2 = Vec2::new(512.0, 512.0);

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ConfigError::Zoom(self.zoom));
        }
        if !(self.initial_zoom.is_finite() && self.initial_zoom > 0.0) {
            return Err(ConfigError::Zoom(self.initial_zoom));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::Smoothing(self.smoothing));
        }
        validate_viewport(self.viewport)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom: Self::DEFAULT_ZOOM,
            initial_zoom: Self::DEFAULT_INITIAL_ZOOM,
            smoothing: Self::DEFAULT_SMOOTHING,
            viewport: Self::DEFAULT_VIEWPORT,
        }
    }
}

pub fn validate_viewport(viewport: Vec2) -> Result<(), ConfigError> {
    if viewport.is_finite() && viewport.x > 0.0 && viewport.y > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Viewport {
            width: viewport.x,
            height: viewport.y,
        })
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("tick rate must be a positive frequency, got {0}")]
    TickRate(f32),

    #[error("dead-zone must be within [0, 1), got {0}")]
    DeadZone(f32),

    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("{0} must be a finite, non-negative value")]
    Negative(&'static str),

    #[error("zoom must be positive, got {0}")]
    Zoom(f32),

    #[error("camera smoothing must be within (0, 1], got {0}")]
    Smoothing(f32),

    #[error("viewport {width}x{height} has no area")]
    Viewport { width: f32, height: f32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            TickRate(_) => "CONFIG_TICK_RATE",
            DeadZone(_) => "CONFIG_DEAD_ZONE",
            NonFinite(_) => "CONFIG_NON_FINITE",
            Negative(_) => "CONFIG_NEGATIVE",
            Zoom(_) => "CONFIG_ZOOM",
            Smoothing(_) => "CONFIG_SMOOTHING",
            Viewport { .. } => "CONFIG_VIEWPORT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PlatformerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert!((config.physics.tick_seconds() - 1.0 / 60.0).abs() < 1e-7);
        assert_eq!(config.camera.smoothing, 0.025);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut config = PlatformerConfig::default();
        config.physics.tick_rate_hz = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::TickRate(0.0)));

        let mut config = PlatformerConfig::default();
        config.physics.dead_zone = 1.0;
        assert_eq!(config.validate(), Err(ConfigError::DeadZone(1.0)));

        let mut config = PlatformerConfig::default();
        config.physics.gravity = Vec2::new(0.0, f32::INFINITY);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite("physics.gravity"))
        );

        let mut config = PlatformerConfig::default();
        config.camera.smoothing = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::Smoothing(0.0)));

        let mut config = PlatformerConfig::default();
        config.camera.viewport = Vec2::new(640.0, 0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Viewport { .. })
        ));
    }

    #[test]
    fn config_errors_are_validation_errors() {
        let err = ConfigError::Zoom(-1.0);
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "CONFIG_ZOOM");
    }
}
