//! Authoritative simulation state.
//!
//! Player and camera data live in explicit structs threaded through the tick
//! instead of being captured by the host's update closure. Runtime layers
//! clone or query this state but mutate it exclusively through
//! [`PhysicsStep`](crate::PhysicsStep) and the session entry points.
mod camera;
mod player;

pub use camera::{CameraState, view_size};
pub use player::{Facing, MovementFlags, PlayerState};

use crate::config::CameraConfig;
use crate::geometry::{Rect, Vec2};

/// Canonical snapshot of one running session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationState {
    /// Number of completed ticks.
    pub tick: u64,
    pub player: PlayerState,
    pub camera: CameraState,
}

impl SimulationState {
    /// Places the player at `spawn` and frames it with the initial zoom.
    pub fn new(spawn: Vec2, bounds: &Rect, camera: &CameraConfig) -> Self {
        let initial = Rect::centered_clamped(
            spawn,
            view_size(camera.initial_zoom, camera.viewport),
            bounds,
        );
        Self {
            tick: 0,
            player: PlayerState::new(spawn),
            camera: CameraState::new(initial, camera.zoom, camera.viewport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_camera_uses_initial_zoom() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 600.0);
        let config = CameraConfig {
            viewport: Vec2::new(1280.0, 720.0),
            ..CameraConfig::default()
        };
        let state = SimulationState::new(Vec2::new(200.0, 150.0), &bounds, &config);

        assert_eq!(state.camera.rect.height, config.initial_zoom);
        assert!((state.camera.rect.width - 32.0 * 1280.0 / 720.0).abs() < 1e-4);
        assert_eq!(state.camera.zoom, config.zoom);
        assert_eq!(state.player.position, Vec2::new(200.0, 150.0));
        assert_eq!(state.tick, 0);
    }
}
