//! Smoothed camera follow clamped to the level.
use crate::geometry::{Rect, Vec2};
use crate::state::CameraState;

pub struct CameraFollow;

impl CameraFollow {
    /// Rectangle the camera is heading towards: centered on `focus`, kept inside `bounds`.
    pub fn target(camera: &CameraState, focus: Vec2, bounds: &Rect) -> Rect {
        Rect::centered_clamped(focus, camera.view_size(), bounds)
    }

    /// Advances the camera one tick and returns the new framing.
    ///
    /// A pending snap jumps straight to the target; otherwise the rect eases
    /// towards it by `smoothing` of the remaining distance.
    pub fn update(camera: &mut CameraState, focus: Vec2, bounds: &Rect, smoothing: f32) -> Rect {
        let target = Self::target(camera, focus, bounds);
        camera.rect = if camera.snap_pending {
            camera.snap_pending = false;
            target
        } else {
            camera.rect.lerp(&target, smoothing)
        };
        camera.rect
    }

    /// Viewport size changed; the next update snaps.
    pub fn resize(camera: &mut CameraState, viewport: Vec2) {
        camera.viewport = viewport;
        camera.snap_pending = true;
    }

    pub fn set_zoom(camera: &mut CameraState, zoom: f32) {
        camera.zoom = zoom;
    }

    /// The next update jumps straight to the target.
    pub fn snap(camera: &mut CameraState) {
        camera.snap_pending = true;
    }
}
