use crate::geometry::{Rect, Vec2};

/// Current camera framing in level space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraState {
    pub rect: Rect,
    /// View height in level pixels.
    pub zoom: f32,
    /// Screen size in pixels, only its aspect ratio matters.
    pub viewport: Vec2,
    /// Next camera update jumps straight to the target.
    pub snap_pending: bool,
}

impl CameraState {
    pub fn new(rect: Rect, zoom: f32, viewport: Vec2) -> Self {
        Self {
            rect,
            zoom,
            viewport,
            snap_pending: false,
        }
    }

    pub fn view_size(&self) -> Vec2 {
        view_size(self.zoom, self.viewport)
    }
}

/// `zoom` tall, as wide as the viewport aspect ratio requires.
pub fn view_size(zoom: f32, viewport: Vec2) -> Vec2 {
    Vec2::new(zoom * (viewport.x / viewport.y), zoom)
}
