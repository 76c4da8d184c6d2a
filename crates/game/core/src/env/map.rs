use crate::geometry::{Rect, Vec2};

use super::TileKind;

/// Read-only collision oracle for a loaded level.
///
/// Implementations are built once at level load and never mutated, so a map
/// can be shared between any number of readers without locking.
pub trait CollisionMap: Send + Sync {
    /// Classifies the point at pixel resolution. Points outside
    /// [`bounds`](Self::bounds) must classify as [`TileKind::Outside`].
    fn classify(&self, point: Vec2) -> TileKind;

    /// Walkable/viewable extent of the level in pixels.
    fn bounds(&self) -> Rect;

    fn is_solid(&self, point: Vec2) -> bool {
        self.classify(point).is_solid()
    }

    fn is_ladder(&self, point: Vec2) -> bool {
        self.classify(point).is_ladder()
    }
}
