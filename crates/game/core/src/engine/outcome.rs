use core::time::Duration;

use crate::animation::{AnimationState, AnimationTransition};
use crate::geometry::{Rect, Vec2};
use crate::state::Facing;

/// Hint for the presentation layer. The core never draws anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresentationEvent {
    /// Switch to `state`, cross-fading over `duration`.
    Animation {
        state: AnimationState,
        duration: Duration,
    },
    /// Sprite orientation and clip playback speed.
    Pose { facing: Facing, speed_scale: f32 },
    /// Camera framing in level space.
    Camera { rect: Rect },
}

/// Everything observable about one completed tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    /// Tick number, starting at 1 for the first completed tick.
    pub tick: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    pub speed_scale: f32,
    pub animation: AnimationState,
    pub transition: Option<AnimationTransition>,
    pub camera: Rect,
    /// A jump was accepted this tick.
    pub jumped: bool,
    /// Both velocity moves were blocked and velocity was reset.
    pub stopped: bool,
}

impl TickOutcome {
    /// Presentation hints in delivery order: animation change first, then pose and camera.
    pub fn events(&self) -> impl Iterator<Item = PresentationEvent> + '_ {
        let animation = self
            .transition
            .map(|transition| PresentationEvent::Animation {
                state: transition.to,
                duration: transition.duration,
            });

        animation.into_iter().chain([
            PresentationEvent::Pose {
                facing: self.facing,
                speed_scale: self.speed_scale,
            },
            PresentationEvent::Camera { rect: self.camera },
        ])
    }
}
