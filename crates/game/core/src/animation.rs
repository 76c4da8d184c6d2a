//! Animation state derived from movement flags.
//!
//! The machine holds no timers. It resolves one state per tick by priority and
//! reports a transition, with a cross-fade hint, only when that state changes.
use core::time::Duration;

use crate::state::MovementFlags;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AnimationState {
    #[default]
    Idle,
    Walking,
    Jumping,
    Climbing,
}

impl AnimationState {
    /// Cross-fade duration when entering this state. Idle relaxes slower.
    pub const fn transition_duration(self) -> Duration {
        match self {
            AnimationState::Idle => Duration::from_millis(300),
            AnimationState::Walking | AnimationState::Jumping | AnimationState::Climbing => {
                Duration::from_millis(100)
            }
        }
    }

    /// Highest-priority state for the given flags: jumping > climbing > walking > idle.
    pub fn resolve(flags: MovementFlags) -> Self {
        if flags.contains(MovementFlags::JUMPING) {
            AnimationState::Jumping
        } else if flags.contains(MovementFlags::CLIMBING) {
            AnimationState::Climbing
        } else if flags.contains(MovementFlags::WALKING) {
            AnimationState::Walking
        } else {
            AnimationState::Idle
        }
    }
}

/// Requested change of the active clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationTransition {
    pub from: AnimationState,
    pub to: AnimationState,
    pub duration: Duration,
}

pub struct AnimationStateMachine;

impl AnimationStateMachine {
    /// Re-derives the state from `flags` and updates `current` in place.
    ///
    /// Returns `None` on a no-op tick.
    pub fn update(
        current: &mut AnimationState,
        flags: MovementFlags,
    ) -> Option<AnimationTransition> {
        let next = AnimationState::resolve(flags);
        if next == *current {
            return None;
        }

        let transition = AnimationTransition {
            from: *current,
            to: next,
            duration: next.transition_duration(),
        };
        tracing::debug!(from = %transition.from, to = %next, "animation transition");
        *current = next;
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn jumping_wins_over_every_other_flag() {
        assert_eq!(
            AnimationState::resolve(MovementFlags::all()),
            AnimationState::Jumping
        );
        assert_eq!(
            AnimationState::resolve(MovementFlags::CLIMBING | MovementFlags::WALKING),
            AnimationState::Climbing
        );
        assert_eq!(
            AnimationState::resolve(MovementFlags::WALKING),
            AnimationState::Walking
        );
        assert_eq!(
            AnimationState::resolve(MovementFlags::empty()),
            AnimationState::Idle
        );
    }

    #[test]
    fn transitions_only_on_change() {
        let mut current = AnimationState::Idle;
        assert_eq!(
            AnimationStateMachine::update(&mut current, MovementFlags::empty()),
            None
        );

        let transition = AnimationStateMachine::update(&mut current, MovementFlags::WALKING)
            .expect("idle -> walking");
        assert_eq!(transition.from, AnimationState::Idle);
        assert_eq!(transition.to, AnimationState::Walking);
        assert_eq!(transition.duration, Duration::from_millis(100));
        assert_eq!(current, AnimationState::Walking);

        assert_eq!(
            AnimationStateMachine::update(&mut current, MovementFlags::WALKING),
            None
        );

        let transition = AnimationStateMachine::update(&mut current, MovementFlags::empty())
            .expect("walking -> idle");
        assert_eq!(transition.duration, Duration::from_millis(300));
    }

    #[test]
    fn names_are_snake_case() {
        let names: Vec<String> = AnimationState::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["idle", "walking", "jumping", "climbing"]);
        assert_eq!("Climbing".parse::<AnimationState>(), Ok(AnimationState::Climbing));
    }
}
