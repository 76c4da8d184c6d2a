//! Per-tick input snapshot and intent derivation.
use crate::geometry::Vec2;

/// Controller state sampled once at the start of a tick.
///
/// `axis` components are expected in `[-1, 1]` with no dead-zone applied;
/// `jump_pressed` is a press edge, true for exactly one tick per press.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputSnapshot {
    pub axis: Vec2,
    pub jump_pressed: bool,
}

impl InputSnapshot {
    pub const NEUTRAL: Self = Self {
        axis: Vec2::ZERO,
        jump_pressed: false,
    };

    pub fn axis(x: f32, y: f32) -> Self {
        Self {
            axis: Vec2::new(x, y),
            jump_pressed: false,
        }
    }

    pub fn jump() -> Self {
        Self {
            axis: Vec2::ZERO,
            jump_pressed: true,
        }
    }

    pub fn with_jump(mut self, pressed: bool) -> Self {
        self.jump_pressed = pressed;
        self
    }
}

/// A stretch of constant stick deflection in a recorded input timeline.
///
/// A segment with `jump` set presses the button on its first tick only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputSegment {
    pub ticks: u32,
    pub axis: Vec2,
    pub jump: bool,
}

impl InputSegment {
    pub fn hold(ticks: u32, x: f32, y: f32) -> Self {
        Self {
            ticks,
            axis: Vec2::new(x, y),
            jump: false,
        }
    }

    pub fn jump(ticks: u32) -> Self {
        Self {
            ticks,
            axis: Vec2::ZERO,
            jump: true,
        }
    }

    /// Snapshot for the `offset`-th tick inside this segment.
    pub fn snapshot(&self, offset: u32) -> InputSnapshot {
        InputSnapshot {
            axis: self.axis,
            jump_pressed: self.jump && offset == 0,
        }
    }
}

/// Zeroes a value whose magnitude is within `dead_zone` and clamps the rest to `[-1, 1]`.
pub fn apply_dead_zone(value: f32, dead_zone: f32) -> f32 {
    if !value.is_finite() || value.abs() <= dead_zone {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// At most one direction is acted on per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveIntent {
    None,
    /// Signed horizontal deflection, never zero.
    Horizontal(f32),
    /// Signed vertical deflection (negative is up), never zero.
    Vertical(f32),
}

impl MoveIntent {
    /// Horizontal deflection takes precedence over vertical.
    pub fn from_axis(axis: Vec2, dead_zone: f32) -> Self {
        let x = apply_dead_zone(axis.x, dead_zone);
        let y = apply_dead_zone(axis.y, dead_zone);
        if x != 0.0 {
            MoveIntent::Horizontal(x)
        } else if y != 0.0 {
            MoveIntent::Vertical(y)
        } else {
            MoveIntent::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEAD_ZONE: f32 = 0.075;

    #[test]
    fn values_inside_dead_zone_are_zero() {
        assert_eq!(apply_dead_zone(0.075, DEAD_ZONE), 0.0);
        assert_eq!(apply_dead_zone(-0.05, DEAD_ZONE), 0.0);
        assert_eq!(apply_dead_zone(0.08, DEAD_ZONE), 0.08);
        assert_eq!(apply_dead_zone(-3.0, DEAD_ZONE), -1.0);
        assert_eq!(apply_dead_zone(f32::NAN, DEAD_ZONE), 0.0);
    }

    #[test]
    fn drift_is_identical_to_no_input() {
        assert_eq!(
            MoveIntent::from_axis(Vec2::new(0.07, -0.075), DEAD_ZONE),
            MoveIntent::from_axis(Vec2::ZERO, DEAD_ZONE)
        );
    }

    #[test]
    fn horizontal_takes_precedence() {
        assert_eq!(
            MoveIntent::from_axis(Vec2::new(-0.5, -1.0), DEAD_ZONE),
            MoveIntent::Horizontal(-0.5)
        );
        assert_eq!(
            MoveIntent::from_axis(Vec2::new(0.05, -1.0), DEAD_ZONE),
            MoveIntent::Vertical(-1.0)
        );
    }

    #[test]
    fn segment_presses_jump_once() {
        let segment = InputSegment::jump(3);
        assert!(segment.snapshot(0).jump_pressed);
        assert!(!segment.snapshot(1).jump_pressed);
        assert_eq!(InputSegment::hold(5, 1.0, 0.0).snapshot(4), InputSnapshot::axis(1.0, 0.0));
    }
}
