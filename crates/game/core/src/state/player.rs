use bitflags::bitflags;

use crate::animation::AnimationState;
use crate::geometry::Vec2;

bitflags! {
    /// Movement flags feeding the animation state machine.
    ///
    /// `WALKING` and `CLIMBING` are cleared at the start of every tick and set
    /// again only by that tick's movement. `JUMPING` survives until the player
    /// is grounded again.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MovementFlags: u8 {
        const JUMPING  = 1 << 0;
        const CLIMBING = 1 << 1;
        const WALKING  = 1 << 2;
    }
}

impl MovementFlags {
    /// Flags that only describe the current tick.
    pub const PER_TICK: Self = Self::CLIMBING.union(Self::WALKING);
}

/// Horizontal orientation of the sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Horizontal scale sign for the presentation layer.
    pub const fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn from_axis(value: f32) -> Option<Self> {
        if value > 0.0 {
            Some(Facing::Right)
        } else if value < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Everything the tick knows about the player entity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    /// Top-center anchor of the sprite in level pixels.
    pub position: Vec2,
    /// Pixels per tick.
    pub velocity: Vec2,
    pub facing: Facing,
    /// Playback speed hint for the active animation clip.
    pub speed_scale: f32,
    pub flags: MovementFlags,
    pub animation: AnimationState,
    /// Position restored by `reset_to_spawn`.
    pub spawn: Vec2,
}

impl PlayerState {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            facing: Facing::default(),
            speed_scale: 1.0,
            flags: MovementFlags::empty(),
            animation: AnimationState::default(),
            spawn,
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.flags.contains(MovementFlags::JUMPING)
    }

    pub fn is_climbing(&self) -> bool {
        self.flags.contains(MovementFlags::CLIMBING)
    }

    pub fn is_walking(&self) -> bool {
        self.flags.contains(MovementFlags::WALKING)
    }

    /// Vertical speed is within `epsilon` of zero.
    pub fn is_grounded(&self, epsilon: f32) -> bool {
        self.velocity.y.abs() <= epsilon
    }

    /// Places the player at `point` without collision checks, at rest.
    pub fn teleport(&mut self, point: Vec2) {
        self.position = point;
        self.velocity = Vec2::ZERO;
        self.flags = MovementFlags::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_tick_flags_exclude_jumping() {
        let mut flags = MovementFlags::all();
        flags.remove(MovementFlags::PER_TICK);
        assert_eq!(flags, MovementFlags::JUMPING);
    }

    #[test]
    fn facing_follows_axis_sign() {
        assert_eq!(Facing::from_axis(0.4), Some(Facing::Right));
        assert_eq!(Facing::from_axis(-1.0), Some(Facing::Left));
        assert_eq!(Facing::from_axis(0.0), None);
        assert_eq!(Facing::Left.sign(), -1.0);
    }

    #[test]
    fn teleport_stops_the_player() {
        let mut player = PlayerState::new(Vec2::new(10.0, 10.0));
        player.velocity = Vec2::new(1.0, -5.5);
        player.flags = MovementFlags::JUMPING | MovementFlags::WALKING;

        player.teleport(Vec2::new(200.0, 150.0));
        assert_eq!(player.position, Vec2::new(200.0, 150.0));
        assert_eq!(player.velocity, Vec2::ZERO);
        assert!(player.flags.is_empty());
        assert_eq!(player.spawn, Vec2::new(10.0, 10.0));
    }
}
