//! Probe-based position updates.
//!
//! A candidate position is accepted only if every probe point passes, so a
//! move is either committed whole or not at all. Horizontal (and velocity)
//! moves require no solid probe; vertical moves require every foot probe to be
//! on a ladder. Landing is detected by `PhysicsStep` when both fail.
use crate::config::ProbeLayout;
use crate::env::CollisionMap;
use crate::geometry::Vec2;
use crate::state::{MovementFlags, PlayerState};

pub struct MovementResolver<'a> {
    map: &'a dyn CollisionMap,
    probes: &'a ProbeLayout,
}

impl<'a> MovementResolver<'a> {
    pub fn new(map: &'a dyn CollisionMap, probes: &'a ProbeLayout) -> Self {
        Self { map, probes }
    }

    /// Moves by `delta` if none of the body probes lands on a solid tile.
    pub fn try_move_x(&self, player: &mut PlayerState, delta: Vec2) -> bool {
        let candidate = player.position + delta;
        let clear = self
            .probes
            .horizontal
            .iter()
            .all(|offset| !self.map.is_solid(candidate + *offset));
        if clear {
            player.position = candidate;
        }
        clear
    }

    /// Moves by `delta` if every foot probe lands on a ladder tile.
    ///
    /// A committed non-zero move marks the player as climbing. A zero delta
    /// that validates just holds the player on the ladder.
    pub fn try_move_y(&self, player: &mut PlayerState, delta: Vec2) -> bool {
        let candidate = player.position + delta;
        let on_ladder = self
            .probes
            .ladder
            .iter()
            .all(|offset| self.map.is_ladder(candidate + *offset));
        if on_ladder {
            player.position = candidate;
            if delta != Vec2::ZERO {
                player.flags.insert(MovementFlags::CLIMBING);
            }
        }
        on_ladder
    }
}
