//! Individual phases of a physics tick, in execution order.

use crate::config::PhysicsConfig;
use crate::geometry::Vec2;
use crate::input::MoveIntent;
use crate::movement::MovementResolver;
use crate::state::{Facing, MovementFlags, PlayerState};

/// Acts on at most one direction of stick input.
///
/// Grounded players walk or climb by a step scaled with the deflection.
/// Airborne players only turn to face the stick; their position is left to
/// the velocity phase. Horizontal input still marks the player as walking so
/// a landing resolves straight to the walk cycle.
pub(super) fn steer(
    resolver: &MovementResolver<'_>,
    player: &mut PlayerState,
    intent: MoveIntent,
    grounded: bool,
    physics: &PhysicsConfig,
) {
    match intent {
        MoveIntent::Horizontal(x) if grounded => {
            if let Some(facing) = Facing::from_axis(x) {
                player.facing = facing;
            }
            resolver.try_move_x(player, Vec2::new(physics.walk_step * x, 0.0));
            player.speed_scale = physics.walk_step * x.abs();
            player.flags.insert(MovementFlags::WALKING);
            player.flags.remove(MovementFlags::CLIMBING);
        }
        MoveIntent::Vertical(y) if grounded => {
            // CLIMBING is only set by a committed ladder move.
            resolver.try_move_y(player, Vec2::new(0.0, physics.climb_step * y));
            player.speed_scale = physics.climb_step * y.abs();
            player.flags.remove(MovementFlags::WALKING);
        }
        MoveIntent::Horizontal(x) => {
            if let Some(facing) = Facing::from_axis(x) {
                player.facing = facing;
            }
            player.speed_scale = 1.0;
            player.flags.insert(MovementFlags::WALKING);
        }
        MoveIntent::Vertical(_) | MoveIntent::None => {
            player.speed_scale = 1.0;
        }
    }
}

/// Applies gravity and moves the player by its velocity.
///
/// Returns `true` when the player came to rest: velocity was blocked for both
/// the body probes and the ladder probes, so it is reset and any jump ends.
pub(super) fn integrate(
    resolver: &MovementResolver<'_>,
    player: &mut PlayerState,
    physics: &PhysicsConfig,
) -> bool {
    // Holding on a ladder suspends gravity.
    if !resolver.try_move_y(player, player.velocity) {
        player.velocity += physics.gravity * physics.tick_seconds();
    }

    let velocity = player.velocity;
    if resolver.try_move_x(player, velocity) || resolver.try_move_y(player, velocity) {
        return false;
    }

    player.velocity = Vec2::ZERO;
    player.flags.remove(MovementFlags::JUMPING);
    true
}

/// Starts a jump when the button edge arrives while grounded.
pub(super) fn jump(player: &mut PlayerState, pressed: bool, physics: &PhysicsConfig) -> bool {
    let grounded = player.is_grounded(physics.grounded_epsilon) && !player.is_jumping();
    if !(pressed && grounded) {
        return false;
    }

    player.flags.insert(MovementFlags::JUMPING);
    player.velocity += Vec2::new(0.0, -physics.jump_impulse);
    true
}
