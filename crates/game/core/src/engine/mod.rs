//! Fixed-timestep simulation driver.
//!
//! [`PhysicsStep`] is the only code path that advances a [`SimulationState`].
//! One call to [`PhysicsStep::tick`] runs the phases below, in order, against a
//! single input snapshot:
//!
//! 1. clear per-tick flags and derive the move intent (dead-zone applied)
//! 2. steer: walk, climb, or turn in mid-air
//! 3. integrate: gravity and velocity moves, rest detection
//! 4. jump: accept a press edge while grounded
//! 5. re-derive the animation state
//! 6. advance the camera
//!
//! Nothing in a tick can fail; blocked moves are ordinary outcomes.
mod outcome;
mod phases;

pub use outcome::{PresentationEvent, TickOutcome};

use crate::animation::AnimationStateMachine;
use crate::camera::CameraFollow;
use crate::env::SimEnv;
use crate::input::{InputSnapshot, MoveIntent};
use crate::movement::MovementResolver;
use crate::state::{MovementFlags, SimulationState};

pub struct PhysicsStep<'a> {
    state: &'a mut SimulationState,
}

impl<'a> PhysicsStep<'a> {
    pub fn new(state: &'a mut SimulationState) -> Self {
        Self { state }
    }

    /// Runs one fixed tick.
    pub fn tick(&mut self, env: SimEnv<'_>, input: InputSnapshot) -> TickOutcome {
        let config = env.config();
        let physics = &config.physics;
        let map = env.map();
        let resolver = MovementResolver::new(map, &physics.probes);
        let player = &mut self.state.player;

        player.flags.remove(MovementFlags::PER_TICK);
        let intent = MoveIntent::from_axis(input.axis, physics.dead_zone);
        let grounded = player.is_grounded(physics.grounded_epsilon) && !player.is_jumping();

        phases::steer(&resolver, player, intent, grounded, physics);
        let stopped = phases::integrate(&resolver, player, physics);
        let jumped = phases::jump(player, input.jump_pressed, physics);

        let transition = AnimationStateMachine::update(&mut player.animation, player.flags);
        let (position, velocity) = (player.position, player.velocity);
        let (facing, speed_scale, animation) = (player.facing, player.speed_scale, player.animation);

        let camera = CameraFollow::update(
            &mut self.state.camera,
            position,
            &map.bounds(),
            config.camera.smoothing,
        );

        self.state.tick += 1;
        tracing::trace!(
            tick = self.state.tick,
            x = position.x,
            y = position.y,
            vx = velocity.x,
            vy = velocity.y,
            state = %animation,
            "tick"
        );

        TickOutcome {
            tick: self.state.tick,
            position,
            velocity,
            facing,
            speed_scale,
            animation,
            transition,
            camera,
            jumped,
            stopped,
        }
    }
}
