//! Deterministic movement, collision and camera core of the tile platformer.
//!
//! `platformer-core` owns the per-tick rules: probe-based tile collision,
//! gravity and jumping, ladder climbing, the animation state machine and the
//! smoothed camera. It performs no I/O and keeps no clocks; hosts feed it one
//! [`InputSnapshot`] per fixed tick through [`PhysicsStep`], and all state
//! lives in an explicit [`SimulationState`].
pub mod animation;
pub mod camera;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod input;
pub mod movement;
pub mod state;

pub use animation::{AnimationState, AnimationStateMachine, AnimationTransition};
pub use camera::CameraFollow;
pub use config::{CameraConfig, ConfigError, PhysicsConfig, PlatformerConfig, ProbeLayout};
pub use engine::{PhysicsStep, PresentationEvent, TickOutcome};
pub use env::{CollisionMap, CollisionRaster, LevelError, SimEnv, TileKind};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Rect, Vec2};
pub use input::{InputSegment, InputSnapshot, MoveIntent, apply_dead_zone};
pub use movement::MovementResolver;
pub use state::{CameraState, Facing, MovementFlags, PlayerState, SimulationState};
