//! Session orchestration for the platformer simulation.
//!
//! This crate owns everything around the deterministic tick: a [`Session`]
//! binds a collision map, a validated config and the simulation state, and
//! drives ticks either back to back ([`Session::run_headless`]) or paced by a
//! tokio interval ([`Session::run_realtime`]).
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its runners
//! - [`api`] exposes the seams hosts plug into: input sources, presentation
//!   sinks and the error type
pub mod api;
pub mod session;

pub use api::{
    IdleInput, InputSource, PresentationSink, RecordingSink, Result, RuntimeError, ScriptedInput,
    TracingSink,
};
pub use session::{RunSummary, Session};
