//! Public API surface for hosts embedding a [`Session`](crate::Session).
mod errors;
mod input;
mod sink;

pub use errors::{Result, RuntimeError};
pub use input::{IdleInput, InputSource, ScriptedInput};
pub use sink::{PresentationSink, RecordingSink, TracingSink};
