//! Data-driven content for the platformer.
//!
//! Level layouts and input scripts are RON files, tuning is a TOML file. All
//! loaders produce `platformer-core` types directly; content never appears in
//! simulation state beyond what the session copies out of it.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, Level, LevelLoader, LoadResult, ScriptLoader};
