//! Common error infrastructure for platformer-core.
//!
//! The tick itself never fails: blocked moves are ordinary `false` results and
//! out-of-range lookups classify as solid. Errors only exist for contract
//! violations detected while loading a level or validating configuration,
//! before the tick loop starts.
//!
//! Domain-specific errors (`LevelError`, `ConfigError`) live next to the data
//! they validate and implement [`GameError`] for uniform classification.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be corrected and retried
/// - **Fatal**: the session cannot start with this data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, e.g. an out-of-range tuning value.
    Validation,

    /// Unusable level data, e.g. a zero-area collision raster.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all platformer-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable `DOMAIN_VARIANT` code for logging and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
