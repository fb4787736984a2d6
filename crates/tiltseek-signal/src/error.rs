//! Error types for signal construction and sample submission.

use thiserror::Error;

/// Error type for tilt signal operations.
///
/// Configuration errors are raised at construction time and are not
/// recoverable internally; the caller must reconstruct with valid
/// parameters. Sample errors leave all filter state untouched, so the
/// caller may skip the offending sample and continue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    /// Construction parameters violate an invariant.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Which invariant was violated.
        reason: String,
    },

    /// A submitted raw sample was NaN or infinite.
    #[error("invalid sample: {value} is not finite")]
    InvalidSample {
        /// The offending raw value.
        value: f32,
    },
}

impl SignalError {
    /// Shorthand for an [`InvalidConfiguration`](Self::InvalidConfiguration) error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// A specialized `Result` type for tilt signal operations.
pub type SignalResult<T> = Result<T, SignalError>;
