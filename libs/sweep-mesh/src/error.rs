//! # Sweep Errors
//!
//! Error types for sweep mesh generation.
//!
//! ## Error Policy
//!
//! - Structural misuse (too few profile points, too few rings) is not an
//!   error: drivers return the unchanged pose and no mesh
//! - Non-finite numbers reaching a movement primitive fail the call
//! - Geometric degeneracies are resolved by epsilon-gated branches

use thiserror::Error;

/// Errors that can occur during sweep generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// A NaN or infinite value reached a movement command.
    #[error("Non-finite value {value} passed to {command}")]
    NonFinite {
        /// Name of the offending command (`forward`, `yaw`, ...)
        command: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A produced mesh failed the structural check.
    #[error("Invalid mesh: {message}")]
    InvalidMesh { message: String },
}

impl SweepError {
    /// Creates a non-finite input error.
    pub fn non_finite(command: &'static str, value: f64) -> Self {
        Self::NonFinite { command, value }
    }

    /// Creates an invalid mesh error.
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }
}

/// Result type alias for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Rejects a non-finite `value` on behalf of `command`.
#[inline]
pub(crate) fn ensure_finite(command: &'static str, value: f64) -> SweepResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SweepError::non_finite(command, value))
    }
}
