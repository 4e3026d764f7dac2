//! Error types for the area-selector-core library.
//!
//! Gesture input never fails: a rejected candidate simply leaves the
//! selection as it was. The variants here cover setup mistakes (bad bounds,
//! an initial selection that breaks an invariant) and loading of
//! configuration or recorded gesture scripts.

use crate::constraints::Rejection;
use crate::geometry::Rect;
use thiserror::Error;

/// Errors that can occur within the area-selector-core library.
#[derive(Error, Debug)]
pub enum SelectorError {
    /// Configuration-related errors (unparsable or out-of-range values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The container bounds are empty, negative or not finite.
    #[error("Invalid container bounds: {width}x{height}")]
    InvalidContainer { width: f64, height: f64 },

    /// A selection handed to the engine at setup time breaks an invariant.
    #[error("Invalid selection {selection:?}: {reason}")]
    InvalidSelection { selection: Rect, reason: Rejection },

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SelectorError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// A convenient alias for Result with [`SelectorError`].
pub type Result<T> = std::result::Result<T, SelectorError>;
