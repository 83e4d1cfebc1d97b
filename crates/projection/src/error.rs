//! Error types for projection setup.
//!
//! Transforms themselves never fail; clamps and the iteration fallback keep
//! every call producing a value. Errors only come from building a projection
//! out of bad parameters.

use thiserror::Error;

/// Errors that can occur while configuring a projection.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// A projection parameter is out of its valid range.
    #[error("invalid value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration JSON could not be parsed.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectionError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }
}

/// Result type for projection setup.
pub type Result<T> = std::result::Result<T, ProjectionError>;
