//! Error types for deployment manifests.
//!
//! This module defines the errors that can occur when working with manifests
//! outside of parsing and linting, which carry their own error types.

use thiserror::Error;

use crate::ManifestKind;

/// Result type for manifest operations.
pub type Result<T> = std::result::Result<T, ProductError>;

/// Main error type for manifest operations.
#[derive(Error, Debug)]
pub enum ProductError {
    /// A manifest of one kind was found where another was expected
    #[error("Expected a {expected} manifest, found {actual}")]
    KindMismatch {
        /// Expected manifest kind
        expected: ManifestKind,
        /// Actual manifest kind
        actual: ManifestKind,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
