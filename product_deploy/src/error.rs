//! Error types for deployment operations.

use product_core::ManifestKind;
use thiserror::Error;

/// Result type for deployment operations.
pub type Result<T> = std::result::Result<T, DeployError>;

/// Errors that can occur while planning or running a deployment.
#[derive(Debug, Error)]
pub enum DeployError {
    /// The workspace lacks a manifest the deployment sequence needs
    #[error("Cannot deploy: workspace has no {0} manifest")]
    MissingManifest(ManifestKind),

    /// The deployment configuration is invalid
    #[error("Invalid deployment configuration: {0}")]
    InvalidConfig(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
