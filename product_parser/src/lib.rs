//! Parser for deployment manifests (YAML format).
//!
//! This module provides functionality to parse the YAML manifests of a Data
//! Product deployment into their strongly-typed representations, and to
//! discover the full manifest set of a deployment directory.
//!
//! # Example
//!
//! ```rust
//! use product_parser::parse_manifest;
//!
//! let yaml = r#"
//! kind: scanner
//! name: weather-scanner
//! workspace: public
//! data_product: weather-source
//! "#;
//!
//! let manifest = parse_manifest(yaml).expect("Failed to parse manifest");
//! assert_eq!(manifest.name(), "weather-scanner");
//! ```

mod discover;

pub use discover::discover_workspace;

use product_core::{
    BundleManifest, Manifest, ManifestKind, ProductError, ProductManifest, QualityManifest,
    ScannerManifest, SecretManifest,
};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during manifest parsing and discovery.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A manifest of one kind was found where another was expected
    #[error(transparent)]
    KindMismatch(#[from] ProductError),

    /// Unsupported file extension
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// Discovery target is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// More than one manifest of a kind that allows at most one
    #[error("Duplicate {kind} manifest: {first} and {second}")]
    DuplicateManifest {
        /// Manifest kind
        kind: ManifestKind,
        /// First file declaring it
        first: String,
        /// Second file declaring it
        second: String,
    },
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Parse a manifest of any kind from a YAML string.
///
/// The manifest kind is detected from the top-level `kind` key.
///
/// # Example
///
/// ```rust
/// use product_core::ManifestKind;
/// use product_parser::parse_manifest;
///
/// let yaml = r#"
/// kind: secret
/// name: weather-api-cred
/// purpose: api
/// "#;
///
/// let manifest = parse_manifest(yaml).unwrap();
/// assert_eq!(manifest.kind(), ManifestKind::Secret);
/// ```
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    let manifest: Manifest = serde_yaml_ng::from_str(content)?;
    Ok(manifest)
}

/// Parse a bundle manifest from a YAML string.
pub fn parse_bundle(content: &str) -> Result<BundleManifest> {
    Ok(parse_manifest(content)?.into_bundle()?)
}

/// Parse a data-quality manifest from a YAML string.
pub fn parse_quality(content: &str) -> Result<QualityManifest> {
    Ok(parse_manifest(content)?.into_quality()?)
}

/// Parse a data-product manifest from a YAML string.
pub fn parse_product(content: &str) -> Result<ProductManifest> {
    Ok(parse_manifest(content)?.into_product()?)
}

/// Parse a scanner manifest from a YAML string.
pub fn parse_scanner(content: &str) -> Result<ScannerManifest> {
    Ok(parse_manifest(content)?.into_scanner()?)
}

/// Parse a secret declaration from a YAML string.
pub fn parse_secret(content: &str) -> Result<SecretManifest> {
    Ok(parse_manifest(content)?.into_secret()?)
}

/// Check that a path carries a YAML extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not YAML.
pub fn detect_format(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(()),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a manifest from a file.
///
/// The file must carry a `.yaml` or `.yml` extension; the manifest kind is
/// detected from the document's `kind` key.
///
/// # Example
///
/// ```no_run
/// use product_parser::parse_manifest_file;
/// use std::path::Path;
///
/// let manifest = parse_manifest_file(Path::new("deploy/bundle.yaml")).unwrap();
/// println!("Loaded manifest: {}", manifest.name());
/// ```
pub fn parse_manifest_file(path: &Path) -> Result<Manifest> {
    detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_manifest(&content)
}
