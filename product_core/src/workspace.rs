//! Deployment workspace representation.
//!
//! A deployment workspace is the parsed content of one deployment directory:
//! at most one bundle, quality suite, product, and scanner, plus any number of
//! secret declarations, each remembered together with the file it came from.

use std::path::{Path, PathBuf};

use crate::{
    BundleManifest, ProductManifest, QualityManifest, ScannerManifest, SecretManifest,
};

/// A manifest together with the file it was parsed from.
#[derive(Debug, Clone)]
pub struct Located<T> {
    /// Path of the source file
    pub path: PathBuf,

    /// The parsed manifest
    pub manifest: T,
}

impl<T> Located<T> {
    /// Creates a located manifest.
    pub fn new(path: impl Into<PathBuf>, manifest: T) -> Self {
        Self {
            path: path.into(),
            manifest,
        }
    }
}

/// The parsed manifest set of one deployment directory.
#[derive(Debug, Clone)]
pub struct DeploymentWorkspace {
    /// Directory the manifests were discovered in; resource paths resolve
    /// relative to it
    pub root: PathBuf,

    /// The bundle manifest, if present
    pub bundle: Option<Located<BundleManifest>>,

    /// The data-quality manifest, if present
    pub quality: Option<Located<QualityManifest>>,

    /// The data-product manifest, if present
    pub product: Option<Located<ProductManifest>>,

    /// The scanner manifest, if present
    pub scanner: Option<Located<ScannerManifest>>,

    /// Secret declarations found in the workspace
    pub secrets: Vec<Located<SecretManifest>>,
}

impl DeploymentWorkspace {
    /// Creates an empty workspace rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            bundle: None,
            quality: None,
            product: None,
            scanner: None,
            secrets: Vec::new(),
        }
    }

    /// Returns the workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of manifests in the workspace.
    pub fn manifest_count(&self) -> usize {
        self.bundle.is_some() as usize
            + self.quality.is_some() as usize
            + self.product.is_some() as usize
            + self.scanner.is_some() as usize
            + self.secrets.len()
    }

    /// Names of the secrets declared in the workspace.
    pub fn declared_secrets(&self) -> Vec<&str> {
        self.secrets
            .iter()
            .map(|s| s.manifest.name.as_str())
            .collect()
    }

    /// Whether the workspace has the manifests a deployment needs: a bundle
    /// and a product. Quality and scanner steps are optional.
    pub fn is_deployable(&self) -> bool {
        self.bundle.is_some() && self.product.is_some()
    }
}
