//! Deployment manifest types.
//!
//! This module contains the typed model of every manifest an operator edits
//! when assembling a Data Product deployment: the bundle, the data-quality
//! checks, the data product itself, the scanner registration, and the secret
//! declarations the other manifests reference.

use serde::{Deserialize, Serialize};

/// A deployment manifest of any kind.
///
/// Manifests are YAML documents discriminated by their top-level `kind` key.
/// Parsing yields this enum; most call sites immediately match on the kind or
/// go through the typed parse entry points instead.
///
/// # Example
///
/// ```rust
/// use product_core::{Manifest, ScannerManifest};
///
/// let manifest = Manifest::Scanner(ScannerManifest {
///     name: "weather-scanner".to_string(),
///     workspace: "public".to_string(),
///     data_product: "weather-source".to_string(),
///     depends_on: vec![],
/// });
/// assert_eq!(manifest.name(), "weather-scanner");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Manifest {
    /// A bundle of deployable resource files
    Bundle(BundleManifest),
    /// Data-quality checks for a dataset
    Quality(QualityManifest),
    /// A registrable data product
    Product(ProductManifest),
    /// A scanner publishing product metadata to the catalog
    Scanner(ScannerManifest),
    /// A named credential declaration
    Secret(SecretManifest),
}

impl Manifest {
    /// Returns the kind of this manifest.
    pub fn kind(&self) -> ManifestKind {
        match self {
            Manifest::Bundle(_) => ManifestKind::Bundle,
            Manifest::Quality(_) => ManifestKind::Quality,
            Manifest::Product(_) => ManifestKind::Product,
            Manifest::Scanner(_) => ManifestKind::Scanner,
            Manifest::Secret(_) => ManifestKind::Secret,
        }
    }

    /// Returns the declared name of this manifest.
    pub fn name(&self) -> &str {
        match self {
            Manifest::Bundle(m) => &m.name,
            Manifest::Quality(m) => &m.name,
            Manifest::Product(m) => &m.name,
            Manifest::Scanner(m) => &m.name,
            Manifest::Secret(m) => &m.name,
        }
    }

    /// Converts into a bundle manifest, or errors with the actual kind.
    pub fn into_bundle(self) -> crate::Result<BundleManifest> {
        match self {
            Manifest::Bundle(m) => Ok(m),
            other => Err(crate::ProductError::KindMismatch {
                expected: ManifestKind::Bundle,
                actual: other.kind(),
            }),
        }
    }

    /// Converts into a quality manifest, or errors with the actual kind.
    pub fn into_quality(self) -> crate::Result<QualityManifest> {
        match self {
            Manifest::Quality(m) => Ok(m),
            other => Err(crate::ProductError::KindMismatch {
                expected: ManifestKind::Quality,
                actual: other.kind(),
            }),
        }
    }

    /// Converts into a product manifest, or errors with the actual kind.
    pub fn into_product(self) -> crate::Result<ProductManifest> {
        match self {
            Manifest::Product(m) => Ok(m),
            other => Err(crate::ProductError::KindMismatch {
                expected: ManifestKind::Product,
                actual: other.kind(),
            }),
        }
    }

    /// Converts into a scanner manifest, or errors with the actual kind.
    pub fn into_scanner(self) -> crate::Result<ScannerManifest> {
        match self {
            Manifest::Scanner(m) => Ok(m),
            other => Err(crate::ProductError::KindMismatch {
                expected: ManifestKind::Scanner,
                actual: other.kind(),
            }),
        }
    }

    /// Converts into a secret manifest, or errors with the actual kind.
    pub fn into_secret(self) -> crate::Result<SecretManifest> {
        match self {
            Manifest::Secret(m) => Ok(m),
            other => Err(crate::ProductError::KindMismatch {
                expected: ManifestKind::Secret,
                actual: other.kind(),
            }),
        }
    }
}

/// The kind of a deployment manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestKind {
    /// Bundle manifest (`kind: bundle`)
    Bundle,
    /// Data-quality manifest (`kind: quality`)
    Quality,
    /// Data-product manifest (`kind: product`)
    Product,
    /// Scanner manifest (`kind: scanner`)
    Scanner,
    /// Secret declaration (`kind: secret`)
    Secret,
}

impl std::fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ManifestKind::Bundle => "bundle",
            ManifestKind::Quality => "quality",
            ManifestKind::Product => "product",
            ManifestKind::Scanner => "scanner",
            ManifestKind::Secret => "secret",
        };
        write!(f, "{}", s)
    }
}

/// A bundle of deployable resource files.
///
/// The bundle is the unit the external CLI applies first: it lists every
/// resource manifest (ingestion jobs, quality workflows, and so on) by
/// relative path, optionally scoped to target workspaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleManifest {
    /// Unique name identifying this bundle
    pub name: String,

    /// Semantic version of the bundle (e.g., "1.0.0")
    pub version: Option<String>,

    /// Human-readable description
    pub description: Option<String>,

    /// Target workspaces the bundle deploys into
    #[serde(default)]
    pub workspaces: Vec<BundleWorkspace>,

    /// Resource files the bundle deploys
    pub resources: Vec<BundleResource>,
}

/// A target workspace declared by a bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleWorkspace {
    /// Workspace name (target namespace)
    pub name: String,

    /// Optional human-readable description
    pub description: Option<String>,

    /// Optional platform layer (e.g., "user", "system")
    pub layer: Option<String>,
}

/// A single deployable resource entry in a bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleResource {
    /// Identifier unique within the bundle
    pub id: String,

    /// Path to the resource manifest, relative to the bundle's directory
    pub file: String,

    /// Workspace this resource deploys into, overriding the bundle default
    pub workspace: Option<String>,

    /// Ids of resources that must be applied before this one
    #[serde(default)]
    pub depends_on: Vec<String>,
}

/// Data-quality checks for a dataset.
///
/// Check definitions are opaque to the deployer: they are authored for an
/// external data-quality framework, and only their envelope (non-empty
/// definition, recognized severity) is validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityManifest {
    /// Unique name identifying this quality suite
    pub name: String,

    /// Dataset the checks run against (e.g., "weather.realtime_data01")
    pub dataset: String,

    /// Check definitions
    pub checks: Vec<QualityCheck>,
}

/// A single data-quality check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityCheck {
    /// Optional name of the check
    pub name: Option<String>,

    /// Check definition, passed through to the external framework verbatim
    pub definition: String,

    /// Severity of a check failure
    #[serde(default)]
    pub severity: Severity,
}

/// Severity of a data-quality check failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Failure blocks the pipeline
    #[default]
    Error,
    /// Failure is reported but does not block
    Warn,
    /// Informational only
    Info,
}

/// A registrable data product.
///
/// The product manifest carries the metadata the catalog displays, the
/// placement keys (`workspace`, `compute`, `cluster`) the platform needs, and
/// the references to previously created secrets its jobs consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductManifest {
    /// Unique name identifying this product
    pub name: String,

    /// Semantic version of the product (e.g., "1.0.0")
    pub version: Option<String>,

    /// What the product is for, shown in the catalog
    pub purpose: Option<String>,

    /// Whether the product aligns to a source or an aggregate
    pub alignment: Alignment,

    /// Target workspace (namespace) the product deploys into
    pub workspace: String,

    /// Compute profile identifier
    pub compute: String,

    /// Deployment cluster identifier
    pub cluster: String,

    /// Teams or individuals collaborating on the product
    #[serde(default)]
    pub collaborators: Vec<String>,

    /// Secrets the product's jobs consume, by reference
    #[serde(default)]
    pub secrets: Vec<SecretRef>,

    /// Custom source URI for source-aligned products
    /// (e.g., `custom://WeatherRealtimeApiSource?url=...`)
    pub source: Option<String>,

    /// Semantic-model folder for aggregate-aligned products, relative to the
    /// product's directory
    pub semantic_model: Option<String>,

    /// How the external CLI applies this product
    pub command: Option<CommandSpec>,
}

/// Alignment of a data product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Source-aligned: ingests from an upstream system
    Source,
    /// Aggregate-aligned: derives from other products via a semantic model
    Aggregate,
}

/// A reference to a previously created secret.
///
/// Multiple references may share the `name` key while differing by purpose,
/// e.g. a read-only git credential and an API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretRef {
    /// Name of the secret, as created on the platform
    pub name: String,

    /// What the secret is used for
    pub purpose: SecretPurpose,
}

/// Declared purpose of a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretPurpose {
    /// Repository credential (e.g., read-only git access)
    Git,
    /// External API credential
    Api,
    /// Anything else
    Other,
}

/// How the external CLI applies a product.
///
/// The default, when absent, is the platform's `product apply` verb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSpec {
    /// CLI verb (e.g., "product apply")
    pub name: String,

    /// Extra arguments appended after the manifest path
    #[serde(default)]
    pub args: Vec<String>,
}

/// A scanner registering a data product with the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerManifest {
    /// Unique name identifying this scanner
    pub name: String,

    /// Target workspace the scanner runs in
    pub workspace: String,

    /// Name of the data product the scanner publishes
    pub data_product: String,

    /// Names of resources that must exist before the scanner runs
    #[serde(default)]
    pub depends_on: Vec<String>,
}

/// A named credential declaration.
///
/// Secret material itself is never modeled; the manifest only records that a
/// credential with this name exists so references to it can be checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretManifest {
    /// Name of the secret
    pub name: String,

    /// What the secret is used for
    pub purpose: SecretPurpose,

    /// Optional human-readable description
    pub description: Option<String>,
}
