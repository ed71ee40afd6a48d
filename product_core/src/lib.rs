//! # Data Product Core
//!
//! Core data structures and types for the Data Product Deployer.
//!
//! This crate provides the fundamental building blocks for modeling,
//! parsing, and working with data product deployment manifests. A deployment
//! is described by a small set of YAML manifests: a bundle listing the
//! deployable resource files, an optional data-quality suite, the data
//! product itself, an optional scanner that registers the product with the
//! catalog, and the secret declarations the other manifests reference.
//!
//! ## Key Concepts
//!
//! - **Manifest**: the typed model of one deployment YAML document
//! - **DeploymentWorkspace**: the parsed manifest set of one directory
//! - **LintReport**: the outcome of checking a workspace's consistency rules
//!
//! ## Example
//!
//! ```rust
//! use product_core::{Alignment, BundleBuilder, ProductBuilder, SecretPurpose};
//!
//! let bundle = BundleBuilder::new("weather-source-bundle")
//!     .workspace("public")
//!     .resource("ingestion", "resources/ingestion.yaml")
//!     .build();
//!
//! let product = ProductBuilder::new("weather-source", Alignment::Source)
//!     .purpose("Realtime weather ingestion")
//!     .workspace("public")
//!     .compute("runnable-default")
//!     .cluster("minervaa")
//!     .secret("weather-api-cred", SecretPurpose::Api)
//!     .build();
//! ```

pub mod builder;
pub mod error;
pub mod lint;
pub mod manifest;
pub mod workspace;

pub use builder::*;
pub use error::*;
pub use lint::*;
pub use manifest::*;
pub use workspace::*;
