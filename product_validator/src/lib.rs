//! # Data Product Validator
//!
//! Lint engine for deployment workspaces. This crate provides the
//! consistency checks a Data Product deployment must pass before the external
//! CLI ever sees it:
//!
//! - Bundle resources (referenced files exist, ids unique, dependencies resolve)
//! - Secret references (every referenced secret was declared beforehand)
//! - Placeholder substitution (no surviving `clustername`, no `${...}` tokens)
//! - Semantic-model folder layout for aggregate-aligned products
//! - Custom source URI shape, with credentials redacted from every finding
//! - Quality-check envelopes (definitions stay opaque, their shape does not)
//!
//! ## Example
//!
//! ```rust
//! use product_core::{DeploymentWorkspace, LintContext};
//! use product_validator::WorkspaceLinter;
//!
//! let workspace = DeploymentWorkspace::new("/tmp/deploy");
//! let linter = WorkspaceLinter::new();
//!
//! let report = linter.lint_workspace(&workspace, &LintContext::new());
//! if report.passed {
//!     println!("Lint passed!");
//! } else {
//!     println!("Lint failed: {:?}", report.errors);
//! }
//! ```

mod engine;
mod error;
mod layout;
mod placeholders;
mod quality;
mod resources;
mod secrets;
mod source_uri;

pub use engine::*;
pub use error::*;
pub use layout::*;
pub use placeholders::*;
pub use quality::*;
pub use resources::*;
pub use secrets::*;
pub use source_uri::*;
