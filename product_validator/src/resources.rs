//! Bundle resource checks.
//!
//! Validates that every resource file a bundle references exists on disk,
//! that resource ids are unique, and that dependency references resolve to
//! declared resources.

use std::collections::HashSet;
use std::path::{Component, Path};

use product_core::DeploymentWorkspace;

use crate::LintError;

/// Validates the resource entries of a workspace's bundle.
pub struct ResourceValidator;

impl ResourceValidator {
    /// Creates a new resource validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates the bundle's resource entries.
    ///
    /// Returns a list of lint errors. An empty list indicates success.
    pub fn validate(&self, workspace: &DeploymentWorkspace) -> Vec<LintError> {
        let mut errors = Vec::new();

        let Some(bundle) = &workspace.bundle else {
            errors.push(LintError::MissingBundle);
            return errors;
        };

        let ids: HashSet<&str> = bundle
            .manifest
            .resources
            .iter()
            .map(|r| r.id.as_str())
            .collect();

        let mut seen = HashSet::new();
        for resource in &bundle.manifest.resources {
            if !seen.insert(&resource.id) {
                errors.push(LintError::DuplicateResourceId(resource.id.clone()));
            }

            if !is_yaml(&resource.file) {
                errors.push(LintError::NonYamlResource {
                    id: resource.id.clone(),
                    file: resource.file.clone(),
                });
                continue;
            }

            if escapes_root(Path::new(&resource.file)) {
                errors.push(LintError::PathEscapesWorkspace {
                    id: resource.id.clone(),
                    file: resource.file.clone(),
                });
                continue;
            }

            if !workspace.root.join(&resource.file).is_file() {
                errors.push(LintError::missing_file(&resource.id, &resource.file));
            }

            for dependency in &resource.depends_on {
                if !ids.contains(dependency.as_str()) {
                    errors.push(LintError::dangling(&resource.id, dependency));
                }
            }
        }

        errors
    }
}

impl Default for ResourceValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn is_yaml(file: &str) -> bool {
    matches!(
        Path::new(file).extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
    )
}

/// Absolute paths and paths with `..` components both leave the workspace.
fn escapes_root(path: &Path) -> bool {
    path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir))
}
