//! Placeholder substitution checks.
//!
//! Manifests ship with placeholder values the operator must replace before
//! deploying: the literal `clustername` stands in for a real cluster
//! identifier, and `${...}` interpolation tokens mark values that were meant
//! to be filled in. Anything left over reaches the platform verbatim and
//! fails there, so it is caught here instead.

use product_core::DeploymentWorkspace;
use regex::Regex;
use serde_json::Value;

use crate::LintError;

/// The placeholder the guide ships for the cluster identifier.
const CLUSTER_PLACEHOLDER: &str = "clustername";

/// Validates that placeholders were substituted and required keys are set.
pub struct PlaceholderValidator {
    token: Regex,
}

impl PlaceholderValidator {
    /// Creates a new placeholder validator.
    pub fn new() -> Self {
        Self {
            token: Regex::new(r"\$\{[^}]*\}").expect("token pattern is valid"),
        }
    }

    /// Validates the workspace's manifests.
    pub fn validate(&self, workspace: &DeploymentWorkspace) -> Vec<LintError> {
        let mut errors = Vec::new();

        if let Some(product) = &workspace.product {
            let m = &product.manifest;
            if m.cluster == CLUSTER_PLACEHOLDER {
                errors.push(LintError::placeholder("product.cluster", CLUSTER_PLACEHOLDER));
            }
            for (field, value) in [
                ("product.workspace", &m.workspace),
                ("product.compute", &m.compute),
                ("product.cluster", &m.cluster),
            ] {
                if value.trim().is_empty() {
                    errors.push(LintError::EmptyField(field.to_string()));
                }
            }
            self.scan_manifest("product", m, &mut errors);
        }

        if let Some(scanner) = &workspace.scanner {
            if scanner.manifest.workspace.trim().is_empty() {
                errors.push(LintError::EmptyField("scanner.workspace".to_string()));
            }
            self.scan_manifest("scanner", &scanner.manifest, &mut errors);
        }

        if let Some(bundle) = &workspace.bundle {
            self.scan_manifest("bundle", &bundle.manifest, &mut errors);
        }

        if let Some(quality) = &workspace.quality {
            self.scan_manifest("quality", &quality.manifest, &mut errors);
        }

        for secret in &workspace.secrets {
            self.scan_manifest("secret", &secret.manifest, &mut errors);
        }

        errors
    }

    fn scan_manifest<T: serde::Serialize>(
        &self,
        prefix: &str,
        manifest: &T,
        errors: &mut Vec<LintError>,
    ) {
        let value = serde_json::to_value(manifest).expect("manifest serializes to JSON");
        self.scan_value(prefix, &value, errors);
    }

    fn scan_value(&self, path: &str, value: &Value, errors: &mut Vec<LintError>) {
        match value {
            Value::String(s) => {
                if let Some(found) = self.token.find(s) {
                    errors.push(LintError::UnresolvedToken {
                        field: path.to_string(),
                        token: found.as_str().to_string(),
                    });
                }
            }
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.scan_value(&format!("{path}[{i}]"), item, errors);
                }
            }
            Value::Object(map) => {
                for (key, item) in map {
                    self.scan_value(&format!("{path}.{key}"), item, errors);
                }
            }
            _ => {}
        }
    }
}

impl Default for PlaceholderValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_core::{Alignment, BundleBuilder, Located, ProductBuilder};
    use pretty_assertions::assert_eq;

    fn workspace_with_cluster(cluster: &str) -> DeploymentWorkspace {
        let mut ws = DeploymentWorkspace::new("/tmp/deploy");
        ws.product = Some(Located::new(
            "/tmp/deploy/product.yaml",
            ProductBuilder::new("weather-source", Alignment::Source)
                .workspace("public")
                .compute("runnable-default")
                .cluster(cluster)
                .build(),
        ));
        ws
    }

    #[test]
    fn test_substituted_cluster_passes() {
        let errors = PlaceholderValidator::new().validate(&workspace_with_cluster("minervaa"));
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_surviving_cluster_placeholder() {
        let errors = PlaceholderValidator::new().validate(&workspace_with_cluster("clustername"));
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LintError::SurvivingPlaceholder { .. }));
    }

    #[test]
    fn test_empty_compute() {
        let mut ws = workspace_with_cluster("minervaa");
        ws.product.as_mut().unwrap().manifest.compute = "  ".to_string();

        let errors = PlaceholderValidator::new().validate(&ws);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LintError::EmptyField(_)));
    }

    #[test]
    fn test_unresolved_token_in_product() {
        let mut ws = workspace_with_cluster("minervaa");
        ws.product.as_mut().unwrap().manifest.purpose =
            Some("Ingestion for ${TEAM_NAME}".to_string());

        let errors = PlaceholderValidator::new().validate(&ws);
        assert_eq!(errors.len(), 1);
        match &errors[0] {
            LintError::UnresolvedToken { field, token } => {
                assert_eq!(field, "product.purpose");
                assert_eq!(token, "${TEAM_NAME}");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unresolved_token_in_bundle_resource() {
        let mut ws = DeploymentWorkspace::new("/tmp/deploy");
        ws.bundle = Some(Located::new(
            "/tmp/deploy/bundle.yaml",
            BundleBuilder::new("b")
                .resource("ingestion", "resources/${ENV}/ingestion.yaml")
                .build(),
        ));

        let errors = PlaceholderValidator::new().validate(&ws);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LintError::UnresolvedToken { .. }));
    }

    #[test]
    fn test_empty_workspace_passes() {
        let ws = DeploymentWorkspace::new("/tmp/deploy");
        let errors = PlaceholderValidator::new().validate(&ws);
        assert!(errors.is_empty());
    }
}
