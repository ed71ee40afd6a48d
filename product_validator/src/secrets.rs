//! Secret reference checks.
//!
//! Every secret a manifest references must correspond to a previously created
//! secret: either a declaration in the workspace or a name the operator
//! supplied as already existing on the platform.

use std::collections::HashSet;

use product_core::{DeploymentWorkspace, LintContext, SecretPurpose};

use crate::LintError;

/// Validates secret references against declared secrets.
pub struct SecretValidator;

impl SecretValidator {
    /// Creates a new secret validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates that every referenced secret is declared.
    pub fn validate(
        &self,
        workspace: &DeploymentWorkspace,
        context: &LintContext,
    ) -> Vec<LintError> {
        let declared = self.declared_names(workspace, context);

        let mut errors = Vec::new();
        if let Some(product) = &workspace.product {
            for secret in &product.manifest.secrets {
                if !declared.contains(secret.name.as_str()) {
                    errors.push(LintError::unknown_secret(
                        &secret.name,
                        purpose_name(secret.purpose),
                    ));
                }
            }
        }
        errors
    }

    /// Reports declared secrets that nothing references.
    ///
    /// These are advisory: an unused declaration is usually a leftover from a
    /// renamed reference, not a deployment blocker.
    pub fn advisories(&self, workspace: &DeploymentWorkspace) -> Vec<LintError> {
        let referenced: HashSet<&str> = workspace
            .product
            .iter()
            .flat_map(|p| p.manifest.secrets.iter())
            .map(|s| s.name.as_str())
            .collect();

        workspace
            .secrets
            .iter()
            .filter(|s| !referenced.contains(s.manifest.name.as_str()))
            .map(|s| LintError::UnusedSecret(s.manifest.name.clone()))
            .collect()
    }

    fn declared_names<'a>(
        &self,
        workspace: &'a DeploymentWorkspace,
        context: &'a LintContext,
    ) -> HashSet<&'a str> {
        workspace
            .declared_secrets()
            .into_iter()
            .chain(context.known_secrets.iter().map(String::as_str))
            .collect()
    }
}

impl Default for SecretValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn purpose_name(purpose: SecretPurpose) -> &'static str {
    match purpose {
        SecretPurpose::Git => "git",
        SecretPurpose::Api => "api",
        SecretPurpose::Other => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_core::{
        Alignment, Located, ProductBuilder, SecretManifest,
    };

    fn workspace_with_product(secrets: &[(&str, SecretPurpose)]) -> DeploymentWorkspace {
        let mut builder = ProductBuilder::new("weather-source", Alignment::Source)
            .workspace("public")
            .compute("runnable-default")
            .cluster("minervaa");
        for (name, purpose) in secrets {
            builder = builder.secret(*name, *purpose);
        }

        let mut ws = DeploymentWorkspace::new("/tmp/deploy");
        ws.product = Some(Located::new("/tmp/deploy/product.yaml", builder.build()));
        ws
    }

    fn declare(ws: &mut DeploymentWorkspace, name: &str, purpose: SecretPurpose) {
        ws.secrets.push(Located::new(
            format!("/tmp/deploy/{name}.yaml"),
            SecretManifest {
                name: name.to_string(),
                purpose,
                description: None,
            },
        ));
    }

    #[test]
    fn test_all_references_declared() {
        let mut ws = workspace_with_product(&[
            ("gitrepocred-r", SecretPurpose::Git),
            ("weather-api-cred", SecretPurpose::Api),
        ]);
        declare(&mut ws, "gitrepocred-r", SecretPurpose::Git);
        declare(&mut ws, "weather-api-cred", SecretPurpose::Api);

        let errors = SecretValidator::new().validate(&ws, &LintContext::new());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_unknown_secret() {
        let ws = workspace_with_product(&[("weather-api-cred", SecretPurpose::Api)]);

        let errors = SecretValidator::new().validate(&ws, &LintContext::new());
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LintError::UnknownSecret { .. }));
    }

    #[test]
    fn test_externally_known_secret() {
        let ws = workspace_with_product(&[("weather-api-cred", SecretPurpose::Api)]);
        let context = LintContext::new().with_known_secret("weather-api-cred");

        let errors = SecretValidator::new().validate(&ws, &context);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unused_secret_advisory() {
        let mut ws = workspace_with_product(&[]);
        declare(&mut ws, "stale-cred", SecretPurpose::Other);

        let advisories = SecretValidator::new().advisories(&ws);
        assert_eq!(advisories.len(), 1);
        assert!(matches!(advisories[0], LintError::UnusedSecret(_)));
    }

    #[test]
    fn test_same_name_different_purposes() {
        // Multiple references may share the key name while differing by
        // declared purpose; one declaration satisfies both.
        let mut ws = workspace_with_product(&[
            ("shared-cred", SecretPurpose::Git),
            ("shared-cred", SecretPurpose::Api),
        ]);
        declare(&mut ws, "shared-cred", SecretPurpose::Other);

        let errors = SecretValidator::new().validate(&ws, &LintContext::new());
        assert!(errors.is_empty());
    }
}
