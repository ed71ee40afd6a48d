//! Quality-check envelope checks.
//!
//! Check definitions belong to the external data-quality framework and stay
//! opaque here; only their envelope is validated.

use product_core::DeploymentWorkspace;

use crate::LintError;

/// Validates the envelope of a workspace's quality manifest.
pub struct QualityValidator;

impl QualityValidator {
    /// Creates a new quality validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates that every check carries a definition.
    pub fn validate(&self, workspace: &DeploymentWorkspace) -> Vec<LintError> {
        let Some(quality) = &workspace.quality else {
            return Vec::new();
        };

        quality
            .manifest
            .checks
            .iter()
            .enumerate()
            .filter(|(_, check)| check.definition.trim().is_empty())
            .map(|(index, _)| LintError::EmptyCheckDefinition(index))
            .collect()
    }

    /// Reports a quality suite with no checks at all.
    pub fn advisories(&self, workspace: &DeploymentWorkspace) -> Vec<LintError> {
        match &workspace.quality {
            Some(quality) if quality.manifest.checks.is_empty() => {
                vec![LintError::NoChecksDeclared(quality.manifest.name.clone())]
            }
            _ => Vec::new(),
        }
    }
}

impl Default for QualityValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_core::{Located, QualityCheck, QualityManifest, Severity};
    use pretty_assertions::assert_eq;

    fn workspace_with_checks(checks: Vec<QualityCheck>) -> DeploymentWorkspace {
        let mut ws = DeploymentWorkspace::new("/tmp/deploy");
        ws.quality = Some(Located::new(
            "/tmp/deploy/quality.yaml",
            QualityManifest {
                name: "weather-quality".to_string(),
                dataset: "weather.realtime_data01".to_string(),
                checks,
            },
        ));
        ws
    }

    fn check(definition: &str) -> QualityCheck {
        QualityCheck {
            name: None,
            definition: definition.to_string(),
            severity: Severity::Error,
        }
    }

    #[test]
    fn test_valid_checks() {
        let ws = workspace_with_checks(vec![check("row_count > 0")]);
        let validator = QualityValidator::new();
        assert!(validator.validate(&ws).is_empty());
        assert!(validator.advisories(&ws).is_empty());
    }

    #[test]
    fn test_empty_definition() {
        let ws = workspace_with_checks(vec![check("row_count > 0"), check("   ")]);

        let errors = QualityValidator::new().validate(&ws);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LintError::EmptyCheckDefinition(1)));
    }

    #[test]
    fn test_no_checks_is_advisory() {
        let ws = workspace_with_checks(vec![]);
        let validator = QualityValidator::new();
        assert!(validator.validate(&ws).is_empty());

        let advisories = validator.advisories(&ws);
        assert_eq!(advisories.len(), 1);
        assert!(matches!(advisories[0], LintError::NoChecksDeclared(_)));
    }

    #[test]
    fn test_no_quality_manifest() {
        let ws = DeploymentWorkspace::new("/tmp/deploy");
        let validator = QualityValidator::new();
        assert!(validator.validate(&ws).is_empty());
        assert!(validator.advisories(&ws).is_empty());
    }
}
