//! Semantic-model folder checks.
//!
//! Aggregate-aligned products carry a semantic-model folder whose structure
//! the platform expects to find unchanged: SQL definitions under `sqls/`,
//! logical tables under `tables/`, and views under `views/`.

use product_core::{Alignment, DeploymentWorkspace};

use crate::LintError;

/// The subfolders a semantic-model folder conventionally contains.
const MODEL_SUBFOLDERS: [&str; 3] = ["sqls", "tables", "views"];

/// Validates the semantic-model folder of an aggregate-aligned product.
pub struct LayoutValidator;

impl LayoutValidator {
    /// Creates a new layout validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates that a declared semantic-model folder exists.
    pub fn validate(&self, workspace: &DeploymentWorkspace) -> Vec<LintError> {
        let mut errors = Vec::new();

        let Some(product) = &workspace.product else {
            return errors;
        };

        if let Some(model) = &product.manifest.semantic_model {
            if !workspace.root.join(model).is_dir() {
                errors.push(LintError::MissingSemanticModel(model.clone()));
            }
        }

        errors
    }

    /// Reports advisory findings: a missing conventional subfolder, or an
    /// aggregate product with no semantic model at all.
    pub fn advisories(&self, workspace: &DeploymentWorkspace) -> Vec<LintError> {
        let mut advisories = Vec::new();

        let Some(product) = &workspace.product else {
            return advisories;
        };
        let m = &product.manifest;

        match &m.semantic_model {
            None => {
                if m.alignment == Alignment::Aggregate {
                    advisories.push(LintError::NoSemanticModelDeclared(m.name.clone()));
                }
            }
            Some(model) => {
                let root = workspace.root.join(model);
                if !root.is_dir() {
                    // Already an error in validate(); nothing useful to add.
                    return advisories;
                }
                for subfolder in MODEL_SUBFOLDERS {
                    if !root.join(subfolder).is_dir() {
                        advisories.push(LintError::MissingModelSubfolder {
                            model: model.clone(),
                            subfolder: subfolder.to_string(),
                        });
                    }
                }
            }
        }

        advisories
    }
}

impl Default for LayoutValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_core::{Located, ProductBuilder};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn aggregate_workspace(dir: &TempDir, model: Option<&str>) -> DeploymentWorkspace {
        let mut builder = ProductBuilder::new("weather-aggregate", Alignment::Aggregate)
            .workspace("public")
            .compute("query-default")
            .cluster("minervaa");
        if let Some(model) = model {
            builder = builder.semantic_model(model);
        }

        let mut ws = DeploymentWorkspace::new(dir.path());
        ws.product = Some(Located::new(
            dir.path().join("product.yaml"),
            builder.build(),
        ));
        ws
    }

    fn create_model(dir: &TempDir, subfolders: &[&str]) {
        for sub in subfolders {
            std::fs::create_dir_all(dir.path().join("model").join(sub)).unwrap();
        }
    }

    #[test]
    fn test_intact_model_folder() {
        let dir = TempDir::new().unwrap();
        create_model(&dir, &["sqls", "tables", "views"]);
        let ws = aggregate_workspace(&dir, Some("model"));

        let validator = LayoutValidator::new();
        assert!(validator.validate(&ws).is_empty());
        assert!(validator.advisories(&ws).is_empty());
    }

    #[test]
    fn test_missing_model_folder() {
        let dir = TempDir::new().unwrap();
        let ws = aggregate_workspace(&dir, Some("model"));

        let errors = LayoutValidator::new().validate(&ws);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LintError::MissingSemanticModel(_)));
    }

    #[test]
    fn test_missing_subfolder_is_advisory() {
        let dir = TempDir::new().unwrap();
        create_model(&dir, &["sqls", "tables"]);
        let ws = aggregate_workspace(&dir, Some("model"));

        let validator = LayoutValidator::new();
        assert!(validator.validate(&ws).is_empty());

        let advisories = validator.advisories(&ws);
        assert_eq!(advisories.len(), 1);
        match &advisories[0] {
            LintError::MissingModelSubfolder { subfolder, .. } => assert_eq!(subfolder, "views"),
            other => panic!("unexpected advisory: {:?}", other),
        }
    }

    #[test]
    fn test_aggregate_without_model_is_advisory() {
        let dir = TempDir::new().unwrap();
        let ws = aggregate_workspace(&dir, None);

        let validator = LayoutValidator::new();
        assert!(validator.validate(&ws).is_empty());

        let advisories = validator.advisories(&ws);
        assert_eq!(advisories.len(), 1);
        assert!(matches!(advisories[0], LintError::NoSemanticModelDeclared(_)));
    }

    #[test]
    fn test_source_product_needs_no_model() {
        let dir = TempDir::new().unwrap();
        let mut ws = aggregate_workspace(&dir, None);
        ws.product.as_mut().unwrap().manifest.alignment = Alignment::Source;

        let validator = LayoutValidator::new();
        assert!(validator.validate(&ws).is_empty());
        assert!(validator.advisories(&ws).is_empty());
    }
}
