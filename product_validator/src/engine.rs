//! Main lint engine.
//!
//! This module provides the `WorkspaceLinter` that orchestrates all rule
//! validators over a deployment workspace and produces a single report.

use std::time::Instant;

use product_core::{
    DeploymentWorkspace, LintContext, LintReport, LintStats, ManifestLinter, ProductError,
};
use tracing::debug;

use crate::{
    LayoutValidator, PlaceholderValidator, QualityValidator, ResourceValidator, SecretValidator,
    SourceUriValidator,
};

/// Lint engine for deployment workspaces.
///
/// Runs every rule family and produces a comprehensive lint report.
/// Structural findings are errors; advisory findings are warnings unless
/// strict mode promotes them.
///
/// # Example
///
/// ```rust
/// use product_core::{DeploymentWorkspace, LintContext};
/// use product_validator::WorkspaceLinter;
///
/// let workspace = DeploymentWorkspace::new("/tmp/deploy");
/// let linter = WorkspaceLinter::new();
/// let report = linter.lint_workspace(&workspace, &LintContext::new());
///
/// if !report.passed {
///     for error in &report.errors {
///         println!("Error: {}", error);
///     }
/// }
/// ```
pub struct WorkspaceLinter {
    resource_validator: ResourceValidator,
    secret_validator: SecretValidator,
    placeholder_validator: PlaceholderValidator,
    layout_validator: LayoutValidator,
    quality_validator: QualityValidator,
    source_uri_validator: SourceUriValidator,
}

impl WorkspaceLinter {
    /// Creates a new workspace linter.
    pub fn new() -> Self {
        Self {
            resource_validator: ResourceValidator::new(),
            secret_validator: SecretValidator::new(),
            placeholder_validator: PlaceholderValidator::new(),
            layout_validator: LayoutValidator::new(),
            quality_validator: QualityValidator::new(),
            source_uri_validator: SourceUriValidator::new(),
        }
    }

    /// Lints a workspace.
    ///
    /// This is the main lint entry point. It runs every rule family and
    /// returns a comprehensive report.
    pub fn lint_workspace(
        &self,
        workspace: &DeploymentWorkspace,
        context: &LintContext,
    ) -> LintReport {
        let start = Instant::now();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut rules_evaluated = 0;

        debug!(
            manifests = workspace.manifest_count(),
            strict = context.strict,
            "linting workspace {}",
            workspace.root.display()
        );

        // 1. Bundle resources (always run)
        let resource_errors = self.resource_validator.validate(workspace);
        rules_evaluated += 1;
        errors.extend(resource_errors.iter().map(|e| e.to_string()));

        // A broken bundle makes the remaining rules noise in strict mode
        if context.strict && !errors.is_empty() {
            return self.build_report(errors, warnings, workspace, rules_evaluated, start);
        }

        // 2. Placeholder substitution
        let placeholder_errors = self.placeholder_validator.validate(workspace);
        rules_evaluated += 1;
        errors.extend(placeholder_errors.iter().map(|e| e.to_string()));

        // 3. Secret references
        let secret_errors = self.secret_validator.validate(workspace, context);
        rules_evaluated += 1;
        errors.extend(secret_errors.iter().map(|e| e.to_string()));

        // 4. Custom source URI
        let uri_errors = self.source_uri_validator.validate(workspace);
        rules_evaluated += 1;
        errors.extend(uri_errors.iter().map(|e| e.to_string()));

        // 5. Semantic-model folder
        let layout_errors = self.layout_validator.validate(workspace);
        rules_evaluated += 1;
        errors.extend(layout_errors.iter().map(|e| e.to_string()));

        // 6. Quality-check envelopes
        let quality_errors = self.quality_validator.validate(workspace);
        rules_evaluated += 1;
        errors.extend(quality_errors.iter().map(|e| e.to_string()));

        // Advisory findings are warnings unless strict mode promotes them
        let advisories = self
            .secret_validator
            .advisories(workspace)
            .into_iter()
            .chain(self.layout_validator.advisories(workspace))
            .chain(self.quality_validator.advisories(workspace))
            .map(|a| a.to_string());

        if context.strict {
            errors.extend(advisories);
        } else {
            warnings.extend(advisories);
        }

        self.build_report(errors, warnings, workspace, rules_evaluated, start)
    }

    /// Builds a lint report from collected errors and warnings.
    fn build_report(
        &self,
        errors: Vec<String>,
        warnings: Vec<String>,
        workspace: &DeploymentWorkspace,
        rules_evaluated: usize,
        start: Instant,
    ) -> LintReport {
        let resources_checked = workspace
            .bundle
            .as_ref()
            .map(|b| b.manifest.resources.len())
            .unwrap_or(0);

        LintReport {
            passed: errors.is_empty(),
            errors,
            warnings,
            stats: LintStats {
                manifests_checked: workspace.manifest_count(),
                resources_checked,
                rules_evaluated,
                duration_ms: start.elapsed().as_millis() as u64,
            },
        }
    }
}

impl Default for WorkspaceLinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestLinter for WorkspaceLinter {
    fn lint(
        &self,
        workspace: &DeploymentWorkspace,
        context: &LintContext,
    ) -> product_core::LintResult {
        let report = self.lint_workspace(workspace, context);
        if report.passed {
            Ok(())
        } else {
            Err(ProductError::Other(report.errors.join("; ")))
        }
    }
}
