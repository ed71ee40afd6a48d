//! Deployment plan construction.
//!
//! A deployment is a fixed, strictly sequential command sequence against the
//! external platform CLI: apply the bundle, apply the quality suite, apply
//! the product, apply the scanner. Steps whose manifest is absent are
//! skipped at plan time; each remaining step runs only after the previous
//! one succeeded.

use std::path::PathBuf;

use product_core::{DeploymentWorkspace, ManifestKind};

use crate::{DeployError, Result};

/// The step kinds of the deployment sequence, in apply order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// `apply` the bundle manifest
    Bundle,
    /// `apply` the data-quality manifest
    Quality,
    /// `product apply` the data-product manifest
    Product,
    /// `apply` the scanner manifest
    Scanner,
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepKind::Bundle => "bundle",
            StepKind::Quality => "quality",
            StepKind::Product => "product",
            StepKind::Scanner => "scanner",
        };
        write!(f, "{}", s)
    }
}

/// One invocation of the external platform CLI.
#[derive(Debug, Clone)]
pub struct DeployStep {
    /// What the step applies
    pub kind: StepKind,

    /// Manifest file passed via `-f`
    pub manifest: PathBuf,

    /// CLI verb tokens preceding `-f` (e.g., `["apply"]` or
    /// `["product", "apply"]`)
    pub verb: Vec<String>,

    /// Extra arguments appended after the manifest path
    pub extra_args: Vec<String>,
}

impl DeployStep {
    fn new(kind: StepKind, manifest: PathBuf, verb: &[&str]) -> Self {
        Self {
            kind,
            manifest,
            verb: verb.iter().map(|s| s.to_string()).collect(),
            extra_args: Vec::new(),
        }
    }

    /// The argument vector for this step, without the binary itself.
    pub fn args(&self) -> Vec<String> {
        let mut args = self.verb.clone();
        args.push("-f".to_string());
        args.push(self.manifest.display().to_string());
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Renders the full command line for display.
    pub fn render(&self, ctl: &str) -> String {
        let mut parts = vec![ctl.to_string()];
        parts.extend(self.args());
        parts.join(" ")
    }
}

/// The ordered step sequence of one deployment.
#[derive(Debug, Clone)]
pub struct DeployPlan {
    /// Steps in apply order
    pub steps: Vec<DeployStep>,
}

impl DeployPlan {
    /// Builds the deployment plan for a workspace.
    ///
    /// The bundle and the product are required; quality and scanner steps
    /// are added only when their manifest is present.
    pub fn from_workspace(workspace: &DeploymentWorkspace) -> Result<Self> {
        let bundle = workspace
            .bundle
            .as_ref()
            .ok_or(DeployError::MissingManifest(ManifestKind::Bundle))?;
        let product = workspace
            .product
            .as_ref()
            .ok_or(DeployError::MissingManifest(ManifestKind::Product))?;

        let mut steps = Vec::new();

        steps.push(DeployStep::new(
            StepKind::Bundle,
            bundle.path.clone(),
            &["apply"],
        ));

        if let Some(quality) = &workspace.quality {
            steps.push(DeployStep::new(
                StepKind::Quality,
                quality.path.clone(),
                &["apply"],
            ));
        }

        // The product manifest may override its apply verb via `command`
        let mut product_step = match &product.manifest.command {
            Some(command) => DeployStep {
                kind: StepKind::Product,
                manifest: product.path.clone(),
                verb: command.name.split_whitespace().map(String::from).collect(),
                extra_args: command.args.clone(),
            },
            None => DeployStep::new(
                StepKind::Product,
                product.path.clone(),
                &["product", "apply"],
            ),
        };
        if product_step.verb.is_empty() {
            product_step.verb = vec!["product".to_string(), "apply".to_string()];
        }
        steps.push(product_step);

        if let Some(scanner) = &workspace.scanner {
            steps.push(DeployStep::new(
                StepKind::Scanner,
                scanner.path.clone(),
                &["apply"],
            ));
        }

        Ok(Self { steps })
    }

    /// Number of steps in the plan.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_core::{
        Alignment, BundleBuilder, CommandSpec, Located, ProductBuilder, QualityManifest,
        ScannerManifest,
    };
    use pretty_assertions::assert_eq;

    fn workspace() -> DeploymentWorkspace {
        let mut ws = DeploymentWorkspace::new("/deploy");
        ws.bundle = Some(Located::new(
            "/deploy/bundle.yaml",
            BundleBuilder::new("b").build(),
        ));
        ws.product = Some(Located::new(
            "/deploy/data-product.yaml",
            ProductBuilder::new("weather-source", Alignment::Source)
                .workspace("public")
                .compute("runnable-default")
                .cluster("minervaa")
                .build(),
        ));
        ws
    }

    #[test]
    fn test_minimal_plan() {
        let plan = DeployPlan::from_workspace(&workspace()).unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.steps[0].kind, StepKind::Bundle);
        assert_eq!(plan.steps[1].kind, StepKind::Product);
        assert_eq!(
            plan.steps[0].render("dataos-ctl"),
            "dataos-ctl apply -f /deploy/bundle.yaml"
        );
        assert_eq!(
            plan.steps[1].render("dataos-ctl"),
            "dataos-ctl product apply -f /deploy/data-product.yaml"
        );
    }

    #[test]
    fn test_full_plan_order() {
        let mut ws = workspace();
        ws.quality = Some(Located::new(
            "/deploy/quality.yaml",
            QualityManifest {
                name: "q".to_string(),
                dataset: "d".to_string(),
                checks: vec![],
            },
        ));
        ws.scanner = Some(Located::new(
            "/deploy/scanner.yaml",
            ScannerManifest {
                name: "s".to_string(),
                workspace: "public".to_string(),
                data_product: "weather-source".to_string(),
                depends_on: vec![],
            },
        ));

        let plan = DeployPlan::from_workspace(&ws).unwrap();
        let kinds: Vec<StepKind> = plan.steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Bundle,
                StepKind::Quality,
                StepKind::Product,
                StepKind::Scanner
            ]
        );
    }

    #[test]
    fn test_command_spec_overrides_verb() {
        let mut ws = workspace();
        ws.product.as_mut().unwrap().manifest.command = Some(CommandSpec {
            name: "product apply".to_string(),
            args: vec!["--publish".to_string()],
        });

        let plan = DeployPlan::from_workspace(&ws).unwrap();
        assert_eq!(
            plan.steps[1].render("dataos-ctl"),
            "dataos-ctl product apply -f /deploy/data-product.yaml --publish"
        );
    }

    #[test]
    fn test_missing_bundle() {
        let mut ws = workspace();
        ws.bundle = None;

        let result = DeployPlan::from_workspace(&ws);
        assert!(matches!(
            result.unwrap_err(),
            DeployError::MissingManifest(ManifestKind::Bundle)
        ));
    }

    #[test]
    fn test_missing_product() {
        let mut ws = workspace();
        ws.product = None;

        let result = DeployPlan::from_workspace(&ws);
        assert!(matches!(
            result.unwrap_err(),
            DeployError::MissingManifest(ManifestKind::Product)
        ));
    }
}
