use anyhow::{Context, Result};
use product_core::LintContext;
use product_deploy::{DeployConfig, DeployExecutor, DeployPlan};
use product_parser::discover_workspace;
use product_validator::WorkspaceLinter;
use std::path::Path;
use tracing::info;

use crate::output;

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    dir: &str,
    dry_run: bool,
    skip_lint: bool,
    ctl: Option<&str>,
    strict: bool,
    secrets: &[String],
    format: &str,
) -> Result<()> {
    info!("Deploying from: {}", dir);
    info!("Dry run: {}", dry_run);

    let workspace = discover_workspace(Path::new(dir))
        .with_context(|| format!("Failed to discover deployment workspace in: {}", dir))?;

    // Nothing reaches the platform from a workspace that fails lint
    if skip_lint {
        output::print_info("Skipping lint pass");
    } else {
        let mut context = LintContext::new().with_strict(strict);
        for secret in secrets {
            context = context.with_known_secret(secret);
        }

        let report = WorkspaceLinter::new().lint_workspace(&workspace, &context);
        if !report.passed {
            output::print_lint_report(&report, format);
            std::process::exit(1);
        }
        output::print_success(&format!(
            "Lint passed ({} manifests, {} warnings)",
            report.stats.manifests_checked,
            report.warnings.len()
        ));
    }

    let plan = DeployPlan::from_workspace(&workspace)
        .with_context(|| format!("Cannot build a deployment plan for: {}", dir))?;

    let mut builder = DeployConfig::builder().dry_run(dry_run);
    if let Some(ctl) = ctl {
        builder = builder.ctl(ctl);
    }
    let config = builder.build().context("Invalid deployment configuration")?;

    output::print_info(&format!(
        "Applying {} steps with {}",
        plan.len(),
        config.ctl()
    ));

    let executor = DeployExecutor::new(config);
    let report = executor.execute(&plan).await;

    output::print_deploy_report(&report, format);

    if !report.succeeded {
        std::process::exit(1);
    }

    Ok(())
}
