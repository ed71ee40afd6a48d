use anyhow::{Context, Result};
use product_core::LintContext;
use product_parser::discover_workspace;
use product_validator::WorkspaceLinter;
use std::path::Path;
use tracing::info;

use crate::output;

pub async fn execute(dir: &str, strict: bool, secrets: &[String], format: &str) -> Result<()> {
    info!("Linting deployment directory: {}", dir);
    info!("Strict mode: {}", strict);

    let workspace = discover_workspace(Path::new(dir))
        .with_context(|| format!("Failed to discover deployment workspace in: {}", dir))?;

    output::print_info(&format!(
        "Workspace discovered: {} manifests in {}",
        workspace.manifest_count(),
        dir
    ));

    let mut context = LintContext::new().with_strict(strict);
    for secret in secrets {
        context = context.with_known_secret(secret);
    }

    let linter = WorkspaceLinter::new();
    let report = linter.lint_workspace(&workspace, &context);

    output::print_lint_report(&report, format);

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
