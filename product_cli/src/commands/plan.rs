use anyhow::{Context, Result};
use product_deploy::{DeployConfig, DeployPlan};
use product_parser::discover_workspace;
use std::path::Path;
use tracing::info;

use crate::output;

pub async fn execute(dir: &str, ctl: Option<&str>) -> Result<()> {
    info!("Planning deployment for: {}", dir);

    let workspace = discover_workspace(Path::new(dir))
        .with_context(|| format!("Failed to discover deployment workspace in: {}", dir))?;

    let plan = DeployPlan::from_workspace(&workspace)
        .with_context(|| format!("Cannot build a deployment plan for: {}", dir))?;

    let mut builder = DeployConfig::builder();
    if let Some(ctl) = ctl {
        builder = builder.ctl(ctl);
    }
    let config = builder.build().context("Invalid deployment configuration")?;

    output::print_info(&format!(
        "Deployment plan: {} steps, strictly in order",
        plan.len()
    ));
    println!();
    for (i, step) in plan.steps.iter().enumerate() {
        println!("  {}. [{}] {}", i + 1, step.kind, step.render(config.ctl()));
    }
    println!();
    output::print_info("Each step runs only after the previous one succeeds");

    Ok(())
}
