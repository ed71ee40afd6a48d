use anyhow::{Context, Result};
use product_core::Manifest;
use product_parser::parse_manifest_file;
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::output;

pub async fn execute(manifest_path: &str, format: &str) -> Result<()> {
    info!("Checking manifest: {}", manifest_path);

    let path = Path::new(manifest_path);
    let manifest = parse_manifest_file(path)
        .with_context(|| format!("Failed to parse manifest file: {}", manifest_path))?;

    if format == "json" {
        let output = json!({
            "kind": manifest.kind().to_string(),
            "name": manifest.name(),
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    output::print_info(&format!(
        "Manifest loaded: {} ({})",
        manifest.name(),
        manifest.kind()
    ));
    output::print_success("Manifest is valid");

    println!("\nManifest Summary:");
    println!("  Name:  {}", manifest.name());
    println!("  Kind:  {}", manifest.kind());

    match &manifest {
        Manifest::Bundle(bundle) => {
            println!("  Version:    {}", bundle.version.as_deref().unwrap_or("N/A"));
            println!("  Workspaces: {}", bundle.workspaces.len());
            println!("  Resources:  {}", bundle.resources.len());
            for resource in &bundle.resources {
                println!("    - {} ({})", resource.id, resource.file);
            }
        }
        Manifest::Quality(quality) => {
            println!("  Dataset: {}", quality.dataset);
            println!("  Checks:  {}", quality.checks.len());
        }
        Manifest::Product(product) => {
            println!("  Version:    {}", product.version.as_deref().unwrap_or("N/A"));
            println!("  Purpose:    {}", product.purpose.as_deref().unwrap_or("N/A"));
            println!("  Alignment:  {:?}", product.alignment);
            println!("  Workspace:  {}", product.workspace);
            println!("  Compute:    {}", product.compute);
            println!("  Cluster:    {}", product.cluster);
            if !product.secrets.is_empty() {
                let names: Vec<&str> = product.secrets.iter().map(|s| s.name.as_str()).collect();
                println!("  Secrets:    {}", names.join(", "));
            }
        }
        Manifest::Scanner(scanner) => {
            println!("  Workspace:    {}", scanner.workspace);
            println!("  Data product: {}", scanner.data_product);
        }
        Manifest::Secret(secret) => {
            println!("  Purpose: {:?}", secret.purpose);
        }
    }

    Ok(())
}
