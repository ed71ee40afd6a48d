use colored::*;
use product_core::LintReport;
use product_deploy::{DeployReport, StepStatus};
use serde_json::json;

pub fn print_lint_report(report: &LintReport, format: &str) {
    match format {
        "json" => print_lint_json(report),
        _ => print_lint_text(report),
    }
}

fn print_lint_text(report: &LintReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  LINT REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!("\n{} {}", "✓".green().bold(), "Lint PASSED".green().bold());
    } else {
        println!("\n{} {}", "✗".red().bold(), "Lint FAILED".red().bold());
    }

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.red());
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("  {}. {}", i + 1, warning.yellow());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Manifests checked: {}", report.stats.manifests_checked);
    println!("  Resources checked: {}", report.stats.resources_checked);
    println!("  Total errors:      {}", report.errors.len());
    println!("  Total warnings:    {}", report.warnings.len());
    println!("{}", "═".repeat(60));
}

fn print_lint_json(report: &LintReport) {
    let output = json!({
        "passed": report.passed,
        "errors": report.errors,
        "warnings": report.warnings,
        "summary": {
            "manifests_checked": report.stats.manifests_checked,
            "resources_checked": report.stats.resources_checked,
            "error_count": report.errors.len(),
            "warning_count": report.warnings.len(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_deploy_report(report: &DeployReport, format: &str) {
    match format {
        "json" => print_deploy_json(report),
        _ => print_deploy_text(report),
    }
}

fn print_deploy_text(report: &DeployReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  DEPLOYMENT REPORT".bold());
    println!("{}", "═".repeat(60));
    println!();

    for step in &report.steps {
        let symbol = match step.status {
            StepStatus::Succeeded => "✓".green().bold(),
            StepStatus::Failed => "✗".red().bold(),
            StepStatus::Skipped => "-".yellow().bold(),
            StepStatus::DryRun => "→".blue().bold(),
        };
        println!("  {} [{}] {}", symbol, step.status, step.command);
        if let Some(detail) = &step.detail {
            println!("      {}", detail.red());
        }
    }

    if report.succeeded {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Deployment SUCCEEDED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Deployment FAILED".red().bold()
        );
    }
    println!("  Duration: {} ms", report.duration_ms());
    println!("{}", "═".repeat(60));
}

fn print_deploy_json(report: &DeployReport) {
    let steps: Vec<_> = report
        .steps
        .iter()
        .map(|step| {
            json!({
                "kind": step.kind.to_string(),
                "command": step.command,
                "status": step.status.to_string(),
                "detail": step.detail,
            })
        })
        .collect();

    let output = json!({
        "succeeded": report.succeeded,
        "duration_ms": report.duration_ms(),
        "steps": steps,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
