mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dpd")]
#[command(version, about = "Data Product Deployer CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single manifest and print its summary
    Check {
        /// Path to the manifest file (YAML)
        manifest: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Lint a deployment directory
    Lint {
        /// Path to the deployment directory
        dir: String,

        /// Enable strict mode (promote warnings to errors)
        #[arg(short, long)]
        strict: bool,

        /// Declare a secret already created on the platform (repeatable)
        #[arg(long = "secret", value_name = "NAME")]
        secrets: Vec<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the deployment step sequence without executing it
    Plan {
        /// Path to the deployment directory
        dir: String,

        /// Platform CLI binary to render commands with
        #[arg(long)]
        ctl: Option<String>,
    },

    /// Lint a deployment directory, then apply it step by step
    Deploy {
        /// Path to the deployment directory
        dir: String,

        /// Render commands without running them
        #[arg(long)]
        dry_run: bool,

        /// Skip the lint pass before deploying
        #[arg(long)]
        skip_lint: bool,

        /// Platform CLI binary to invoke
        #[arg(long)]
        ctl: Option<String>,

        /// Enable strict lint mode
        #[arg(short, long)]
        strict: bool,

        /// Declare a secret already created on the platform (repeatable)
        #[arg(long = "secret", value_name = "NAME")]
        secrets: Vec<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Check { manifest, format } => commands::check::execute(&manifest, &format).await,

        Commands::Lint {
            dir,
            strict,
            secrets,
            format,
        } => commands::lint::execute(&dir, strict, &secrets, &format).await,

        Commands::Plan { dir, ctl } => commands::plan::execute(&dir, ctl.as_deref()).await,

        Commands::Deploy {
            dir,
            dry_run,
            skip_lint,
            ctl,
            strict,
            secrets,
            format,
        } => {
            commands::deploy::execute(
                &dir,
                dry_run,
                skip_lint,
                ctl.as_deref(),
                strict,
                &secrets,
                &format,
            )
            .await
        }
    }
}
