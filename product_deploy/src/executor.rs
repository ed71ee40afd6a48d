//! Sequential deployment execution.
//!
//! Runs a deployment plan's steps strictly in order. Each step is gated on
//! the previous one exiting zero; the first failure aborts the run and every
//! remaining step is reported as skipped. There are no retries and no
//! rollback: the platform defines no recovery procedure, so a failure is
//! surfaced for the operator to resolve.

use chrono::{DateTime, Utc};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::{DeployConfig, DeployPlan, StepKind};

/// Outcome of a single deployment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The external CLI exited zero
    Succeeded,
    /// The external CLI exited non-zero or could not be spawned
    Failed,
    /// An earlier step failed, so this one never ran
    Skipped,
    /// Dry-run mode: the command was rendered but not run
    DryRun,
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Succeeded => "succeeded",
            StepStatus::Failed => "failed",
            StepStatus::Skipped => "skipped",
            StepStatus::DryRun => "dry-run",
        };
        write!(f, "{}", s)
    }
}

/// Record of one executed (or skipped) deployment step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// What the step applied
    pub kind: StepKind,

    /// The full command line
    pub command: String,

    /// How the step ended
    pub status: StepStatus,

    /// Failure detail: captured stderr, or the spawn error
    pub detail: Option<String>,
}

/// Report of a deployment run.
#[derive(Debug, Clone)]
pub struct DeployReport {
    /// Whether every executed step succeeded
    pub succeeded: bool,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished
    pub finished_at: DateTime<Utc>,

    /// Per-step outcomes, in plan order
    pub steps: Vec<StepOutcome>,
}

impl DeployReport {
    /// Total run duration in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

/// Executes deployment plans against the external platform CLI.
///
/// # Example
///
/// ```no_run
/// use product_core::DeploymentWorkspace;
/// use product_deploy::{DeployConfig, DeployError, DeployExecutor, DeployPlan};
///
/// # async fn run(workspace: DeploymentWorkspace) -> Result<(), DeployError> {
/// let plan = DeployPlan::from_workspace(&workspace)?;
/// let config = DeployConfig::builder().dry_run(true).build()?;
///
/// let report = DeployExecutor::new(config).execute(&plan).await;
/// assert!(report.succeeded);
/// # Ok(())
/// # }
/// ```
pub struct DeployExecutor {
    config: DeployConfig,
}

impl DeployExecutor {
    /// Creates a new executor with the given configuration.
    pub fn new(config: DeployConfig) -> Self {
        Self { config }
    }

    /// Runs the plan's steps strictly in order.
    pub async fn execute(&self, plan: &DeployPlan) -> DeployReport {
        let started_at = Utc::now();
        let mut outcomes = Vec::with_capacity(plan.len());
        let mut failed = false;

        for step in &plan.steps {
            let command = step.render(self.config.ctl());

            if failed {
                outcomes.push(StepOutcome {
                    kind: step.kind,
                    command,
                    status: StepStatus::Skipped,
                    detail: None,
                });
                continue;
            }

            if self.config.dry_run() {
                debug!("dry-run: {}", command);
                outcomes.push(StepOutcome {
                    kind: step.kind,
                    command,
                    status: StepStatus::DryRun,
                    detail: None,
                });
                continue;
            }

            info!("Applying {} manifest: {}", step.kind, step.manifest.display());
            let outcome = self.run_step(step, command).await;
            if outcome.status == StepStatus::Failed {
                warn!(
                    "{} step failed, aborting remaining steps: {}",
                    step.kind,
                    outcome.detail.as_deref().unwrap_or("no detail")
                );
                failed = true;
            }
            outcomes.push(outcome);
        }

        DeployReport {
            succeeded: !failed,
            started_at,
            finished_at: Utc::now(),
            steps: outcomes,
        }
    }

    async fn run_step(&self, step: &crate::DeployStep, command: String) -> StepOutcome {
        let result = Command::new(self.config.ctl())
            .args(self.config.extra_args())
            .args(step.args())
            .output()
            .await;

        match result {
            Ok(output) if output.status.success() => StepOutcome {
                kind: step.kind,
                command,
                status: StepStatus::Succeeded,
                detail: None,
            },
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let detail = match output.status.code() {
                    Some(code) => format!("exit code {}: {}", code, stderr.trim()),
                    None => format!("terminated by signal: {}", stderr.trim()),
                };
                StepOutcome {
                    kind: step.kind,
                    command,
                    status: StepStatus::Failed,
                    detail: Some(detail),
                }
            }
            Err(e) => StepOutcome {
                kind: step.kind,
                command,
                status: StepStatus::Failed,
                detail: Some(format!("failed to run {}: {}", self.config.ctl(), e)),
            },
        }
    }
}
