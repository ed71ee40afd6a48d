//! Deployment configuration.
//!
//! Holds everything the executor needs to talk to the external platform CLI:
//! which binary to run, which global arguments to pass, and whether to
//! actually run anything at all.

use crate::{DeployError, Result};

/// Environment variable overriding the platform CLI binary.
const CTL_ENV: &str = "DATAOS_CTL";

/// Default platform CLI binary.
const DEFAULT_CTL: &str = "dataos-ctl";

/// Configuration for running the external platform CLI.
///
/// # Example
///
/// ```rust
/// use product_deploy::DeployConfig;
///
/// let config = DeployConfig::builder()
///     .ctl("dataos-ctl")
///     .dry_run(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.ctl(), "dataos-ctl");
/// ```
#[derive(Debug, Clone)]
pub struct DeployConfig {
    ctl: String,
    extra_args: Vec<String>,
    dry_run: bool,
}

impl DeployConfig {
    /// Creates a builder for a deployment configuration.
    pub fn builder() -> DeployConfigBuilder {
        DeployConfigBuilder::default()
    }

    /// The platform CLI binary to invoke.
    pub fn ctl(&self) -> &str {
        &self.ctl
    }

    /// Global arguments appended to every invocation.
    pub fn extra_args(&self) -> &[String] {
        &self.extra_args
    }

    /// Whether commands are rendered without being run.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            ctl: default_ctl(),
            extra_args: Vec::new(),
            dry_run: false,
        }
    }
}

/// Builder for `DeployConfig`.
#[derive(Debug, Default)]
pub struct DeployConfigBuilder {
    ctl: Option<String>,
    extra_args: Vec<String>,
    dry_run: bool,
}

impl DeployConfigBuilder {
    /// Sets the platform CLI binary.
    pub fn ctl(mut self, ctl: impl Into<String>) -> Self {
        self.ctl = Some(ctl.into());
        self
    }

    /// Appends a global argument passed on every invocation.
    pub fn extra_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Sets dry-run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builds the configuration.
    ///
    /// When no binary was set explicitly, the `DATAOS_CTL` environment
    /// variable is consulted before falling back to `dataos-ctl`.
    pub fn build(self) -> Result<DeployConfig> {
        let ctl = self.ctl.unwrap_or_else(default_ctl);
        if ctl.trim().is_empty() {
            return Err(DeployError::InvalidConfig(
                "platform CLI binary must not be empty".to_string(),
            ));
        }

        Ok(DeployConfig {
            ctl,
            extra_args: self.extra_args,
            dry_run: self.dry_run,
        })
    }
}

fn default_ctl() -> String {
    std::env::var(CTL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CTL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_defaults() {
        let config = DeployConfig::builder().build().unwrap();
        assert!(!config.ctl().is_empty());
        assert!(!config.dry_run());
        assert!(config.extra_args().is_empty());
    }

    #[test]
    fn test_builder_explicit_ctl() {
        let config = DeployConfig::builder()
            .ctl("/opt/platform/bin/dataos-ctl")
            .extra_arg("--context")
            .extra_arg("staging")
            .dry_run(true)
            .build()
            .unwrap();

        assert_eq!(config.ctl(), "/opt/platform/bin/dataos-ctl");
        assert_eq!(config.extra_args(), ["--context", "staging"]);
        assert!(config.dry_run());
    }

    #[test]
    fn test_empty_ctl_rejected() {
        let result = DeployConfig::builder().ctl("  ").build();
        assert!(matches!(result.unwrap_err(), DeployError::InvalidConfig(_)));
    }
}
