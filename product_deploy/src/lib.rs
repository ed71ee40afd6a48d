//! # Data Product Deploy
//!
//! Deployment planning and execution against the external platform CLI.
//!
//! A deployment is a fixed command sequence: apply the bundle, apply the
//! data-quality suite, apply the product, apply the scanner. This crate
//! turns a parsed `DeploymentWorkspace` into that sequence (`DeployPlan`)
//! and runs it strictly in order (`DeployExecutor`), gating every step on
//! the success of the previous one.
//!
//! ## Example
//!
//! ```no_run
//! use product_core::DeploymentWorkspace;
//! use product_deploy::{DeployConfig, DeployError, DeployExecutor, DeployPlan};
//!
//! # async fn deploy(workspace: DeploymentWorkspace) -> Result<(), DeployError> {
//! let plan = DeployPlan::from_workspace(&workspace)?;
//! for step in &plan.steps {
//!     println!("{}", step.render("dataos-ctl"));
//! }
//!
//! let config = DeployConfig::builder().build()?;
//! let report = DeployExecutor::new(config).execute(&plan).await;
//! if !report.succeeded {
//!     eprintln!("deployment failed");
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod executor;
mod plan;

pub use config::*;
pub use error::*;
pub use executor::*;
pub use plan::*;
