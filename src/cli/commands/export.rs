//! Export command implementation
//!
//! Loads configuration, applies CLI overrides, runs the orchestrator, and
//! maps the outcome to the process exit code: 0 on success, 1 when the
//! manual fallback was reached, 2 for configuration errors.

use clap::Args;

use crate::config::load_config;
use crate::core::export::ExportOrchestrator;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Override the notebook path from the config file
    #[arg(long)]
    pub notebook: Option<String>,

    /// Override the output directory from the config file
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Override the output base name from the config file
    #[arg(long)]
    pub output_name: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        // Apply CLI overrides
        if let Some(notebook) = &self.notebook {
            tracing::info!(notebook = %notebook, "Overriding notebook path from CLI");
            config.job.notebook = notebook.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            tracing::info!(output_dir = %output_dir, "Overriding output directory from CLI");
            config.job.output_dir = output_dir.clone();
        }
        if let Some(output_name) = &self.output_name {
            tracing::info!(output_name = %output_name, "Overriding output name from CLI");
            config.job.output_name = output_name.clone();
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let orchestrator = ExportOrchestrator::new(&config);
        let outcome = match orchestrator.run().await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Export aborted");
                eprintln!("❌ Export aborted: {e}");
                return Ok(1);
            }
        };

        Ok(outcome.exit_code())
    }
}
