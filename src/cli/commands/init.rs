//! Init command implementation
//!
//! Writes a commented sample configuration file so a new deployment can
//! start from the defaults and edit in place.

use std::fs;
use std::path::Path;

use clap::Args;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

const SAMPLE_CONFIG: &str = r#"# nbreport configuration
# All settings are optional; the values below are the defaults.

[job]
# Input notebook and the artifacts derived from it:
#   {output_dir}/{output_name}.html
#   {output_dir}/{output_name}.pdf
notebook = "notebooks/report.ipynb"
output_dir = "report"
output_name = "report"

[converter]
# Invoked as: {command...} --to {html|pdf} --output-dir ... --output ... {notebook}
command = ["jupyter", "nbconvert"]
html_timeout_secs = 60
pdf_timeout_secs = 120

[renderer]
# Optional HTML-to-PDF renderer. If not installed, the tool falls back to
# direct PDF conversion.
command = "weasyprint"
"#;

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let path = Path::new(config_path);

        if path.exists() && !self.force {
            eprintln!(
                "❌ {} already exists. Use --force to overwrite.",
                path.display()
            );
            return Ok(2);
        }

        fs::write(path, SAMPLE_CONFIG)?;
        tracing::info!(path = %path.display(), "Wrote sample configuration");
        println!("✓ Wrote {}", path.display());
        Ok(0)
    }
}
