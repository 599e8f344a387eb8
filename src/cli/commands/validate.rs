//! Validate-config command implementation

use clap::Args;

use crate::config::load_config;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loads the configuration (built-in defaults apply when the file is
    /// absent), validates it, and prints the resolved job.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(path = %config_path, "Validating configuration");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Configuration invalid: {e}");
                return Ok(2);
            }
        };

        let job = config.job();
        println!("✓ Configuration is valid");
        println!();
        println!("Resolved job:");
        println!("  Notebook:   {}", job.notebook.display());
        println!("  Output dir: {}", job.output_dir.display());
        println!("  HTML:       {}", job.html_path().display());
        println!("  PDF:        {}", job.pdf_path().display());
        println!();
        println!("Converter: {}", config.converter.command.join(" "));
        println!(
            "  Timeouts: {}s (HTML), {}s (PDF)",
            config.converter.html_timeout_secs, config.converter.pdf_timeout_secs
        );
        println!("Renderer:  {}", config.renderer.command);

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_with_defaults() {
        let args = ValidateArgs {};
        let code = args
            .execute("definitely-nonexistent-nbreport.toml")
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_rejects_invalid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[job]\noutput_name = \"\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let args = ValidateArgs {};
        let code = args
            .execute(temp_file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
