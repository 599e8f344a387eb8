//! Optional HTML-to-PDF renderer
//!
//! The renderer is a capability, not a requirement: its absence is probed
//! for and reported as [`ExportError::ToolUnavailable`], a normal
//! control-flow branch for the orchestrator. The render invocation itself
//! carries no timeout bound, unlike the converter steps.

use std::path::Path;

use crate::config::RendererConfig;
use crate::core::process;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;

/// Adapter for the external HTML-to-PDF renderer.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    command: String,
}

impl HtmlRenderer {
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            command: config.command.clone(),
        }
    }

    /// Probes whether the renderer is installed.
    ///
    /// Runs `{command} --version` and treats any failure as the capability
    /// being absent.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::ToolUnavailable`] when the binary is missing
    /// or the probe exits nonzero.
    pub async fn probe(&self) -> Result<()> {
        let args = vec!["--version".to_string()];
        match process::run_unbounded(&self.command, &self.command, &args).await {
            Ok(output) if output.success() => Ok(()),
            Ok(output) => Err(ExportError::unavailable(
                &self.command,
                format!("probe failed: {}", output.diagnostic()),
            )),
            Err(e) if e.is_unavailable() => Err(e),
            Err(e) => Err(ExportError::unavailable(&self.command, e.to_string())),
        }
    }

    /// Renders an HTML file to PDF: `{command} {html} {pdf}`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::ToolUnavailable`] when the binary is missing
    /// and [`ExportError::ToolFailed`] when the renderer exits nonzero.
    pub async fn render(&self, html: &Path, pdf: &Path) -> Result<()> {
        let args = vec![
            html.to_string_lossy().into_owned(),
            pdf.to_string_lossy().into_owned(),
        ];
        let output = process::run_unbounded(&self.command, &self.command, &args).await?;
        if !output.success() {
            return Err(ExportError::tool_failed(&self.command, output.diagnostic()));
        }
        Ok(())
    }

    /// The configured renderer command, for log and status messages.
    pub fn name(&self) -> &str {
        &self.command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn renderer(command: &str) -> HtmlRenderer {
        HtmlRenderer {
            command: command.to_string(),
        }
    }

    #[tokio::test]
    async fn test_probe_missing_binary_is_unavailable() {
        let err = renderer("nbreport-no-such-renderer").probe().await.unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn test_probe_succeeds_for_installed_binary() {
        // `true` ignores --version and exits 0, standing in for an
        // installed renderer.
        assert!(renderer("true").probe().await.is_ok());
    }

    #[tokio::test]
    async fn test_probe_nonzero_exit_is_unavailable() {
        let err = renderer("false").probe().await.unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn test_render_failure_is_tool_failed() {
        let err = renderer("false")
            .render(&PathBuf::from("a.html"), &PathBuf::from("a.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::ToolFailed { .. }));
    }

    #[tokio::test]
    async fn test_render_success() {
        let result = renderer("true")
            .render(&PathBuf::from("a.html"), &PathBuf::from("a.pdf"))
            .await;
        assert!(result.is_ok());
    }
}
