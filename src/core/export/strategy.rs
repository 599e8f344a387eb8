//! Conversion strategies
//!
//! Each strategy is one automated way to get from notebook to PDF. The
//! orchestrator walks them in order and short-circuits on the first
//! success; a strategy never propagates an error, it reports an
//! [`Attempt`].

use async_trait::async_trait;

use crate::core::convert::NotebookConverter;
use crate::core::render::HtmlRenderer;
use crate::domain::job::ReportJob;
use crate::domain::outcome::Attempt;

/// One automated conversion strategy.
#[async_trait]
pub trait ExportStrategy: Send + Sync {
    /// Short name used in logs and the completion report.
    fn name(&self) -> &str;

    /// Runs the strategy to completion. All failures are captured in the
    /// returned [`Attempt`].
    async fn execute(&self, job: &ReportJob) -> Attempt;
}

/// Attempt A: convert the notebook to HTML, then render the HTML to PDF
/// with the optional renderer.
pub struct HtmlThenPdf {
    converter: NotebookConverter,
    renderer: HtmlRenderer,
}

impl HtmlThenPdf {
    pub fn new(converter: NotebookConverter, renderer: HtmlRenderer) -> Self {
        Self {
            converter,
            renderer,
        }
    }
}

#[async_trait]
impl ExportStrategy for HtmlThenPdf {
    fn name(&self) -> &str {
        "html-then-pdf"
    }

    async fn execute(&self, job: &ReportJob) -> Attempt {
        println!("Attempting HTML conversion...");
        let html = match self.converter.to_html(job).await {
            Ok(path) => {
                println!("✓ HTML conversion successful: {}", path.display());
                tracing::info!(path = %path.display(), "HTML conversion succeeded");
                path
            }
            // The render sub-step is skipped entirely when HTML
            // conversion fails.
            Err(e) => {
                println!("❌ HTML conversion failed: {e}");
                tracing::error!(error = %e, "HTML conversion failed");
                return Attempt::from_error(e);
            }
        };

        println!(
            "Attempting PDF conversion with {}...",
            self.renderer.name()
        );
        if let Err(e) = self.renderer.probe().await {
            println!("⚠ {} not available", self.renderer.name());
            tracing::warn!(error = %e, "Renderer not available");
            return Attempt::from_error(e);
        }

        let pdf = job.pdf_path();
        match self.renderer.render(&html, &pdf).await {
            Ok(()) => {
                println!("✓ PDF conversion successful: {}", pdf.display());
                tracing::info!(path = %pdf.display(), "PDF render succeeded");
                Attempt::Succeeded(pdf)
            }
            Err(e) => {
                println!("⚠ {} conversion failed: {e}", self.renderer.name());
                tracing::warn!(error = %e, "PDF render failed");
                Attempt::from_error(e)
            }
        }
    }
}

/// Attempt B: convert the notebook straight to PDF with the converter's
/// own PDF backend.
pub struct DirectPdf {
    converter: NotebookConverter,
}

impl DirectPdf {
    pub fn new(converter: NotebookConverter) -> Self {
        Self { converter }
    }
}

#[async_trait]
impl ExportStrategy for DirectPdf {
    fn name(&self) -> &str {
        "direct-pdf"
    }

    async fn execute(&self, job: &ReportJob) -> Attempt {
        println!();
        println!("Attempting direct PDF conversion...");
        match self.converter.to_pdf(job).await {
            Ok(pdf) => {
                println!("✓ Direct PDF conversion successful: {}", pdf.display());
                tracing::info!(path = %pdf.display(), "Direct PDF conversion succeeded");
                Attempt::Succeeded(pdf)
            }
            Err(e) => {
                println!("❌ Direct PDF conversion failed: {e}");
                tracing::error!(error = %e, "Direct PDF conversion failed");
                Attempt::from_error(e)
            }
        }
    }
}
