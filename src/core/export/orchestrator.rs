//! Export orchestrator - sequences the conversion strategies
//!
//! The orchestrator owns the ordered fallback chain: ensure the output
//! directory exists, run each strategy until one produces a PDF, and fall
//! back to printed manual instructions when all of them fail. Partial
//! artifacts are never deleted; a leftover HTML file is a recovery aid for
//! the manual path.

use std::fs;

use crate::config::NbreportConfig;
use crate::core::convert::NotebookConverter;
use crate::core::export::fallback;
use crate::core::export::strategy::{DirectPdf, ExportStrategy, HtmlThenPdf};
use crate::core::render::HtmlRenderer;
use crate::domain::job::ReportJob;
use crate::domain::outcome::{Attempt, ExportOutcome};
use crate::domain::result::Result;

/// Export orchestrator
pub struct ExportOrchestrator {
    job: ReportJob,
    strategies: Vec<Box<dyn ExportStrategy>>,
}

impl ExportOrchestrator {
    /// Builds the standard chain from configuration: HTML-then-PDF first,
    /// direct PDF second.
    pub fn new(config: &NbreportConfig) -> Self {
        let converter = NotebookConverter::new(&config.converter);
        let renderer = HtmlRenderer::new(&config.renderer);

        let strategies: Vec<Box<dyn ExportStrategy>> = vec![
            Box::new(HtmlThenPdf::new(converter.clone(), renderer)),
            Box::new(DirectPdf::new(converter)),
        ];

        Self {
            job: config.job(),
            strategies,
        }
    }

    /// Builds an orchestrator over an explicit strategy chain.
    pub fn with_strategies(job: ReportJob, strategies: Vec<Box<dyn ExportStrategy>>) -> Self {
        Self { job, strategies }
    }

    /// The job this orchestrator exports.
    pub fn job(&self) -> &ReportJob {
        &self.job
    }

    /// Runs the fallback chain to completion.
    ///
    /// First success wins and short-circuits the remaining strategies.
    /// Every strategy failure is absorbed as a fall-through; the only
    /// error this returns is failure to create the output directory.
    pub async fn run(&self) -> Result<ExportOutcome> {
        // Idempotent: a pre-existing directory is success.
        fs::create_dir_all(&self.job.output_dir)?;

        println!("Notebook PDF Export");
        println!("{}", "=".repeat(50));

        for strategy in &self.strategies {
            tracing::info!(strategy = strategy.name(), "Starting conversion attempt");
            match strategy.execute(&self.job).await {
                Attempt::Succeeded(pdf) => {
                    tracing::info!(
                        strategy = strategy.name(),
                        pdf = %pdf.display(),
                        "Export completed"
                    );
                    return Ok(ExportOutcome::Completed {
                        strategy: strategy.name().to_string(),
                        pdf,
                    });
                }
                Attempt::Unavailable(e) => {
                    tracing::warn!(
                        strategy = strategy.name(),
                        error = %e,
                        "Strategy unavailable, falling through"
                    );
                }
                Attempt::Failed(e) => {
                    tracing::error!(
                        strategy = strategy.name(),
                        error = %e,
                        "Strategy failed, falling through"
                    );
                }
            }
        }

        tracing::warn!("All automated strategies failed, printing manual instructions");
        fallback::print_manual_instructions(&self.job);
        Ok(ExportOutcome::ManualFallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ExportError;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Scripted strategy recording how often it was invoked.
    struct Scripted {
        name: &'static str,
        calls: Arc<AtomicUsize>,
        result: fn() -> Attempt,
    }

    #[async_trait]
    impl ExportStrategy for Scripted {
        fn name(&self) -> &str {
            self.name
        }

        async fn execute(&self, _job: &ReportJob) -> Attempt {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    fn scripted(
        name: &'static str,
        result: fn() -> Attempt,
    ) -> (Box<dyn ExportStrategy>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Box::new(Scripted {
                name,
                calls: calls.clone(),
                result,
            }),
            calls,
        )
    }

    fn succeed() -> Attempt {
        Attempt::Succeeded(PathBuf::from("out/report.pdf"))
    }

    fn fail() -> Attempt {
        Attempt::Failed(ExportError::tool_failed("nbconvert", "boom"))
    }

    fn unavailable() -> Attempt {
        Attempt::Unavailable(ExportError::unavailable("weasyprint", "missing"))
    }

    fn job_in(dir: &TempDir) -> ReportJob {
        ReportJob::new("nb.ipynb", dir.path().join("out"), "report")
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let dir = TempDir::new().unwrap();
        let (a, a_calls) = scripted("a", succeed);
        let (b, b_calls) = scripted("b", succeed);

        let orchestrator = ExportOrchestrator::with_strategies(job_in(&dir), vec![a, b]);
        let outcome = orchestrator.run().await.unwrap();

        assert!(outcome.is_success());
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
        match outcome {
            ExportOutcome::Completed { strategy, .. } => assert_eq!(strategy, "a"),
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_failure_falls_through_to_next() {
        let dir = TempDir::new().unwrap();
        let (a, a_calls) = scripted("a", fail);
        let (b, b_calls) = scripted("b", succeed);

        let orchestrator = ExportOrchestrator::with_strategies(job_in(&dir), vec![a, b]);
        let outcome = orchestrator.run().await.unwrap();

        assert!(outcome.is_success());
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unavailable_falls_through_like_failure() {
        let dir = TempDir::new().unwrap();
        let (a, _) = scripted("a", unavailable);
        let (b, b_calls) = scripted("b", succeed);

        let orchestrator = ExportOrchestrator::with_strategies(job_in(&dir), vec![a, b]);
        let outcome = orchestrator.run().await.unwrap();

        assert!(outcome.is_success());
        assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_all_failures_reach_manual_fallback() {
        let dir = TempDir::new().unwrap();
        let (a, _) = scripted("a", fail);
        let (b, _) = scripted("b", fail);

        let orchestrator = ExportOrchestrator::with_strategies(job_in(&dir), vec![a, b]);
        let outcome = orchestrator.run().await.unwrap();

        assert_eq!(outcome, ExportOutcome::ManualFallback);
        assert_eq!(outcome.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_output_directory_created_idempotently() {
        let dir = TempDir::new().unwrap();
        let job = job_in(&dir);
        let out = job.output_dir.clone();

        let (a, _) = scripted("a", fail);
        let orchestrator = ExportOrchestrator::with_strategies(job.clone(), vec![a]);
        orchestrator.run().await.unwrap();
        assert!(out.is_dir());

        // Second run with the directory already present is still fine.
        let (a, _) = scripted("a", fail);
        let orchestrator = ExportOrchestrator::with_strategies(job, vec![a]);
        assert!(orchestrator.run().await.is_ok());
    }

    #[tokio::test]
    async fn test_partial_html_artifact_is_kept() {
        let dir = TempDir::new().unwrap();
        let job = job_in(&dir);
        std::fs::create_dir_all(&job.output_dir).unwrap();
        std::fs::write(job.html_path(), "<html></html>").unwrap();

        let (a, _) = scripted("a", fail);
        let orchestrator = ExportOrchestrator::with_strategies(job.clone(), vec![a]);
        orchestrator.run().await.unwrap();

        assert!(job.html_path().exists());
    }
}
