//! Report job descriptor
//!
//! A [`ReportJob`] fixes the three facts every conversion strategy needs:
//! which notebook to convert, where the artifacts go, and what they are
//! called. Artifact paths are derived deterministically so every strategy
//! and the manual fallback agree on them.

use std::path::{Path, PathBuf};

/// Default notebook path used when no configuration file is present.
pub const DEFAULT_NOTEBOOK: &str = "notebooks/report.ipynb";

/// Default output directory used when no configuration file is present.
pub const DEFAULT_OUTPUT_DIR: &str = "report";

/// Default output base name used when no configuration file is present.
pub const DEFAULT_OUTPUT_NAME: &str = "report";

/// The fixed job descriptor for a single report export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportJob {
    /// Path to the input notebook file.
    pub notebook: PathBuf,

    /// Directory all artifacts are written into. Created idempotently
    /// before any conversion attempt.
    pub output_dir: PathBuf,

    /// Base name (no extension) shared by all artifacts.
    pub output_name: String,
}

impl ReportJob {
    /// Creates a job descriptor from its three parts.
    pub fn new(
        notebook: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        output_name: impl Into<String>,
    ) -> Self {
        Self {
            notebook: notebook.into(),
            output_dir: output_dir.into(),
            output_name: output_name.into(),
        }
    }

    /// Path of the intermediate HTML artifact: `{output_dir}/{output_name}.html`.
    pub fn html_path(&self) -> PathBuf {
        self.artifact_path("html")
    }

    /// Path of the final PDF artifact: `{output_dir}/{output_name}.pdf`.
    pub fn pdf_path(&self) -> PathBuf {
        self.artifact_path("pdf")
    }

    fn artifact_path(&self, ext: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{ext}", self.output_name))
    }

    /// The notebook path as a displayable reference.
    pub fn notebook(&self) -> &Path {
        &self.notebook
    }
}

impl Default for ReportJob {
    fn default() -> Self {
        Self::new(DEFAULT_NOTEBOOK, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_paths_are_deterministic() {
        let job = ReportJob::new("notebooks/analysis.ipynb", "out", "analysis");
        assert_eq!(job.html_path(), PathBuf::from("out/analysis.html"));
        assert_eq!(job.pdf_path(), PathBuf::from("out/analysis.pdf"));
    }

    #[test]
    fn test_default_job_uses_fixed_constants() {
        let job = ReportJob::default();
        assert_eq!(job.notebook, PathBuf::from(DEFAULT_NOTEBOOK));
        assert_eq!(job.pdf_path(), PathBuf::from("report/report.pdf"));
        assert_eq!(job.html_path(), PathBuf::from("report/report.html"));
    }

    #[test]
    fn test_paths_repeatable_across_calls() {
        let job = ReportJob::default();
        assert_eq!(job.pdf_path(), job.pdf_path());
    }
}
