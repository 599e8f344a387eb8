//! Attempt and run outcomes
//!
//! Each conversion strategy reports a tri-state [`Attempt`]; the orchestrator
//! folds the ordered attempts into a final [`ExportOutcome`].

use std::path::PathBuf;

use super::errors::ExportError;

/// Result of a single conversion attempt.
#[derive(Debug)]
pub enum Attempt {
    /// The strategy produced the final PDF artifact at this path.
    Succeeded(PathBuf),

    /// The strategy ran and failed; the error carries the diagnostic.
    Failed(ExportError),

    /// The strategy could not run because a capability it needs is not
    /// installed. Distinguished from `Failed` so the caller can log it as a
    /// warning rather than an error.
    Unavailable(ExportError),
}

impl Attempt {
    /// Classify an error into the matching attempt state.
    pub fn from_error(err: ExportError) -> Self {
        if err.is_unavailable() {
            Attempt::Unavailable(err)
        } else {
            Attempt::Failed(err)
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, Attempt::Succeeded(_))
    }
}

/// Final outcome of a full orchestrator run.
#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A strategy produced the PDF. Carries the strategy name and the
    /// artifact path for reporting.
    Completed { strategy: String, pdf: PathBuf },

    /// Every automated strategy failed; manual instructions were printed.
    ManualFallback,
}

impl ExportOutcome {
    /// True iff a PDF was produced. Maps to process exit code 0.
    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Completed { .. })
    }

    /// Process exit code for this outcome: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_classification() {
        let attempt = Attempt::from_error(ExportError::unavailable("weasyprint", "not found"));
        assert!(matches!(attempt, Attempt::Unavailable(_)));

        let attempt = Attempt::from_error(ExportError::tool_failed("nbconvert", "boom"));
        assert!(matches!(attempt, Attempt::Failed(_)));
        assert!(!attempt.succeeded());
    }

    #[test]
    fn test_outcome_exit_codes() {
        let ok = ExportOutcome::Completed {
            strategy: "html-then-pdf".to_string(),
            pdf: PathBuf::from("report/report.pdf"),
        };
        assert!(ok.is_success());
        assert_eq!(ok.exit_code(), 0);

        let failed = ExportOutcome::ManualFallback;
        assert!(!failed.is_success());
        assert_eq!(failed.exit_code(), 1);
    }
}
