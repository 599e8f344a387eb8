//! Manual fallback instructions
//!
//! The terminal branch when every automated strategy has failed: a fixed
//! sequence of human-actionable export paths, plus a pointer to the HTML
//! artifact when a partial first attempt left one behind.

use crate::domain::job::ReportJob;

const BANNER: &str = "==================================================";

/// Builds the manual instruction lines for a job.
///
/// Pure except for one filesystem check: if the HTML artifact exists on
/// disk, its path is surfaced as a usable intermediate for browser-based
/// PDF printing.
pub fn manual_instructions(job: &ReportJob) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        BANNER.to_string(),
        "MANUAL EXPORT INSTRUCTIONS".to_string(),
        BANNER.to_string(),
        "1. Open the notebook in Jupyter:".to_string(),
        format!("   jupyter notebook {}", job.notebook.display()),
        "2. Use File -> Download as -> PDF via LaTeX".to_string(),
        "3. Or: File -> Print -> Save as PDF in browser".to_string(),
        format!(
            "4. Save to {}/ directory as {}.pdf",
            job.output_dir.display(),
            job.output_name
        ),
    ];

    let html = job.html_path();
    if html.exists() {
        lines.push(String::new());
        lines.push(format!("HTML version available: {}", html.display()));
        lines.push("You can print this to PDF from your browser".to_string());
    }

    lines
}

/// Prints the manual instructions to stdout.
pub fn print_manual_instructions(job: &ReportJob) {
    for line in manual_instructions(job) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_instructions_list_three_manual_paths() {
        let dir = TempDir::new().unwrap();
        let job = ReportJob::new("notebooks/report.ipynb", dir.path(), "report");
        let lines = manual_instructions(&job);

        let text = lines.join("\n");
        assert!(text.contains("MANUAL EXPORT INSTRUCTIONS"));
        assert!(text.contains("jupyter notebook notebooks/report.ipynb"));
        assert!(text.contains("PDF via LaTeX"));
        assert!(text.contains("Save as PDF in browser"));
        assert!(text.contains("report.pdf"));
    }

    #[test]
    fn test_no_html_mention_without_artifact() {
        let dir = TempDir::new().unwrap();
        let job = ReportJob::new("nb.ipynb", dir.path(), "report");
        let text = manual_instructions(&job).join("\n");
        assert!(!text.contains("HTML version available"));
    }

    #[test]
    fn test_html_artifact_surfaced_when_present() {
        let dir = TempDir::new().unwrap();
        let job = ReportJob::new("nb.ipynb", dir.path(), "report");
        fs::write(job.html_path(), "<html></html>").unwrap();

        let text = manual_instructions(&job).join("\n");
        assert!(text.contains("HTML version available"));
        assert!(text.contains(&job.html_path().display().to_string()));
    }
}
