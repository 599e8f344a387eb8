//! Notebook converter adapter
//!
//! Wraps the external notebook converter (nbconvert calling convention):
//! `{command...} --to {format} --output-dir {dir} --output {name}
//! {notebook}`. The converter's contract is exit code 0 plus the output
//! file written; a missing input notebook surfaces as an ordinary converter
//! failure, not a distinct error.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::ConverterConfig;
use crate::core::process::{self, ProcessOutput};
use crate::domain::errors::ExportError;
use crate::domain::job::ReportJob;
use crate::domain::result::Result;

/// Output formats the converter is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertFormat {
    Html,
    Pdf,
}

impl ConvertFormat {
    fn as_str(&self) -> &'static str {
        match self {
            ConvertFormat::Html => "html",
            ConvertFormat::Pdf => "pdf",
        }
    }
}

/// Adapter for the external notebook converter.
#[derive(Debug, Clone)]
pub struct NotebookConverter {
    program: String,
    leading_args: Vec<String>,
    html_timeout: Duration,
    pdf_timeout: Duration,
}

impl NotebookConverter {
    pub fn new(config: &ConverterConfig) -> Self {
        // Config validation rejects an empty command; the fallback keeps
        // this constructor total anyway.
        let (program, leading_args) = match config.command.split_first() {
            Some((program, rest)) => (program.clone(), rest.to_vec()),
            None => ("jupyter".to_string(), vec!["nbconvert".to_string()]),
        };
        Self {
            program,
            leading_args,
            html_timeout: Duration::from_secs(config.html_timeout_secs),
            pdf_timeout: Duration::from_secs(config.pdf_timeout_secs),
        }
    }

    /// Converts the notebook to HTML. Returns the HTML artifact path.
    pub async fn to_html(&self, job: &ReportJob) -> Result<PathBuf> {
        self.convert(job, ConvertFormat::Html, self.html_timeout)
            .await?;
        Ok(job.html_path())
    }

    /// Converts the notebook directly to PDF. Returns the PDF artifact path.
    pub async fn to_pdf(&self, job: &ReportJob) -> Result<PathBuf> {
        self.convert(job, ConvertFormat::Pdf, self.pdf_timeout)
            .await?;
        Ok(job.pdf_path())
    }

    async fn convert(
        &self,
        job: &ReportJob,
        format: ConvertFormat,
        timeout: Duration,
    ) -> Result<ProcessOutput> {
        let tool = format!("nbconvert ({})", format.as_str());
        let (program, args) = self.invocation(job, format);

        let output = process::run_with_timeout(&tool, &program, &args, timeout).await?;
        if !output.success() {
            return Err(ExportError::tool_failed(tool, output.diagnostic()));
        }
        Ok(output)
    }

    /// Builds `(program, args)` for one conversion invocation.
    fn invocation(&self, job: &ReportJob, format: ConvertFormat) -> (String, Vec<String>) {
        let program = self.program.clone();
        let mut args = self.leading_args.clone();
        args.extend([
            "--to".to_string(),
            format.as_str().to_string(),
            "--output-dir".to_string(),
            job.output_dir.to_string_lossy().into_owned(),
            "--output".to_string(),
            job.output_name.clone(),
            job.notebook.to_string_lossy().into_owned(),
        ]);
        (program, args)
    }
}
