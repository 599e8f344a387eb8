//! Configuration schema
//!
//! Type-safe configuration structs with serde defaults. Every field has a
//! built-in default matching the tool's zero-configuration behavior, so a
//! missing `nbreport.toml` is not an error: the defaults describe the one
//! fixed report this deployment produces.

use serde::{Deserialize, Serialize};

use crate::domain::errors::ExportError;
use crate::domain::job::{self, ReportJob};
use crate::domain::result::Result;

/// Top-level configuration for nbreport
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NbreportConfig {
    /// The fixed report job (notebook, output directory, output name)
    #[serde(default)]
    pub job: JobConfig,

    /// Notebook converter invocation settings
    #[serde(default)]
    pub converter: ConverterConfig,

    /// Optional HTML-to-PDF renderer settings
    #[serde(default)]
    pub renderer: RendererConfig,
}

/// Job descriptor section (`[job]`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Path to the input notebook
    #[serde(default = "default_notebook")]
    pub notebook: String,

    /// Directory artifacts are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Base name shared by the HTML and PDF artifacts
    #[serde(default = "default_output_name")]
    pub output_name: String,
}

/// Converter section (`[converter]`)
///
/// The converter is invoked as `{command...} --to {html|pdf} --output-dir
/// {dir} --output {name} {notebook}`, the nbconvert calling convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// Program and leading arguments of the converter command
    #[serde(default = "default_converter_command")]
    pub command: Vec<String>,

    /// Bounded wait for the notebook-to-HTML conversion, in seconds
    #[serde(default = "default_html_timeout")]
    pub html_timeout_secs: u64,

    /// Bounded wait for the direct notebook-to-PDF conversion, in seconds
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,
}

/// Renderer section (`[renderer]`)
///
/// The renderer is an optional capability: its absence is a warning, not an
/// error. Invoked as `{command} {input.html} {output.pdf}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RendererConfig {
    /// Renderer binary name or path
    #[serde(default = "default_renderer_command")]
    pub command: String,
}

fn default_notebook() -> String {
    job::DEFAULT_NOTEBOOK.to_string()
}

fn default_output_dir() -> String {
    job::DEFAULT_OUTPUT_DIR.to_string()
}

fn default_output_name() -> String {
    job::DEFAULT_OUTPUT_NAME.to_string()
}

fn default_converter_command() -> Vec<String> {
    vec!["jupyter".to_string(), "nbconvert".to_string()]
}

fn default_html_timeout() -> u64 {
    60
}

fn default_pdf_timeout() -> u64 {
    120
}

fn default_renderer_command() -> String {
    "weasyprint".to_string()
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            notebook: default_notebook(),
            output_dir: default_output_dir(),
            output_name: default_output_name(),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            command: default_converter_command(),
            html_timeout_secs: default_html_timeout(),
            pdf_timeout_secs: default_pdf_timeout(),
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            command: default_renderer_command(),
        }
    }
}

impl NbreportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Configuration` when a field is empty or a
    /// timeout bound is zero.
    pub fn validate(&self) -> Result<()> {
        if self.job.notebook.trim().is_empty() {
            return Err(ExportError::Configuration(
                "job.notebook must not be empty".to_string(),
            ));
        }
        if self.job.output_dir.trim().is_empty() {
            return Err(ExportError::Configuration(
                "job.output_dir must not be empty".to_string(),
            ));
        }
        if self.job.output_name.trim().is_empty() {
            return Err(ExportError::Configuration(
                "job.output_name must not be empty".to_string(),
            ));
        }
        if self.job.output_name.contains('/') || self.job.output_name.contains('\\') {
            return Err(ExportError::Configuration(format!(
                "job.output_name must be a bare file name, got: {}",
                self.job.output_name
            )));
        }
        if self.converter.command.is_empty() {
            return Err(ExportError::Configuration(
                "converter.command must name a program".to_string(),
            ));
        }
        if self.converter.html_timeout_secs == 0 {
            return Err(ExportError::Configuration(
                "converter.html_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.converter.pdf_timeout_secs == 0 {
            return Err(ExportError::Configuration(
                "converter.pdf_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.renderer.command.trim().is_empty() {
            return Err(ExportError::Configuration(
                "renderer.command must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the job descriptor from the `[job]` section.
    pub fn job(&self) -> ReportJob {
        ReportJob::new(
            &self.job.notebook,
            &self.job.output_dir,
            &self.job.output_name,
        )
    }
}
