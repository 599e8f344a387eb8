//! Configuration management for nbreport.
//!
//! TOML-based configuration loading, parsing, and validation with:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting (a missing file is not an error)
//! - `NBREPORT_*` environment variable overrides
//! - Type-safe configuration structs
//!
//! # Example Configuration
//!
//! ```toml
//! [job]
//! notebook = "notebooks/report.ipynb"
//! output_dir = "report"
//! output_name = "report"
//!
//! [converter]
//! command = ["jupyter", "nbconvert"]
//! html_timeout_secs = 60
//! pdf_timeout_secs = 120
//!
//! [renderer]
//! command = "weasyprint"
//! ```

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{ConverterConfig, JobConfig, NbreportConfig, RendererConfig};
