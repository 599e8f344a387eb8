// nbreport - Notebook to PDF Report Export Tool
// Licensed under the MIT License

//! # nbreport - Notebook to PDF Report Export
//!
//! nbreport converts a Jupyter notebook into a PDF report by walking an
//! ordered chain of conversion strategies and short-circuiting on the
//! first success:
//!
//! 1. Notebook → HTML (external converter), then HTML → PDF (optional
//!    renderer)
//! 2. Notebook → PDF directly (external converter)
//! 3. Printed manual export instructions when both automated paths fail
//!
//! The conversion engines are opaque external tools; this crate owns only
//! the fallback sequencing, the bounded subprocess waits, and the
//! user-visible outcome contract (exit code 0 on success, 1 otherwise).
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Orchestrator, strategies, subprocess runner, renderer probe
//! - [`domain`] - Job descriptor, attempt outcomes, and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nbreport::config::NbreportConfig;
//! use nbreport::core::export::ExportOrchestrator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NbreportConfig::default();
//!     let orchestrator = ExportOrchestrator::new(&config);
//!
//!     let outcome = orchestrator.run().await?;
//!     std::process::exit(outcome.exit_code());
//! }
//! ```
//!
//! ## Error Handling
//!
//! Inside the orchestrator every failure is absorbed: a missing renderer
//! is a warning, a failed or timed-out converter falls through to the
//! next strategy, and the only terminal signal is the exit code plus the
//! printed text. See [`domain::ExportError`] for the taxonomy.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
