//! Export workflow: the fallback chain and its strategies.

pub mod fallback;
pub mod orchestrator;
pub mod strategy;

pub use orchestrator::ExportOrchestrator;
pub use strategy::{DirectPdf, ExportStrategy, HtmlThenPdf};
