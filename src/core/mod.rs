//! Core business logic for nbreport.
//!
//! - [`export`] - the orchestrator and its ordered conversion strategies
//! - [`convert`] - the external notebook converter adapter
//! - [`render`] - the optional HTML-to-PDF renderer capability
//! - [`process`] - scoped subprocess execution with bounded waits

pub mod convert;
pub mod export;
pub mod process;
pub mod render;
