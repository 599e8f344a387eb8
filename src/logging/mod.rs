//! Logging and observability
//!
//! Structured console logging on `tracing` with configurable levels. The
//! user-facing progress lines stay on plain stdout (the tool is run
//! interactively and read by a human); tracing carries the structured
//! duplicate of every state transition for debugging.

pub mod structured;

pub use structured::init_logging;
