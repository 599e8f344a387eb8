//! Domain models and types for nbreport.
//!
//! The domain layer provides:
//! - The fixed job descriptor ([`ReportJob`]) and its deterministic
//!   artifact paths
//! - Attempt and run outcomes ([`Attempt`], [`ExportOutcome`])
//! - Error types ([`ExportError`])
//! - Result type alias ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ExportError>`]:
//!
//! ```rust
//! use nbreport::domain::{ExportError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(ExportError::Configuration("invalid output name".to_string()))
//! }
//! ```

pub mod errors;
pub mod job;
pub mod outcome;
pub mod result;

pub use errors::ExportError;
pub use job::ReportJob;
pub use outcome::{Attempt, ExportOutcome};
pub use result::Result;
