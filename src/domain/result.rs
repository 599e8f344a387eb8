//! Result type alias for nbreport
//!
//! Convenience alias using [`ExportError`] as the error type. Use this
//! throughout the library for fallible operations.

use super::errors::ExportError;

/// Result type alias for nbreport operations
///
/// # Examples
///
/// ```
/// use nbreport::domain::result::Result;
/// use nbreport::domain::errors::ExportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExportError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;
