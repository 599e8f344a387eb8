//! Domain error types
//!
//! This module defines the error taxonomy for nbreport. Every failure mode of
//! an external conversion tool maps to one of these variants; none of the
//! third-party invocation types leak out of the process layer.

use thiserror::Error;

/// Main nbreport error type
///
/// This is the primary error type used throughout the application.
/// Conversion strategies catch these locally and convert them into
/// fall-through to the next strategy; nothing propagates past the
/// orchestrator as an unhandled error.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An optional capability (e.g. the HTML-to-PDF renderer) is not
    /// installed. Never fatal; always falls through to the next strategy.
    #[error("{tool} is not available: {reason}")]
    ToolUnavailable { tool: String, reason: String },

    /// An external tool exited with a nonzero status code.
    #[error("{tool} failed: {diagnostic}")]
    ToolFailed { tool: String, diagnostic: String },

    /// An external tool did not finish within its bounded wait.
    #[error("{tool} timed out after {timeout_secs}s")]
    Timeout { tool: String, timeout_secs: u64 },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors (output directory creation, artifact checks)
    #[error("I/O error: {0}")]
    Io(String),

    /// Any other error raised while invoking an external tool
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ExportError {
    /// Build a `ToolUnavailable` error for the named tool.
    pub fn unavailable(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        ExportError::ToolUnavailable {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Build a `ToolFailed` error carrying the tool's diagnostic output.
    pub fn tool_failed(tool: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        ExportError::ToolFailed {
            tool: tool.into(),
            diagnostic: diagnostic.into(),
        }
    }

    /// True if this error means an optional capability is missing rather
    /// than a tool having run and failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ExportError::ToolUnavailable { .. })
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_failed_display() {
        let err = ExportError::tool_failed("nbconvert", "no such file");
        assert_eq!(err.to_string(), "nbconvert failed: no such file");
    }

    #[test]
    fn test_timeout_display() {
        let err = ExportError::Timeout {
            tool: "nbconvert".to_string(),
            timeout_secs: 60,
        };
        assert_eq!(err.to_string(), "nbconvert timed out after 60s");
    }

    #[test]
    fn test_unavailable_is_distinguished() {
        let err = ExportError::unavailable("weasyprint", "not found on PATH");
        assert!(err.is_unavailable());
        let err = ExportError::tool_failed("weasyprint", "bad html");
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ExportError = toml_err.into();
        assert!(matches!(err, ExportError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_export_error_implements_std_error() {
        let err = ExportError::Configuration("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
