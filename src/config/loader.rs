//! Configuration loader with TOML parsing and environment variable overrides
//!
//! Loading is layered: built-in defaults, then the TOML file (if present),
//! then `NBREPORT_*` environment overrides. A missing config file is not an
//! error because every field has a default.

use regex::Regex;
use std::fs;
use std::path::Path;

use super::schema::NbreportConfig;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file, falling back to defaults if it does not exist
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`NbreportConfig`]
/// 4. Applies environment variable overrides (`NBREPORT_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, TOML parsing
/// fails, a referenced environment variable is unset, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<NbreportConfig> {
    let path = path.as_ref();

    let mut config = if path.exists() {
        let contents = fs::read_to_string(path).map_err(|e| {
            ExportError::Configuration(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let contents = substitute_env_vars(&contents)?;

        toml::from_str(&contents)
            .map_err(|e| ExportError::Configuration(format!("Failed to parse TOML: {e}")))?
    } else {
        tracing::debug!(path = %path.display(), "No configuration file found, using defaults");
        NbreportConfig::default()
    };

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched. Referencing an unset variable is an
/// error listing every missing name.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is valid");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `NBREPORT_*` prefix
///
/// Variables follow the pattern `NBREPORT_<SECTION>_<KEY>`, e.g.
/// `NBREPORT_JOB_NOTEBOOK` or `NBREPORT_CONVERTER_HTML_TIMEOUT_SECS`.
fn apply_env_overrides(config: &mut NbreportConfig) {
    if let Ok(val) = std::env::var("NBREPORT_JOB_NOTEBOOK") {
        config.job.notebook = val;
    }
    if let Ok(val) = std::env::var("NBREPORT_JOB_OUTPUT_DIR") {
        config.job.output_dir = val;
    }
    if let Ok(val) = std::env::var("NBREPORT_JOB_OUTPUT_NAME") {
        config.job.output_name = val;
    }

    if let Ok(val) = std::env::var("NBREPORT_CONVERTER_COMMAND") {
        let parts: Vec<String> = val.split_whitespace().map(str::to_string).collect();
        if !parts.is_empty() {
            config.converter.command = parts;
        }
    }
    if let Ok(val) = std::env::var("NBREPORT_CONVERTER_HTML_TIMEOUT_SECS") {
        if let Ok(secs) = val.parse() {
            config.converter.html_timeout_secs = secs;
        }
    }
    if let Ok(val) = std::env::var("NBREPORT_CONVERTER_PDF_TIMEOUT_SECS") {
        if let Ok(secs) = val.parse() {
            config.converter.pdf_timeout_secs = secs;
        }
    }

    if let Ok(val) = std::env::var("NBREPORT_RENDERER_COMMAND") {
        config.renderer.command = val;
    }
}
