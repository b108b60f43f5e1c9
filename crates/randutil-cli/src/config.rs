//! Environment configuration.

use crate::error::CliError;

/// How log lines written to stderr are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings read once at start-up. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `RANDUTIL_LOG_FORMAT`: `text` (default) or `json`.
    pub log_format: LogFormat,
    /// `RANDUTIL_COUNT`: draws per invocation, default 1.
    pub count: usize,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let log_format = match lookup("RANDUTIL_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(CliError::Config(format!(
                    "RANDUTIL_LOG_FORMAT must be text or json, got {other:?}"
                )));
            }
        };

        let count = match lookup("RANDUTIL_COUNT") {
            None => 1,
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or_else(|| {
                    CliError::Config(format!(
                        "RANDUTIL_COUNT must be a positive integer, got {raw:?}"
                    ))
                })?,
        };

        Ok(Self { log_format, count })
    }
}
