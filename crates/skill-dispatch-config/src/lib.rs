//! Shared configuration for services embedding the request dispatcher.
//!
//! [`Config`] carries the ambient settings a dispatch host needs before it
//! can serve requests, currently the log filter and output format consumed
//! by [`telemetry::initialise`]. Values are layered: built-in defaults, then
//! an optional JSON document, then `SKILL_DISPATCH_*` environment overrides.

pub mod defaults;
pub mod logging;
pub mod telemetry;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::defaults::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV, LOG_FORMAT_ENV};
pub use self::logging::LogFormat;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for [`Config`].
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// An environment override could not be parsed.
    #[error("invalid value '{value}' for {variable}: {message}")]
    InvalidOverride {
        /// Environment variable name.
        variable: &'static str,
        /// Offending value.
        value: String,
        /// Description of the parse failure.
        message: String,
    },
}

/// Ambient settings for a dispatch host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    log_filter: String,
    log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: defaults::default_log_filter_string(),
            log_format: defaults::default_log_format(),
        }
    }
}

impl Config {
    /// Parses a JSON document; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let document = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&document)
    }

    /// Applies `SKILL_DISPATCH_*` overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if the format override is not
    /// a known [`LogFormat`].
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored so an exported-but-blank variable does not
    /// clear a configured setting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if the format override is not
    /// a known [`LogFormat`].
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(filter) = non_empty(lookup(LOG_FILTER_ENV)) {
            self.log_filter = filter;
        }
        if let Some(raw) = non_empty(lookup(LOG_FORMAT_ENV)) {
            self.log_format =
                LogFormat::from_str(raw.trim()).map_err(|error| ConfigError::InvalidOverride {
                    variable: LOG_FORMAT_ENV,
                    message: error.to_string(),
                    value: raw,
                })?;
        }
        Ok(self)
    }

    /// Replaces the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Replaces the log format.
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Tracing filter directive, e.g. `info` or `skill_dispatch=debug`.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
