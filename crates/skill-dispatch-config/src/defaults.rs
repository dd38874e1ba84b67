//! Default values shared by configuration deserialisation and constructors.

use crate::logging::LogFormat;

/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variable overriding the log filter.
pub const LOG_FILTER_ENV: &str = "SKILL_DISPATCH_LOG_FILTER";

/// Environment variable overriding the log format.
pub const LOG_FORMAT_ENV: &str = "SKILL_DISPATCH_LOG_FORMAT";

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}
