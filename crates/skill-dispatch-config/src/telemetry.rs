//! Tracing subscriber construction for dispatch hosts.
//!
//! [`subscriber`] builds a subscriber for any writer, which hosts and tests
//! can scope with `tracing::subscriber::with_default`. [`initialise`]
//! installs one writing to stderr as the process-wide default.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};

use crate::Config;
use crate::logging::LogFormat;

/// Format of the globally installed subscriber, set once.
static INSTALLED_FORMAT: OnceCell<LogFormat> = OnceCell::new();

/// Describes the global subscriber after [`initialise`] succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryHandle {
    format: LogFormat,
}

impl TelemetryHandle {
    /// Format of the subscriber that was installed first.
    ///
    /// Later calls to [`initialise`] do not replace the subscriber, so this
    /// can differ from the configuration passed to them.
    #[must_use]
    pub const fn format(self) -> LogFormat {
        self.format
    }
}

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter is not a valid directive list.
    #[error("invalid log filter '{directive}': {message}")]
    Filter {
        /// Directive list that failed to parse.
        directive: String,
        /// Parser error description.
        message: String,
    },
    /// Another global subscriber is already installed.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(#[source] SetGlobalDefaultError),
}

/// Parses the configured filter directive.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when the directive is not a valid
/// `EnvFilter` expression.
pub fn filter_for(config: &Config) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(config.log_filter()).map_err(|error| TelemetryError::Filter {
        directive: config.log_filter().to_owned(),
        message: error.to_string(),
    })
}

/// Builds a subscriber that renders events to `writer`.
///
/// `sink_is_terminal` only affects readable output; see
/// [`LogFormat::uses_colour`].
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable filter directive.
pub fn subscriber<W>(
    config: &Config,
    writer: W,
    sink_is_terminal: bool,
) -> Result<Box<dyn Subscriber + Send + Sync>, TelemetryError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let format = config.log_format();
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter_for(config)?)
        .with_target(true)
        .with_level(true)
        .with_writer(writer)
        .with_ansi(format.uses_colour(sink_is_terminal))
        .with_timer(fmt::time::UtcTime::rfc_3339());

    if format.is_structured() {
        Ok(Box::new(builder.json().flatten_event(true).finish()))
    } else {
        Ok(Box::new(builder.compact().finish()))
    }
}

/// Installs a stderr subscriber as the global default on first use.
///
/// Later calls return a handle describing the subscriber already installed
/// without touching global state. A configuration that fails to parse is
/// reported on every call until a valid one is installed.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable filter directive and
/// [`TelemetryError::Subscriber`] when a subscriber was installed elsewhere.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    INSTALLED_FORMAT
        .get_or_try_init(|| {
            let global = subscriber(config, io::stderr, io::stderr().is_terminal())?;
            tracing::subscriber::set_global_default(global)
                .map_err(TelemetryError::Subscriber)?;
            Ok(config.log_format())
        })
        .map(|&format| TelemetryHandle { format })
}
