//! Unit tests for configuration layering.

use std::collections::HashMap;
use std::str::FromStr;

use rstest::rstest;

use crate::telemetry::{self, TelemetryError};
use crate::{Config, ConfigError, DEFAULT_LOG_FILTER, LOG_FILTER_ENV, LOG_FORMAT_ENV, LogFormat};


fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_use_info_filter_and_json() {
    let config = Config::default();
    assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    assert_eq!(config.log_format(), LogFormat::Json);
}

#[rstest]
#[case::empty_document("{}", "info", LogFormat::Json)]
#[case::filter_only(r#"{"log_filter":"debug"}"#, "debug", LogFormat::Json)]
#[case::both(
    r#"{"log_filter":"skill_dispatch=trace","log_format":"compact"}"#,
    "skill_dispatch=trace",
    LogFormat::Compact
)]
fn json_document_overrides_defaults(
    #[case] document: &str,
    #[case] filter: &str,
    #[case] format: LogFormat,
) {
    let config = Config::from_json_str(document).expect("parse config");
    assert_eq!(config.log_filter(), filter);
    assert_eq!(config.log_format(), format);
}

#[rstest]
#[case::unknown_field(r#"{"log_level":"debug"}"#)]
#[case::unknown_format(r#"{"log_format":"pretty"}"#)]
#[case::not_json("log_filter = 'debug'")]
fn invalid_documents_fail_fast(#[case] document: &str) {
    let err = Config::from_json_str(document).expect_err("document should be rejected");
    assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err}");
}

#[test]
fn overrides_replace_document_values() {
    let config = Config::default()
        .with_log_filter("warn")
        .with_overrides_from(lookup(&[
            (LOG_FILTER_ENV, "skill_dispatch=debug"),
            (LOG_FORMAT_ENV, "Compact"),
        ]))
        .expect("apply overrides");
    assert_eq!(config.log_filter(), "skill_dispatch=debug");
    assert_eq!(config.log_format(), LogFormat::Compact);
}

#[test]
fn blank_overrides_are_ignored() {
    let config = Config::default()
        .with_log_format(LogFormat::Compact)
        .with_overrides_from(lookup(&[(LOG_FILTER_ENV, "  "), (LOG_FORMAT_ENV, "")]))
        .expect("apply overrides");
    assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    assert_eq!(config.log_format(), LogFormat::Compact);
}

#[test]
fn invalid_format_override_names_the_variable() {
    let err = Config::default()
        .with_overrides_from(lookup(&[(LOG_FORMAT_ENV, "yaml")]))
        .expect_err("unknown format should fail");
    let message = err.to_string();
    assert!(message.contains(LOG_FORMAT_ENV), "{message}");
    assert!(message.contains("yaml"), "{message}");
}

#[rstest]
#[case::json("json", LogFormat::Json)]
#[case::compact_upper("COMPACT", LogFormat::Compact)]
fn log_format_parses_case_insensitively(#[case] raw: &str, #[case] expected: LogFormat) {
    assert_eq!(LogFormat::from_str(raw).expect("parse format"), expected);
    assert_eq!(expected.is_structured(), expected == LogFormat::Json);
}

#[rstest]
#[case::json_on_terminal(LogFormat::Json, true, false)]
#[case::compact_on_terminal(LogFormat::Compact, true, true)]
#[case::compact_to_file(LogFormat::Compact, false, false)]
fn colour_only_for_readable_terminal_output(
    #[case] format: LogFormat,
    #[case] sink_is_terminal: bool,
    #[case] expected: bool,
) {
    assert_eq!(format.uses_colour(sink_is_terminal), expected);
}

#[test]
fn log_format_displays_snake_case() {
    assert_eq!(LogFormat::Compact.to_string(), "compact");
}

#[test]
fn invalid_filter_directive_is_rejected() {
    let config = Config::default().with_log_filter("skill_dispatch=loud");
    let err = telemetry::filter_for(&config).expect_err("invalid level should fail");
    assert!(matches!(err, TelemetryError::Filter { .. }));
}
