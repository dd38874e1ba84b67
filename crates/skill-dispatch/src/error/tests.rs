//! Unit tests for dispatch error types.

use rstest::rstest;

use super::*;

#[rstest]
#[case::missing_handler(DispatchError::MissingRequestHandler, "request handler")]
#[case::missing_chains(DispatchError::MissingHandlerChains, "handler chain collection")]
#[case::missing_envelope(DispatchError::MissingRequestEnvelope, "request envelope")]
fn configuration_errors_describe_missing_part(
    #[case] error: DispatchError,
    #[case] expected: &str,
) {
    let message = error.to_string();
    assert!(
        message.contains(expected),
        "expected '{expected}' in message: {message}"
    );
    assert!(error.is_configuration_error());
}

#[test]
fn handler_error_message_includes_name_and_detail() {
    let error = DispatchError::handler("HelloWorldHandler", "speech text missing");
    let message = error.to_string();
    assert!(
        message.contains("HelloWorldHandler"),
        "expected handler name in message: {message}"
    );
    assert!(
        message.contains("speech text missing"),
        "expected detail in message: {message}"
    );
    assert!(!error.is_configuration_error());
}

#[test]
fn dispatch_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DispatchError>();
}
