//! Reusable checks for [`RequestHandler::can_handle`](crate::RequestHandler::can_handle).
//!
//! The `is_*` functions test an input directly. [`request_type`] and
//! [`intent_name`] return closures for handlers that store their predicate.

use crate::input::HandlerInput;
use crate::model::RequestType;

/// Returns `true` when the input's request has the given discriminant.
#[must_use]
pub fn is_request_type(input: &HandlerInput, request_type: RequestType) -> bool {
    input.request_type() == request_type
}

/// Returns `true` when the input carries an intent with exactly this name.
///
/// Only intent requests match; a can-fulfil-intent query naming the same
/// intent does not.
///
/// # Example
///
/// ```
/// use skill_dispatch::{predicates, HandlerInput, Intent, Request, RequestEnvelope};
///
/// let input = HandlerInput::new(RequestEnvelope::new(Request::for_intent(
///     "r-1",
///     Intent::new("AMAZON.HelpIntent"),
/// )));
/// assert!(predicates::is_intent_name(&input, "AMAZON.HelpIntent"));
/// assert!(!predicates::is_intent_name(&input, "amazon.helpintent"));
/// ```
#[must_use]
pub fn is_intent_name(input: &HandlerInput, name: &str) -> bool {
    is_request_type(input, RequestType::IntentRequest)
        && input
            .request()
            .intent()
            .is_some_and(|intent| intent.name() == name)
}

/// Builds a predicate matching requests of the given discriminant.
pub fn request_type(request_type: RequestType) -> impl Fn(&HandlerInput) -> bool + Send + Sync {
    move |input: &HandlerInput| is_request_type(input, request_type)
}

/// Builds a predicate matching intent requests with the given intent name.
pub fn intent_name(name: &str) -> impl Fn(&HandlerInput) -> bool + Send + Sync + use<> {
    let name = name.to_owned();
    move |input: &HandlerInput| is_intent_name(input, &name)
}
