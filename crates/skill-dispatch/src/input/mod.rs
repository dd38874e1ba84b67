//! Per-request context handed to predicates and handlers.
//!
//! A [`HandlerInput`] is built once per inbound request by the dispatcher and
//! then lent, by shared reference, to every predicate evaluated during
//! resolution and to the selected handler. Nothing in this crate clones it,
//! so every candidate observes the same instance.

use std::collections::BTreeMap;

use crate::error::DispatchError;
use crate::model::{Request, RequestEnvelope, RequestType};

/// Request context passed to handlers and their predicates.
///
/// # Example
///
/// ```
/// use skill_dispatch::{HandlerInput, Intent, Request, RequestEnvelope, RequestType};
///
/// let envelope = RequestEnvelope::new(Request::for_intent("r-1", Intent::new("HelloIntent")));
/// let input = HandlerInput::builder()
///     .with_request_envelope(envelope)
///     .with_attribute("locale", "en-GB")
///     .build()
///     .expect("envelope supplied");
/// assert_eq!(input.request_type(), RequestType::IntentRequest);
/// assert_eq!(input.attribute("locale"), Some("en-GB"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerInput {
    request_envelope: RequestEnvelope,
    attributes: BTreeMap<String, String>,
}

impl HandlerInput {
    /// Wraps an envelope with no request attributes.
    #[must_use]
    pub const fn new(request_envelope: RequestEnvelope) -> Self {
        Self {
            request_envelope,
            attributes: BTreeMap::new(),
        }
    }

    /// Starts building a handler input.
    #[must_use]
    pub fn builder() -> HandlerInputBuilder {
        HandlerInputBuilder::default()
    }

    /// Returns the request envelope.
    #[must_use]
    pub const fn request_envelope(&self) -> &RequestEnvelope {
        &self.request_envelope
    }

    /// Returns the wrapped request.
    #[must_use]
    pub const fn request(&self) -> &Request {
        self.request_envelope.request()
    }

    /// Returns the discriminant of the wrapped request.
    #[must_use]
    pub const fn request_type(&self) -> RequestType {
        self.request().request_type()
    }

    /// Looks up a request attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Returns all request attributes ordered by key.
    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

/// Builder for [`HandlerInput`].
#[derive(Debug, Default)]
pub struct HandlerInputBuilder {
    request_envelope: Option<RequestEnvelope>,
    attributes: BTreeMap<String, String>,
}

impl HandlerInputBuilder {
    /// Sets the request envelope.
    #[must_use]
    pub fn with_request_envelope(mut self, envelope: RequestEnvelope) -> Self {
        self.request_envelope = Some(envelope);
        self
    }

    /// Adds a request attribute, replacing any previous value for the key.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Finishes the input.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingRequestEnvelope`] if no envelope was
    /// supplied.
    pub fn build(self) -> Result<HandlerInput, DispatchError> {
        let request_envelope = self
            .request_envelope
            .ok_or(DispatchError::MissingRequestEnvelope)?;
        Ok(HandlerInput {
            request_envelope,
            attributes: self.attributes,
        })
    }
}
