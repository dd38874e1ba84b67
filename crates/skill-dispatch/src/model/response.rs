//! Handler output.

/// Response produced by a request handler.
///
/// # Example
///
/// ```
/// use skill_dispatch::Response;
///
/// let response = Response::builder()
///     .with_speech("Hello")
///     .with_should_end_session(true)
///     .build();
/// assert_eq!(response.output_speech(), Some("Hello"));
/// assert_eq!(response.should_end_session(), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    output_speech: Option<String>,
    reprompt: Option<String>,
    should_end_session: Option<bool>,
}

impl Response {
    /// Starts building a response.
    #[must_use]
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// Returns the speech to render, if any.
    #[must_use]
    pub fn output_speech(&self) -> Option<&str> {
        self.output_speech.as_deref()
    }

    /// Returns the reprompt speech, if any.
    #[must_use]
    pub fn reprompt(&self) -> Option<&str> {
        self.reprompt.as_deref()
    }

    /// Returns whether the session should close, when the handler decided.
    #[must_use]
    pub const fn should_end_session(&self) -> Option<bool> {
        self.should_end_session
    }
}

/// Consuming builder for [`Response`].
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    /// Sets the output speech.
    #[must_use]
    pub fn with_speech(mut self, speech: impl Into<String>) -> Self {
        self.response.output_speech = Some(speech.into());
        self
    }

    /// Sets the reprompt speech.
    #[must_use]
    pub fn with_reprompt(mut self, reprompt: impl Into<String>) -> Self {
        self.response.reprompt = Some(reprompt.into());
        self
    }

    /// Sets whether the session should end after this response.
    #[must_use]
    pub fn with_should_end_session(mut self, end: bool) -> Self {
        self.response.should_end_session = Some(end);
        self
    }

    /// Finishes the response.
    #[must_use]
    pub fn build(self) -> Response {
        self.response
    }
}
