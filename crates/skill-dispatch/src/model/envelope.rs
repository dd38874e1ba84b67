//! Request envelope and session metadata.

use super::request::Request;

/// Envelope version stamped on requests built without an explicit one.
pub const DEFAULT_ENVELOPE_VERSION: &str = "1.0";

/// Session metadata attached to in-session requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    session_id: String,
    new: bool,
}

impl Session {
    /// Creates session metadata.
    pub fn new(session_id: impl Into<String>, new: bool) -> Self {
        Self {
            session_id: session_id.into(),
            new,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns `true` when this request opened the session.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.new
    }
}

/// A parsed inbound request together with its envelope metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEnvelope {
    version: String,
    session: Option<Session>,
    request: Request,
}

impl RequestEnvelope {
    /// Wraps a request using the default envelope version and no session.
    pub fn new(request: Request) -> Self {
        Self {
            version: DEFAULT_ENVELOPE_VERSION.to_owned(),
            session: None,
            request,
        }
    }

    /// Replaces the envelope version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Attaches session metadata.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Returns the envelope version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the session, if the request was sent in one.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the wrapped request.
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }
}
