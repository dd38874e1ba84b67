//! Domain errors raised while building or running the dispatch core.
//!
//! Configuration mistakes (a chain without a handler, a mapper that was never
//! given a chain collection) surface from the `build()` calls so they fail at
//! start-up rather than on the first request. A resolution miss is not an
//! error: [`RequestMapper::resolve`](crate::RequestMapper::resolve) returns
//! `None` instead.

use thiserror::Error;

/// Errors arising from dispatch configuration and handler execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A handler chain was built without a request handler.
    #[error("handler chain requires a request handler")]
    MissingRequestHandler,

    /// A request mapper was built without ever supplying a chain collection.
    #[error("request mapper requires a handler chain collection (an empty one is allowed)")]
    MissingHandlerChains,

    /// A handler input was built without a request envelope.
    #[error("handler input requires a request envelope")]
    MissingRequestEnvelope,

    /// A handler or interceptor failed while processing a request.
    #[error("handler '{handler}' failed: {message}")]
    Handler {
        /// Name of the failing handler or interceptor.
        handler: String,
        /// Human-readable failure description.
        message: String,
    },
}

impl DispatchError {
    /// Creates a handler failure error.
    pub fn handler(handler: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handler {
            handler: handler.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for errors raised while building dispatch components.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingRequestHandler
                | Self::MissingHandlerChains
                | Self::MissingRequestEnvelope
        )
    }
}

#[cfg(test)]
mod tests;
