//! Handler chains: one handler bundled with its interceptors.
//!
//! A [`HandlerChain`] is the unit the mapper resolves to. It owns exactly one
//! [`RequestHandler`] plus ordered request and response interceptors, and
//! answers the mapper's capability check by delegating to the handler.
//! Chains are immutable once built and are shared by reference across
//! concurrent resolutions.

use std::fmt;
use std::sync::Arc;

use crate::error::DispatchError;
use crate::handler::{RequestHandler, RequestInterceptor, ResponseInterceptor};
use crate::input::HandlerInput;

/// A request handler with its pre- and post-processing interceptors.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use skill_dispatch::{
///     predicates, DispatchError, HandlerChain, HandlerInput, RequestHandler, RequestType,
///     Response,
/// };
///
/// struct EnabledHandler;
///
/// impl RequestHandler for EnabledHandler {
///     fn can_handle(&self, input: &HandlerInput) -> bool {
///         predicates::is_request_type(input, RequestType::SkillEnabledRequest)
///     }
///
///     fn handle(&self, _input: &HandlerInput) -> Result<Option<Response>, DispatchError> {
///         Ok(None)
///     }
/// }
///
/// let chain = HandlerChain::builder()
///     .with_request_handler(Arc::new(EnabledHandler))
///     .build()
///     .expect("handler supplied");
/// assert!(chain.request_interceptors().is_empty());
///
/// let err = HandlerChain::builder().build().expect_err("no handler");
/// assert_eq!(err, DispatchError::MissingRequestHandler);
/// ```
#[derive(Clone)]
pub struct HandlerChain {
    request_handler: Arc<dyn RequestHandler>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl HandlerChain {
    /// Starts building a chain.
    #[must_use]
    pub fn builder() -> HandlerChainBuilder {
        HandlerChainBuilder::default()
    }

    /// Returns `true` when the chain's handler accepts the input.
    ///
    /// Delegates to [`RequestHandler::can_handle`] with the same reference it
    /// was given; any panic raised by the handler propagates unchanged.
    #[must_use]
    pub fn can_handle(&self, input: &HandlerInput) -> bool {
        self.request_handler.can_handle(input)
    }

    /// Returns the chain's handler.
    #[must_use]
    pub const fn request_handler(&self) -> &Arc<dyn RequestHandler> {
        &self.request_handler
    }

    /// Returns the interceptors to run before the handler, in order.
    #[must_use]
    pub fn request_interceptors(&self) -> &[Arc<dyn RequestInterceptor>] {
        &self.request_interceptors
    }

    /// Returns the interceptors to run after the handler, in order.
    #[must_use]
    pub fn response_interceptors(&self) -> &[Arc<dyn ResponseInterceptor>] {
        &self.response_interceptors
    }
}

impl fmt::Debug for HandlerChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`HandlerChain`].
///
/// Bulk and single interceptor additions concatenate in call order.
#[derive(Default)]
pub struct HandlerChainBuilder {
    request_handler: Option<Arc<dyn RequestHandler>>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl HandlerChainBuilder {
    /// Sets the handler, replacing any previously supplied one.
    #[must_use]
    pub fn with_request_handler(mut self, handler: Arc<dyn RequestHandler>) -> Self {
        self.request_handler = Some(handler);
        self
    }

    /// Appends several request interceptors.
    #[must_use]
    pub fn with_request_interceptors(
        mut self,
        interceptors: impl IntoIterator<Item = Arc<dyn RequestInterceptor>>,
    ) -> Self {
        self.request_interceptors.extend(interceptors);
        self
    }

    /// Appends one request interceptor.
    #[must_use]
    pub fn add_request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    /// Appends several response interceptors.
    #[must_use]
    pub fn with_response_interceptors(
        mut self,
        interceptors: impl IntoIterator<Item = Arc<dyn ResponseInterceptor>>,
    ) -> Self {
        self.response_interceptors.extend(interceptors);
        self
    }

    /// Appends one response interceptor.
    #[must_use]
    pub fn add_response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    /// Finishes the chain.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingRequestHandler`] if no handler was
    /// supplied.
    pub fn build(self) -> Result<HandlerChain, DispatchError> {
        let request_handler = self
            .request_handler
            .ok_or(DispatchError::MissingRequestHandler)?;
        Ok(HandlerChain {
            request_handler,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        })
    }
}

impl fmt::Debug for HandlerChainBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChainBuilder")
            .field("has_request_handler", &self.request_handler.is_some())
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .finish()
    }
}
