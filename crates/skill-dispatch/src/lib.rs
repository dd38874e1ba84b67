//! Request-to-handler resolution for skill request dispatch.
//!
//! The `skill-dispatch` crate implements the decision logic of a request
//! dispatcher: given an inbound request, it picks the single registered
//! handler responsible for it. Parsing request envelopes, executing
//! interceptors and building transport responses are left to the surrounding
//! dispatcher, which supplies a [`HandlerInput`] and consumes the
//! [`HandlerChain`] this crate returns.
//!
//! # Architecture
//!
//! Handlers implement the [`RequestHandler`] capability trait. Each handler is
//! wrapped in a [`HandlerChain`] together with its [`RequestInterceptor`]s and
//! [`ResponseInterceptor`]s. A [`RequestMapper`] holds the chains in
//! registration order and resolves an input to the first chain whose handler
//! reports it can handle it. The [`predicates`] module offers common checks
//! for handler implementations.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use skill_dispatch::{
//!     predicates, DispatchError, HandlerChain, HandlerInput, Request, RequestEnvelope,
//!     RequestHandler, RequestMapper, RequestType, Response,
//! };
//!
//! struct SessionEndedHandler;
//!
//! impl RequestHandler for SessionEndedHandler {
//!     fn can_handle(&self, input: &HandlerInput) -> bool {
//!         predicates::is_request_type(input, RequestType::SessionEndedRequest)
//!     }
//!
//!     fn handle(&self, _input: &HandlerInput) -> Result<Option<Response>, DispatchError> {
//!         Ok(None)
//!     }
//! }
//!
//! let mapper = RequestMapper::builder()
//!     .with_request_handler_chains([HandlerChain::builder()
//!         .with_request_handler(Arc::new(SessionEndedHandler))
//!         .build()
//!         .expect("chain")])
//!     .build()
//!     .expect("mapper");
//!
//! let input = HandlerInput::new(RequestEnvelope::new(Request::launch("r-1")));
//! assert!(mapper.resolve(&input).is_none());
//! ```

pub mod chain;
pub mod error;
pub mod handler;
pub mod input;
pub mod mapper;
pub mod model;
pub mod predicates;

#[cfg(test)]
mod tests;

pub use self::chain::{HandlerChain, HandlerChainBuilder};
pub use self::error::DispatchError;
pub use self::handler::{RequestHandler, RequestInterceptor, ResponseInterceptor};
pub use self::input::{HandlerInput, HandlerInputBuilder};
pub use self::mapper::{MAPPER_TARGET, RequestMapper, RequestMapperBuilder};
pub use self::model::{
    Intent, Request, RequestEnvelope, RequestType, Response, ResponseBuilder, Session,
    SessionEndedReason, Slot,
};
