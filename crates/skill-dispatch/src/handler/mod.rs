//! Capability traits implemented by request handlers and interceptors.
//!
//! Dispatch is capability based: a handler states whether it can process an
//! input through [`RequestHandler::can_handle`], and the mapper picks the first
//! registered handler that says yes. No runtime type inspection is involved.

mod interceptor;

pub use self::interceptor::{RequestInterceptor, ResponseInterceptor};

use crate::error::DispatchError;
use crate::input::HandlerInput;
use crate::model::Response;

/// A unit of logic that processes one or more kinds of request.
///
/// Implementations must be shareable across threads because a built
/// [`RequestMapper`](crate::RequestMapper) may resolve requests concurrently.
///
/// # Example
///
/// ```
/// use skill_dispatch::{
///     predicates, DispatchError, HandlerInput, RequestHandler, RequestType, Response,
/// };
///
/// struct LaunchHandler;
///
/// impl RequestHandler for LaunchHandler {
///     fn can_handle(&self, input: &HandlerInput) -> bool {
///         predicates::is_request_type(input, RequestType::LaunchRequest)
///     }
///
///     fn handle(&self, _input: &HandlerInput) -> Result<Option<Response>, DispatchError> {
///         Ok(Some(Response::builder().with_speech("Welcome").build()))
///     }
/// }
/// ```
pub trait RequestHandler: Send + Sync {
    /// Returns `true` when this handler accepts the input.
    ///
    /// Called once per resolution for every chain up to and including the
    /// first match. Implementations should be free of side effects.
    fn can_handle(&self, input: &HandlerInput) -> bool;

    /// Processes the input, optionally producing a response.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] when the handler cannot complete the
    /// request.
    fn handle(&self, input: &HandlerInput) -> Result<Option<Response>, DispatchError>;
}
