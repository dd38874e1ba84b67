//! Interceptors run by the dispatcher around a resolved handler.

use crate::error::DispatchError;
use crate::input::HandlerInput;
use crate::model::Response;

/// Runs before the handler of the chain it is registered on.
pub trait RequestInterceptor: Send + Sync {
    /// Inspects the input before the handler executes.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] to abort handling of the request.
    fn process(&self, input: &HandlerInput) -> Result<(), DispatchError>;
}

/// Runs after the handler of the chain it is registered on.
pub trait ResponseInterceptor: Send + Sync {
    /// Inspects the input and the handler's response, if it produced one.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] to fail the request after handling.
    fn process(
        &self,
        input: &HandlerInput,
        response: Option<&Response>,
    ) -> Result<(), DispatchError>;
}
