//! Request mapper resolving a handler input to a single handler chain.
//!
//! The [`RequestMapper`] holds handler chains in registration order and, for
//! each input, returns the first chain whose handler accepts it. Registration
//! order is part of the configuration contract: when several chains could
//! handle the same input, the earliest registered one always wins, and chains
//! after it are never asked.
//!
//! A mapper goes through two states. The [`RequestMapperBuilder`] accumulates
//! chains; [`RequestMapperBuilder::build`] validates and freezes them. Once
//! built, a mapper holds no per-request state and can resolve concurrently
//! from any number of threads.

use tracing::debug;

use crate::chain::HandlerChain;
use crate::error::DispatchError;
use crate::input::HandlerInput;

/// Tracing target for resolution events, usable in filter directives
/// such as `skill_dispatch::mapper=debug`.
pub const MAPPER_TARGET: &str = module_path!();

/// Immutable, ordered set of handler chains.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use skill_dispatch::{
///     predicates, DispatchError, HandlerChain, HandlerInput, Intent, Request,
///     RequestEnvelope, RequestHandler, RequestMapper, Response,
/// };
///
/// struct HelloHandler;
///
/// impl RequestHandler for HelloHandler {
///     fn can_handle(&self, input: &HandlerInput) -> bool {
///         predicates::is_intent_name(input, "HelloIntent")
///     }
///
///     fn handle(&self, _input: &HandlerInput) -> Result<Option<Response>, DispatchError> {
///         Ok(Some(Response::builder().with_speech("Hello").build()))
///     }
/// }
///
/// let chain = HandlerChain::builder()
///     .with_request_handler(Arc::new(HelloHandler))
///     .build()
///     .expect("chain");
/// let mapper = RequestMapper::builder()
///     .add_request_handler_chain(chain)
///     .build()
///     .expect("mapper");
///
/// let hello = HandlerInput::new(RequestEnvelope::new(Request::for_intent(
///     "r-1",
///     Intent::new("HelloIntent"),
/// )));
/// assert!(mapper.resolve(&hello).is_some());
///
/// let launch = HandlerInput::new(RequestEnvelope::new(Request::launch("r-2")));
/// assert!(mapper.resolve(&launch).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RequestMapper {
    chains: Vec<HandlerChain>,
}

impl RequestMapper {
    /// Starts building a mapper.
    #[must_use]
    pub fn builder() -> RequestMapperBuilder {
        RequestMapperBuilder::default()
    }

    /// Returns the first chain, in registration order, that accepts the input.
    ///
    /// Checks stop at the first match, so later chains are never evaluated.
    /// Every check receives the `input` reference unchanged. `None` means no
    /// chain accepted the input; callers should treat it as an ordinary
    /// outcome, for example by falling back to a default handler.
    ///
    /// A panic raised inside a handler's check is not caught here.
    #[must_use]
    pub fn resolve(&self, input: &HandlerInput) -> Option<&HandlerChain> {
        let request_type = input.request_type();
        if let Some((chain_index, chain)) = self
            .chains
            .iter()
            .enumerate()
            .find(|(_, chain)| chain.can_handle(input))
        {
            debug!(
                target: MAPPER_TARGET,
                request_type = %request_type,
                chain_index,
                "resolved handler chain"
            );
            Some(chain)
        } else {
            debug!(
                target: MAPPER_TARGET,
                request_type = %request_type,
                candidates = self.chains.len(),
                "no handler chain accepts request"
            );
            None
        }
    }

    /// Returns the chains in registration order.
    #[must_use]
    pub fn chains(&self) -> &[HandlerChain] {
        &self.chains
    }

    /// Returns the number of registered chains.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chains.len()
    }

    /// Returns `true` when no chains are registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

/// Accumulates handler chains for a [`RequestMapper`].
///
/// Bulk and single additions may be mixed; the final order is the order in
/// which chains were added. Supplying an empty collection counts as supplying
/// one.
#[derive(Debug, Default)]
pub struct RequestMapperBuilder {
    chains: Option<Vec<HandlerChain>>,
}

impl RequestMapperBuilder {
    /// Appends a collection of chains, preserving its order.
    #[must_use]
    pub fn with_request_handler_chains(
        mut self,
        chains: impl IntoIterator<Item = HandlerChain>,
    ) -> Self {
        self.chains.get_or_insert_with(Vec::new).extend(chains);
        self
    }

    /// Appends a single chain.
    #[must_use]
    pub fn add_request_handler_chain(mut self, chain: HandlerChain) -> Self {
        self.chains.get_or_insert_with(Vec::new).push(chain);
        self
    }

    /// Freezes the accumulated chains into a mapper.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingHandlerChains`] if neither
    /// [`with_request_handler_chains`](Self::with_request_handler_chains) nor
    /// [`add_request_handler_chain`](Self::add_request_handler_chain) was
    /// called.
    pub fn build(self) -> Result<RequestMapper, DispatchError> {
        let chains = self.chains.ok_or(DispatchError::MissingHandlerChains)?;
        debug!(
            target: MAPPER_TARGET,
            chains = chains.len(),
            "built request mapper"
        );
        Ok(RequestMapper { chains })
    }
}
