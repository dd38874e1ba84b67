//! Crate-level test doubles and behaviour tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::chain::HandlerChain;
use crate::error::DispatchError;
use crate::handler::{RequestHandler, RequestInterceptor, ResponseInterceptor};
use crate::input::HandlerInput;
use crate::model::{Intent, Request, RequestEnvelope, Response};
use crate::predicates;


type Predicate = Box<dyn Fn(&HandlerInput) -> bool + Send + Sync>;

/// Fake handler that records every capability check made against it.
pub(crate) struct RecordingHandler {
    name: &'static str,
    predicate: Predicate,
    evaluations: AtomicUsize,
    observed: Mutex<Vec<usize>>,
}

impl RecordingHandler {
    fn with_predicate(name: &'static str, predicate: Predicate) -> Arc<Self> {
        Arc::new(Self {
            name,
            predicate,
            evaluations: AtomicUsize::new(0),
            observed: Mutex::new(Vec::new()),
        })
    }

    /// Handler whose check always returns `result`.
    pub(crate) fn always(name: &'static str, result: bool) -> Arc<Self> {
        Self::with_predicate(name, Box::new(move |_: &HandlerInput| result))
    }

    /// Handler accepting requests of one discriminant.
    pub(crate) fn for_request_type(
        name: &'static str,
        request_type: crate::model::RequestType,
    ) -> Arc<Self> {
        Self::with_predicate(name, Box::new(predicates::request_type(request_type)))
    }

    /// Handler accepting intent requests with the given intent name.
    pub(crate) fn for_intent(name: &'static str, intent: &str) -> Arc<Self> {
        Self::with_predicate(name, Box::new(predicates::intent_name(intent)))
    }

    pub(crate) const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of times `can_handle` has been called.
    pub(crate) fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }

    /// Addresses of every input passed to `can_handle`, in call order.
    pub(crate) fn observed_inputs(&self) -> Vec<usize> {
        self.observed.lock().expect("observed lock").clone()
    }
}

impl RequestHandler for RecordingHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        self.observed
            .lock()
            .expect("observed lock")
            .push(address_of(input));
        (self.predicate)(input)
    }

    fn handle(&self, _input: &HandlerInput) -> Result<Option<Response>, DispatchError> {
        Ok(Some(Response::builder().with_speech(self.name).build()))
    }
}

/// Fake handler whose capability check panics.
pub(crate) struct PanickingHandler;

impl RequestHandler for PanickingHandler {
    fn can_handle(&self, _input: &HandlerInput) -> bool {
        panic!("capability check exploded");
    }

    fn handle(&self, _input: &HandlerInput) -> Result<Option<Response>, DispatchError> {
        Err(DispatchError::handler("PanickingHandler", "never resolvable"))
    }
}

/// Interceptor that does nothing; used to observe ordering by identity.
pub(crate) struct NoopInterceptor;

impl RequestInterceptor for NoopInterceptor {
    fn process(&self, _input: &HandlerInput) -> Result<(), DispatchError> {
        Ok(())
    }
}

impl ResponseInterceptor for NoopInterceptor {
    fn process(
        &self,
        _input: &HandlerInput,
        _response: Option<&Response>,
    ) -> Result<(), DispatchError> {
        Ok(())
    }
}

/// Address of a value, for identity comparisons across trait objects.
pub(crate) fn address_of<T: ?Sized>(value: &T) -> usize {
    std::ptr::from_ref(value).cast::<()>().addr()
}

/// Returns `true` when `chain` wraps exactly `handler`.
pub(crate) fn wraps<H: RequestHandler>(chain: &HandlerChain, handler: &Arc<H>) -> bool {
    address_of(&**chain.request_handler()) == address_of(&**handler)
}

pub(crate) fn chain_for(handler: Arc<dyn RequestHandler>) -> HandlerChain {
    HandlerChain::builder()
        .with_request_handler(handler)
        .build()
        .expect("chain with handler")
}

pub(crate) fn intent_input(name: &str) -> HandlerInput {
    HandlerInput::new(RequestEnvelope::new(Request::for_intent(
        "amzn1.echo-api.request.1",
        Intent::new(name),
    )))
}

pub(crate) fn skill_enabled_input() -> HandlerInput {
    HandlerInput::new(RequestEnvelope::new(Request::skill_enabled(
        "amzn1.echo-api.request.2",
    )))
}

#[test]
fn recording_handler_counts_and_captures() {
    let handler = RecordingHandler::always("counter", false);
    let input = skill_enabled_input();
    assert!(!handler.can_handle(&input));
    assert!(!handler.can_handle(&input));
    assert_eq!(handler.evaluations(), 2);
    assert_eq!(
        handler.observed_inputs(),
        vec![address_of(&input), address_of(&input)]
    );
    let response = handler
        .handle(&input)
        .expect("handle")
        .expect("response");
    assert_eq!(response.output_speech(), Some(handler.name()));
}
