//! Request and response model consumed by handlers.
//!
//! These types are the parsed form of an inbound event. Parsing raw transport
//! payloads into them happens upstream of this crate.

mod envelope;
mod request;
mod response;


pub use self::envelope::{DEFAULT_ENVELOPE_VERSION, RequestEnvelope, Session};
pub use self::request::{Intent, Request, RequestType, SessionEndedReason, Slot};
pub use self::response::{Response, ResponseBuilder};
