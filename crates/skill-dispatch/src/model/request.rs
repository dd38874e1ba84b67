//! Polymorphic request payloads and their discriminants.

use strum::{Display, EnumString};

/// Discriminant identifying the concrete kind of a [`Request`].
///
/// Displays and parses as the PascalCase name used on the wire; parsing is
/// case-insensitive.
///
/// # Example
///
/// ```
/// use std::str::FromStr;
/// use skill_dispatch::RequestType;
///
/// assert_eq!(RequestType::IntentRequest.to_string(), "IntentRequest");
/// assert_eq!(
///     RequestType::from_str("launchrequest").ok(),
///     Some(RequestType::LaunchRequest)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum RequestType {
    /// The user opened the skill without a specific request.
    LaunchRequest,
    /// The user asked for something the interaction model maps to an intent.
    IntentRequest,
    /// The session was closed by the user, an error, or a timeout.
    SessionEndedRequest,
    /// The skill was enabled for an account.
    SkillEnabledRequest,
    /// The skill was disabled for an account.
    SkillDisabledRequest,
    /// The platform is asking whether the skill could fulfil an intent.
    CanFulfillIntentRequest,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum SessionEndedReason {
    /// The user explicitly ended the session.
    UserInitiated,
    /// An error occurred that caused the session to end.
    Error,
    /// The user failed to answer within the allowed reprompts.
    ExceededMaxReprompts,
}

/// A named value captured by an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    name: String,
    value: Option<String>,
}

impl Slot {
    /// Creates a slot with an optional resolved value.
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Returns the slot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the slot value, if the user supplied one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// A named sub-intent carried by intent-bearing requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    name: String,
    slots: Vec<Slot>,
}

impl Intent {
    /// Creates an intent with no slots.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
        }
    }

    /// Appends a slot, keeping declaration order.
    #[must_use]
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Returns the intent name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all slots in declaration order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Looks up a slot by exact name.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.name() == name)
    }
}

/// An inbound request payload.
///
/// Requests are immutable once constructed. The variant is the request's
/// discriminant; see [`Request::request_type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// See [`RequestType::LaunchRequest`].
    Launch {
        /// Platform-assigned request identifier.
        request_id: String,
    },
    /// See [`RequestType::IntentRequest`].
    Intent {
        /// Platform-assigned request identifier.
        request_id: String,
        /// The intent the user invoked.
        intent: Intent,
    },
    /// See [`RequestType::SessionEndedRequest`].
    SessionEnded {
        /// Platform-assigned request identifier.
        request_id: String,
        /// Why the session ended.
        reason: SessionEndedReason,
    },
    /// See [`RequestType::SkillEnabledRequest`].
    SkillEnabled {
        /// Platform-assigned request identifier.
        request_id: String,
    },
    /// See [`RequestType::SkillDisabledRequest`].
    SkillDisabled {
        /// Platform-assigned request identifier.
        request_id: String,
    },
    /// See [`RequestType::CanFulfillIntentRequest`].
    CanFulfillIntent {
        /// Platform-assigned request identifier.
        request_id: String,
        /// The intent the platform is asking about.
        intent: Intent,
    },
}

impl Request {
    /// Creates a launch request.
    pub fn launch(request_id: impl Into<String>) -> Self {
        Self::Launch {
            request_id: request_id.into(),
        }
    }

    /// Creates an intent request.
    pub fn for_intent(request_id: impl Into<String>, intent: Intent) -> Self {
        Self::Intent {
            request_id: request_id.into(),
            intent,
        }
    }

    /// Creates a session-ended request.
    pub fn session_ended(request_id: impl Into<String>, reason: SessionEndedReason) -> Self {
        Self::SessionEnded {
            request_id: request_id.into(),
            reason,
        }
    }

    /// Creates a skill-enabled event.
    pub fn skill_enabled(request_id: impl Into<String>) -> Self {
        Self::SkillEnabled {
            request_id: request_id.into(),
        }
    }

    /// Creates a skill-disabled event.
    pub fn skill_disabled(request_id: impl Into<String>) -> Self {
        Self::SkillDisabled {
            request_id: request_id.into(),
        }
    }

    /// Creates a can-fulfil-intent query.
    pub fn can_fulfill_intent(request_id: impl Into<String>, intent: Intent) -> Self {
        Self::CanFulfillIntent {
            request_id: request_id.into(),
            intent,
        }
    }

    /// Returns the discriminant of this request.
    #[must_use]
    pub const fn request_type(&self) -> RequestType {
        match self {
            Self::Launch { .. } => RequestType::LaunchRequest,
            Self::Intent { .. } => RequestType::IntentRequest,
            Self::SessionEnded { .. } => RequestType::SessionEndedRequest,
            Self::SkillEnabled { .. } => RequestType::SkillEnabledRequest,
            Self::SkillDisabled { .. } => RequestType::SkillDisabledRequest,
            Self::CanFulfillIntent { .. } => RequestType::CanFulfillIntentRequest,
        }
    }

    /// Returns the platform-assigned request identifier.
    #[must_use]
    pub fn request_id(&self) -> &str {
        match self {
            Self::Launch { request_id }
            | Self::Intent { request_id, .. }
            | Self::SessionEnded { request_id, .. }
            | Self::SkillEnabled { request_id }
            | Self::SkillDisabled { request_id }
            | Self::CanFulfillIntent { request_id, .. } => request_id,
        }
    }

    /// Returns the named sub-intent for intent-bearing requests.
    #[must_use]
    pub const fn intent(&self) -> Option<&Intent> {
        match self {
            Self::Intent { intent, .. } | Self::CanFulfillIntent { intent, .. } => Some(intent),
            Self::Launch { .. }
            | Self::SessionEnded { .. }
            | Self::SkillEnabled { .. }
            | Self::SkillDisabled { .. } => None,
        }
    }
}
