//! Output formats for dispatch logs.
//!
//! The format is chosen per host. Both spellings accepted by
//! [`Config`](crate::Config) (JSON documents and `SKILL_DISPATCH_LOG_FORMAT`)
//! use the snake_case names below.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How [`telemetry`](crate::telemetry) renders events.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event with fields flattened to the top level.
    #[default]
    Json,
    /// Single human-readable line per event.
    Compact,
}

impl LogFormat {
    /// Returns `true` for machine-readable formats.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }

    /// Returns `true` when events should carry ANSI colour codes.
    ///
    /// Structured output is never coloured; readable output is coloured only
    /// when the sink is a terminal.
    #[must_use]
    pub const fn uses_colour(self, sink_is_terminal: bool) -> bool {
        !self.is_structured() && sink_is_terminal
    }
}
