use serde::{Deserialize, Serialize};
use std::fmt;

/// The feed's `eventType` for a home run.
const HOME_RUN: &str = "home_run";

/// The outcome of a plate appearance as reported by the event feed.
///
/// Only home runs matter to pace tracking, so every other outcome is kept
/// verbatim in `Other` for display and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    HomeRun,
    Other(String),
}

impl EventType {
    pub fn is_home_run(&self) -> bool {
        matches!(self, EventType::HomeRun)
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventType::HomeRun => HOME_RUN,
            EventType::Other(raw) => raw,
        }
    }
}

impl From<String> for EventType {
    fn from(raw: String) -> Self {
        if raw == HOME_RUN {
            EventType::HomeRun
        } else {
            EventType::Other(raw)
        }
    }
}

impl From<EventType> for String {
    fn from(event: EventType) -> Self {
        match event {
            EventType::HomeRun => HOME_RUN.to_string(),
            EventType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
