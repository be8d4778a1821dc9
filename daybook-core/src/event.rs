//! Timed events belonging to a single calendar day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::time_of_day::TimeOfDay;

/// Stable identifier assigned when an event is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    pub fn new() -> Self {
        EventId(Uuid::new_v4())
    }

    /// First eight hex digits, enough to tell a day's events apart.
    pub fn short(&self) -> String {
        self.0.simple().to_string().chars().take(8).collect()
    }

    /// Whether `prefix` abbreviates this id (hyphens ignored).
    pub fn starts_with(&self, prefix: &str) -> bool {
        let prefix = prefix.replace('-', "").to_lowercase();
        !prefix.is_empty() && self.0.simple().to_string().starts_with(&prefix)
    }
}

// Records saved before ids existed get a fresh one on load.
impl Default for EventId {
    fn default() -> Self {
        EventId::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(EventId)
    }
}

/// Event category. An empty string in storage means no category was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventType {
    Work,
    Personal,
    Other,
    #[default]
    Unset,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Work => "work",
            EventType::Personal => "personal",
            EventType::Other => "other",
            EventType::Unset => "",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_else(|_| {
            log::warn!("Unknown event type '{}', reading as unset", s);
            EventType::Unset
        }))
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(EventType::Work),
            "personal" => Ok(EventType::Personal),
            "other" => Ok(EventType::Other),
            "" => Ok(EventType::Unset),
            other => Err(format!(
                "Unknown event type '{}'. Expected work, personal or other",
                other
            )),
        }
    }
}

/// A named time slot on one day. `start < end` holds for every stored event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: EventId,
    pub name: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: EventType,
}

impl Event {
    pub fn new(name: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Event {
            id: EventId::new(),
            name: name.into(),
            start,
            end,
            description: String::new(),
            kind: EventType::Unset,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_kind(mut self, kind: EventType) -> Self {
        self.kind = kind;
        self
    }

    /// Case-insensitive substring match over name and description.
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}-{}", self.name, self.start, self.end)
    }
}
