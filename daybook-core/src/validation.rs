//! Turning user input into events.

use crate::date_key::DateKey;
use crate::error::Rejection;
use crate::event::{Event, EventId, EventType};
use crate::overlap::find_overlap;
use crate::time_of_day::TimeOfDay;

/// Event fields as entered by the user, before any checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub description: String,
    pub kind: EventType,
}

impl EventDraft {
    pub fn new(name: impl Into<String>) -> Self {
        EventDraft {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn times(mut self, start: TimeOfDay, end: TimeOfDay) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn kind(mut self, kind: EventType) -> Self {
        self.kind = kind;
        self
    }

    /// Check the draft against the day it is being added to.
    ///
    /// `existing` must be the day's full stored list, not a filtered view.
    /// Checks run in order: day and name, both times, time order, overlap.
    pub fn validate(
        &self,
        selected: Option<DateKey>,
        existing: &[Event],
    ) -> Result<Event, Rejection> {
        let name = self.name.trim();
        if selected.is_none() || name.is_empty() {
            return Err(Rejection::MissingDateOrName);
        }

        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(Rejection::MissingTimes);
        };

        if start >= end {
            return Err(Rejection::StartNotBeforeEnd);
        }

        if let Some(conflict) = find_overlap(start, end, existing) {
            return Err(Rejection::Overlap(conflict.to_string()));
        }

        Ok(Event {
            id: EventId::new(),
            name: name.to_string(),
            start,
            end,
            description: self.description.trim().to_string(),
            kind: self.kind,
        })
    }
}
