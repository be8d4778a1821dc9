//! The event store: a date-keyed mapping of events and its persistence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STORAGE_KEY;
use crate::date_key::DateKey;
use crate::error::{DaybookError, DaybookResult, Rejection};
use crate::event::{Event, EventId};
use crate::storage::Storage;

/// Events grouped by day, each day in insertion order.
///
/// A day is only present while it has at least one event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<DateKey, Vec<Event>>")]
pub struct EventMap(BTreeMap<DateKey, Vec<Event>>);

impl From<BTreeMap<DateKey, Vec<Event>>> for EventMap {
    fn from(mut days: BTreeMap<DateKey, Vec<Event>>) -> Self {
        days.retain(|_, events| !events.is_empty());
        EventMap(days)
    }
}

impl EventMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> DaybookResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The day's events, empty if the day has none.
    pub fn events_on(&self, date: DateKey) -> &[Event] {
        self.0.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_day(&self, date: DateKey) -> bool {
        self.0.contains_key(&date)
    }

    /// Days that have events, in date order.
    pub fn days(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// A copy of this mapping with `event` appended to `date`.
    ///
    /// No validation happens here; callers check drafts first.
    pub fn with_event(&self, date: DateKey, event: Event) -> EventMap {
        let mut next = self.clone();
        next.insert(date, event);
        next
    }

    /// A copy of this mapping without event `id` on `date`.
    pub fn without_event(&self, date: DateKey, id: EventId) -> DaybookResult<EventMap> {
        let mut next = self.clone();
        next.remove(date, id)?;
        Ok(next)
    }

    pub(crate) fn insert(&mut self, date: DateKey, event: Event) {
        self.0.entry(date).or_default().push(event);
    }

    pub(crate) fn remove(&mut self, date: DateKey, id: EventId) -> DaybookResult<Event> {
        let not_found = || DaybookError::EventNotFound { date, id };

        let events = self.0.get_mut(&date).ok_or_else(not_found)?;
        let index = events.iter().position(|e| e.id == id).ok_or_else(not_found)?;
        let removed = events.remove(index);

        if events.is_empty() {
            self.0.remove(&date);
        }
        Ok(removed)
    }

    /// Pretty-printed `{ "<date>": [events] }` document for one day.
    pub fn export_day(&self, date: DateKey) -> DaybookResult<Vec<u8>> {
        let events = self.events_on(date);
        if events.is_empty() {
            return Err(Rejection::NothingToExport.into());
        }

        let document: BTreeMap<DateKey, &[Event]> = BTreeMap::from([(date, events)]);
        Ok(serde_json::to_vec_pretty(&document)?)
    }
}

/// File name offered for a day's export.
pub fn export_file_name(date: DateKey) -> String {
    format!("events-{}.json", date)
}

/// The loaded mapping together with the storage it came from.
///
/// Every mutation writes the whole mapping back under one record.
pub struct EventStore<S = Box<dyn Storage>> {
    storage: S,
    record: String,
    events: EventMap,
}

impl<S: Storage> EventStore<S> {
    /// Load from the default `events` record.
    pub fn load(storage: S) -> Self {
        Self::load_record(storage, DEFAULT_STORAGE_KEY)
    }

    /// Load from a named record. Missing or unreadable data yields an empty store.
    pub fn load_record(storage: S, record: &str) -> Self {
        let events = read_events(&storage, record);
        log::debug!(
            "Loaded {} events over {} days from '{}'",
            events.event_count(),
            events.0.len(),
            record
        );

        EventStore {
            storage,
            record: record.to_string(),
            events,
        }
    }

    /// Re-read the record, dropping in-memory state.
    pub fn reload(&mut self) {
        self.events = read_events(&self.storage, &self.record);
    }

    /// Write the whole mapping to storage.
    pub fn save(&self) {
        match self.events.to_json() {
            Ok(json) => self.storage.write(&self.record, &json),
            Err(e) => log::error!("Failed to serialize events: {}", e),
        }
    }

    pub fn events(&self) -> &EventMap {
        &self.events
    }

    pub fn events_on(&self, date: DateKey) -> &[Event] {
        self.events.events_on(date)
    }

    pub fn add(&mut self, date: DateKey, event: Event) {
        log::debug!("Adding '{}' on {}", event.name, date);
        self.events.insert(date, event);
        self.save();
    }

    pub fn delete(&mut self, date: DateKey, id: EventId) -> DaybookResult<Event> {
        let removed = self.events.remove(date, id)?;
        log::debug!("Deleted '{}' from {}", removed.name, date);
        self.save();
        Ok(removed)
    }

    pub fn export_day(&self, date: DateKey) -> DaybookResult<Vec<u8>> {
        self.events.export_day(date)
    }

    pub fn record(&self) -> &str {
        &self.record
    }
}

/// Name of the record holding the raw text of a record that failed to load.
pub fn backup_record_name(record: &str) -> String {
    format!("{}.corrupt", record)
}

/// Read a record one event at a time, dropping only the entries that fail.
///
/// Whenever anything is dropped the raw text is copied to the backup record
/// first, since the next save overwrites the original.
fn read_events<S: Storage>(storage: &S, record: &str) -> EventMap {
    let Some(json) = storage.read(record) else {
        return EventMap::new();
    };

    let days: BTreeMap<String, Vec<serde_json::Value>> = match serde_json::from_str(&json) {
        Ok(days) => days,
        Err(e) => {
            log::warn!("Unreadable '{}' record: {}", record, e);
            keep_backup(storage, record, &json);
            return EventMap::new();
        }
    };

    let mut events: BTreeMap<DateKey, Vec<Event>> = BTreeMap::new();
    let mut dropped = 0;

    for (key, entries) in days {
        let Ok(date) = key.parse::<DateKey>() else {
            log::warn!("Dropping {} events under invalid date '{}'", entries.len(), key);
            dropped += entries.len().max(1);
            continue;
        };

        for entry in entries {
            match serde_json::from_value::<Event>(entry) {
                Ok(event) => events.entry(date).or_default().push(event),
                Err(e) => {
                    log::warn!("Dropping unreadable event on {}: {}", date, e);
                    dropped += 1;
                }
            }
        }
    }

    if dropped > 0 {
        keep_backup(storage, record, &json);
    }

    EventMap::from(events)
}

fn keep_backup<S: Storage>(storage: &S, record: &str, json: &str) {
    let backup = backup_record_name(record);
    storage.write(&backup, json);
    log::warn!("Kept the unmodified '{}' record as '{}'", record, backup);
}
