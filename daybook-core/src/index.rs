//! The selected day's view over the event store.

use crate::date_key::DateKey;
use crate::error::{DaybookError, DaybookResult, Rejection};
use crate::event::{Event, EventId};
use crate::storage::Storage;
use crate::store::{EventStore, export_file_name};
use crate::validation::EventDraft;

/// A day's events packaged for saving to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// Owns the event store and tracks which day is selected and how the
/// day's list is filtered. The filtered list is never stored; it is
/// derived from the store on every read.
pub struct EventIndex<S = Box<dyn Storage>> {
    store: EventStore<S>,
    selected: Option<DateKey>,
    filter: String,
}

impl<S: Storage> EventIndex<S> {
    pub fn new(store: EventStore<S>) -> Self {
        EventIndex {
            store,
            selected: None,
            filter: String::new(),
        }
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn selected(&self) -> Option<DateKey> {
        self.selected
    }

    pub fn select(&mut self, date: DateKey) {
        self.selected = Some(date);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, keyword: impl Into<String>) {
        self.filter = keyword.into();
    }

    /// Everything stored for the selected day, ignoring the filter.
    pub fn day_events(&self) -> &[Event] {
        match self.selected {
            Some(date) => self.store.events_on(date),
            None => &[],
        }
    }

    /// The selected day's events that match the filter, in stored order.
    pub fn selected_events(&self) -> Vec<&Event> {
        self.day_events()
            .iter()
            .filter(|e| e.matches(&self.filter))
            .collect()
    }

    /// Validate `draft` against the selected day and store it.
    pub fn add(&mut self, draft: &EventDraft) -> Result<Event, Rejection> {
        let event = draft.validate(self.selected, self.day_events())?;
        let Some(date) = self.selected else {
            return Err(Rejection::MissingDateOrName);
        };

        self.store.add(date, event.clone());
        Ok(event)
    }

    /// Remove event `id` from the selected day.
    pub fn delete(&mut self, id: EventId) -> DaybookResult<Event> {
        let date = self.selected.ok_or(DaybookError::NoDaySelected)?;
        self.store.delete(date, id)
    }

    /// Find a selected-day event by full id or unambiguous id prefix.
    pub fn resolve(&self, id_or_prefix: &str) -> Option<&Event> {
        let mut candidates = self
            .day_events()
            .iter()
            .filter(|e| e.id.starts_with(id_or_prefix));
        let first = candidates.next()?;
        match candidates.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// Export the selected day's stored events.
    pub fn export(&self) -> Result<Export, Rejection> {
        let Some(date) = self.selected else {
            return Err(Rejection::NothingToExport);
        };

        match self.store.export_day(date) {
            Ok(contents) => Ok(Export {
                file_name: export_file_name(date),
                contents,
            }),
            Err(DaybookError::Rejected(rejection)) => Err(rejection),
            Err(e) => {
                log::error!("Failed to export {}: {}", date, e);
                Err(Rejection::NothingToExport)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;
    use crate::storage::MemoryStorage;
    use crate::time_of_day::TimeOfDay;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn d(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn index() -> EventIndex<MemoryStorage> {
        EventIndex::new(EventStore::load(MemoryStorage::new()))
    }

    fn draft(name: &str, start: &str, end: &str) -> EventDraft {
        EventDraft::new(name).times(t(start), t(end))
    }

    #[test]
    fn nothing_selected_shows_nothing() {
        let index = index();
        assert!(index.selected_events().is_empty());
    }

    #[test]
    fn clearing_the_selection_hides_the_day() {
        let mut index = index();
        index.select(d("2025-03-20"));
        index.add(&draft("Call", "10:00", "10:30")).unwrap();
        assert_eq!(index.selected_events().len(), 1);

        index.clear_selection();
        assert_eq!(index.selected(), None);
        assert!(index.selected_events().is_empty());
        assert_eq!(
            index.add(&draft("Later", "11:00", "11:30")),
            Err(Rejection::MissingDateOrName)
        );
        assert_eq!(index.store().events().event_count(), 1);
    }

    #[test]
    fn add_requires_a_selected_day() {
        let mut index = index();
        assert_eq!(
            index.add(&draft("Call", "10:00", "10:30")),
            Err(Rejection::MissingDateOrName)
        );
    }

    #[test]
    fn selection_switches_the_view() {
        let mut index = index();
        index.select(d("2025-03-20"));
        index.add(&draft("Thursday", "09:00", "10:00")).unwrap();
        index.select(d("2025-03-21"));
        index.add(&draft("Friday", "09:00", "10:00")).unwrap();

        let names: Vec<_> = index.selected_events().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, ["Friday"]);

        index.select(d("2025-03-20"));
        let names: Vec<_> = index.selected_events().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, ["Thursday"]);
    }

    #[test]
    fn filter_narrows_by_name_or_description() {
        let mut index = index();
        index.select(d("2025-03-20"));
        index.add(&draft("Standup", "09:00", "09:15")).unwrap();
        index
            .add(&draft("Lunch", "12:00", "13:00").description("with the TEAM"))
            .unwrap();
        index.add(&draft("Gym", "18:00", "19:00")).unwrap();

        index.set_filter("team");
        let names: Vec<_> = index.selected_events().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, ["Lunch"]);

        index.set_filter("");
        assert_eq!(index.selected_events().len(), 3);
    }

    #[test]
    fn overlap_checks_the_whole_day_not_the_filtered_view() {
        let mut index = index();
        index.select(d("2025-03-20"));
        index.add(&draft("Coffee", "09:30", "09:45")).unwrap();

        index.set_filter("nothing matches this");
        assert!(index.selected_events().is_empty());

        let result = index.add(&draft("Meeting", "09:00", "10:00"));
        assert!(matches!(result, Err(Rejection::Overlap(_))));
    }

    #[test]
    fn overlap_is_per_day() {
        let mut index = index();
        index.select(d("2025-03-20"));
        index.add(&draft("Meeting", "09:00", "10:00")).unwrap();

        index.select(d("2025-03-21"));
        assert!(index.add(&draft("Meeting", "09:00", "10:00")).is_ok());
    }

    #[test]
    fn rejected_add_changes_nothing() {
        let storage = MemoryStorage::new();
        let mut index = EventIndex::new(EventStore::load(storage.clone()));
        index.select(d("2025-03-20"));

        assert_eq!(
            index.add(&draft("Backwards", "10:00", "09:00")),
            Err(Rejection::StartNotBeforeEnd)
        );
        assert_eq!(index.add(&draft("", "09:00", "10:00")), Err(Rejection::MissingDateOrName));
        assert!(index.day_events().is_empty());
        assert_eq!(storage.read("events"), None);
    }

    #[test]
    fn delete_by_id_while_filtered() {
        let mut index = index();
        index.select(d("2025-03-20"));
        index.add(&draft("Alpha", "08:00", "09:00")).unwrap();
        let beta = index.add(&draft("Beta", "09:00", "10:00")).unwrap();

        // Beta is at position 0 of the filtered view but 1 in storage
        index.set_filter("beta");
        let shown = index.selected_events()[0].id;
        assert_eq!(shown, beta.id);

        index.delete(shown).unwrap();
        index.set_filter("");
        let names: Vec<_> = index.selected_events().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, ["Alpha"]);
    }

    #[test]
    fn delete_without_selection_fails() {
        let mut index = index();
        assert!(matches!(
            index.delete(EventId::new()),
            Err(DaybookError::NoDaySelected)
        ));
    }

    #[test]
    fn resolve_by_prefix() {
        let mut index = index();
        index.select(d("2025-03-20"));
        let event = index.add(&draft("Alpha", "08:00", "09:00")).unwrap();

        assert_eq!(index.resolve(&event.id.short()).map(|e| e.id), Some(event.id));
        assert_eq!(index.resolve(&event.id.to_string()).map(|e| e.id), Some(event.id));
        assert!(index.resolve("").is_none());
    }

    #[test]
    fn export_selected_day() {
        let mut index = index();
        index.select(d("2025-03-20"));
        index
            .add(&draft("Standup", "09:00", "09:15").kind(EventType::Work))
            .unwrap();

        let export = index.export().unwrap();
        assert_eq!(export.file_name, "events-2025-03-20.json");
        let text = String::from_utf8(export.contents).unwrap();
        assert!(text.contains("\"2025-03-20\""));
        assert!(text.contains("\"type\": \"work\""));
    }

    #[test]
    fn export_empty_day_is_rejected() {
        let mut index = index();
        assert_eq!(index.export(), Err(Rejection::NothingToExport));

        index.select(d("2025-03-20"));
        assert_eq!(index.export(), Err(Rejection::NothingToExport));
    }
}
