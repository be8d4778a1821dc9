//! Time-range conflicts between events on the same day.

use crate::event::Event;
use crate::time_of_day::TimeOfDay;

/// Half-open intersection: back-to-back ranges do not overlap.
pub fn ranges_intersect(
    start: TimeOfDay,
    end: TimeOfDay,
    other_start: TimeOfDay,
    other_end: TimeOfDay,
) -> bool {
    start < other_end && end > other_start
}

/// First event in `existing` whose range intersects `[start, end)`.
pub fn find_overlap(start: TimeOfDay, end: TimeOfDay, existing: &[Event]) -> Option<&Event> {
    existing
        .iter()
        .find(|e| ranges_intersect(start, end, e.start, e.end))
}

/// Whether `[start, end)` collides with any of `existing`.
pub fn overlaps(start: TimeOfDay, end: TimeOfDay, existing: &[Event]) -> bool {
    find_overlap(start, end, existing).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn day(ranges: &[(&str, &str)]) -> Vec<Event> {
        ranges
            .iter()
            .map(|(s, e)| Event::new("existing", t(s), t(e)))
            .collect()
    }

    #[test]
    fn back_to_back_does_not_overlap() {
        assert!(!overlaps(t("09:00"), t("10:00"), &day(&[("10:00", "11:00")])));
        assert!(!overlaps(t("10:00"), t("11:00"), &day(&[("09:00", "10:00")])));
    }

    #[test]
    fn partial_overlap() {
        assert!(overlaps(t("09:00"), t("10:30"), &day(&[("10:00", "11:00")])));
    }

    #[test]
    fn containment_overlaps_both_ways() {
        assert!(overlaps(t("09:00"), t("10:00"), &day(&[("09:30", "09:45")])));
        assert!(overlaps(t("09:30"), t("09:45"), &day(&[("09:00", "10:00")])));
    }

    #[test]
    fn identical_ranges_overlap() {
        assert!(overlaps(t("12:00"), t("13:00"), &day(&[("12:00", "13:00")])));
    }

    #[test]
    fn empty_day_never_overlaps() {
        assert!(!overlaps(t("00:00"), t("23:59"), &[]));
    }

    #[test]
    fn find_overlap_returns_the_conflict() {
        let mut existing = day(&[("08:00", "09:00")]);
        existing.push(Event::new("Lunch", t("12:00"), t("13:00")));

        let hit = find_overlap(t("12:30"), t("14:00"), &existing).unwrap();
        assert_eq!(hit.name, "Lunch");
        assert!(find_overlap(t("09:00"), t("12:00"), &existing).is_none());
    }
}
