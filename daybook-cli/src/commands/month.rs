use std::collections::HashSet;

use anyhow::Result;
use daybook_core::DateKey;
use daybook_core::config::DaybookConfig;
use daybook_core::grid::MonthCursor;

use crate::render::render_month;

/// Navigation relative to the requested month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Stay,
    Next,
}

pub fn run(config: &DaybookConfig, month: Option<MonthCursor>, step: Step) -> Result<()> {
    let today = DateKey::today();
    let cursor = resolve_month(month, step, today);
    let grid = cursor.grid()?;

    let store = config.open_store();
    let busy: HashSet<DateKey> = store.events().days().collect();

    for line in render_month(&cursor, &grid, &busy, today) {
        println!("{}", line);
    }

    Ok(())
}

fn resolve_month(month: Option<MonthCursor>, step: Step, today: DateKey) -> MonthCursor {
    let cursor = month.unwrap_or_else(|| MonthCursor::containing(today));
    match step {
        Step::Prev => cursor.prev(),
        Step::Stay => cursor,
        Step::Next => cursor.next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn defaults_to_current_month() {
        let cursor = resolve_month(None, Step::Stay, d("2025-03-20"));
        assert_eq!(cursor, MonthCursor::new(2025, 2).unwrap());
    }

    #[test]
    fn steps_across_year_boundaries() {
        let jan = MonthCursor::new(2025, 0).ok();
        assert_eq!(
            resolve_month(jan, Step::Prev, d("2000-01-01")),
            MonthCursor::new(2024, 11).unwrap()
        );

        let dec = MonthCursor::new(2025, 11).ok();
        assert_eq!(
            resolve_month(dec, Step::Next, d("2000-01-01")),
            MonthCursor::new(2026, 0).unwrap()
        );
    }

    #[test]
    fn steps_from_today_without_month() {
        let cursor = resolve_month(None, Step::Next, d("2025-03-20"));
        assert_eq!(cursor, MonthCursor::new(2025, 3).unwrap());
    }
}
