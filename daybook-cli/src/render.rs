//! Terminal rendering for daybook types.

use std::collections::HashSet;

use daybook_core::grid::{MonthCursor, MonthGrid};
use daybook_core::{DateKey, Event, EventType};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventType {
    fn render(&self) -> String {
        match self {
            EventType::Work => "[work]".blue().to_string(),
            EventType::Personal => "[personal]".magenta().to_string(),
            EventType::Other => "[other]".cyan().to_string(),
            EventType::Unset => String::new(),
        }
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!("{}-{}", self.start, self.end);
        let mut line = format!(
            "  {}  {} {} {}",
            time.bold(),
            self.name,
            self.kind.render(),
            self.id.short().dimmed()
        );
        if !self.description.is_empty() {
            line.push_str(&format!("\n               {}", self.description.dimmed()));
        }
        line
    }
}

const WEEKDAY_HEADER: &str = "Su  Mo  Tu  We  Th  Fr  Sa";

/// Sunday and Saturday columns of a Sunday-first week.
fn is_weekend_column(column: usize) -> bool {
    column == 0 || column == 6
}

/// Render a month grid, marking today and days that have events.
pub fn render_month(
    cursor: &MonthCursor,
    grid: &MonthGrid,
    busy: &HashSet<DateKey>,
    today: DateKey,
) -> Vec<String> {
    let mut lines = Vec::new();
    let width = WEEKDAY_HEADER.len();

    lines.push(format!("{:^width$}", cursor.label()).bold().to_string());
    let header: Vec<String> = WEEKDAY_HEADER
        .split_whitespace()
        .enumerate()
        .map(|(column, label)| {
            if is_weekend_column(column) {
                label.red().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect();
    lines.push(header.join("  "));

    for week in grid.weeks() {
        let cells: Vec<String> = week
            .iter()
            .enumerate()
            .map(|(column, cell)| match cell.and_then(|day| cursor.date_of(day)) {
                Some(date) => render_day(
                    date,
                    busy.contains(&date),
                    date == today,
                    is_weekend_column(column),
                ),
                None => "   ".to_string(),
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }

    lines
}

fn render_day(date: DateKey, busy: bool, today: bool, weekend: bool) -> String {
    let number = format!("{:>2}", date.day());
    let marker = if busy { "*" } else { " " };

    let number = if today {
        number.reversed().to_string()
    } else if busy {
        number.yellow().bold().to_string()
    } else if weekend {
        number.red().to_string()
    } else {
        number
    };

    format!("{}{}", number, marker.yellow())
}

/// e.g. "Thu Mar 20 2025"
pub fn day_heading(date: DateKey) -> String {
    date.date().format("%a %b %-d %Y").to_string()
}
