use anyhow::Result;
use daybook_core::DateKey;
use daybook_core::config::DaybookConfig;
use owo_colors::OwoColorize;

use crate::render::{Render, day_heading};

pub fn run(config: &DaybookConfig, date: Option<DateKey>, search: Option<String>) -> Result<()> {
    let selected = date.unwrap_or_else(DateKey::today);
    let mut index = config.open_index();
    index.select(selected);
    if let Some(keyword) = search {
        index.set_filter(keyword);
    }

    println!("{}", day_heading(selected).bold());

    let events = index.selected_events();
    if events.is_empty() {
        let message = if index.filter().is_empty() || index.day_events().is_empty() {
            "No events for this day.".to_string()
        } else {
            format!("No events matching \"{}\".", index.filter())
        };
        println!("  {}", message.dimmed());
        return Ok(());
    }

    for event in events {
        println!("{}", event.render());
    }

    Ok(())
}
