use anyhow::Result;
use daybook_core::DateKey;
use daybook_core::config::DaybookConfig;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::render::{Render, day_heading};

pub fn run(config: &DaybookConfig, id: &str, date: Option<DateKey>, yes: bool) -> Result<()> {
    let date = date.unwrap_or_else(DateKey::today);
    let mut index = config.open_index();
    index.select(date);

    let Some(event) = index.resolve(id).cloned() else {
        let matching = index
            .day_events()
            .iter()
            .filter(|e| e.id.starts_with(id))
            .count();
        if matching > 1 {
            anyhow::bail!("Id '{}' is ambiguous on {}, use more characters", id, date);
        }
        anyhow::bail!("No event with id '{}' on {}", id, day_heading(date));
    };

    if !yes {
        println!("{}", event.render());
        let confirmed = Confirm::new()
            .with_prompt("  Delete this event?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Kept.".dimmed());
            return Ok(());
        }
    }

    let removed = index.delete(event.id)?;
    println!("{}", format!("  Deleted: {}", removed).red());

    Ok(())
}
