use anyhow::Result;
use daybook_core::config::DaybookConfig;
use daybook_core::validation::EventDraft;
use daybook_core::{DateKey, EventType, TimeOfDay};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::input::{apply_duration, parse_end, parse_time};
use crate::render::day_heading;

pub struct AddArgs {
    pub name: Option<String>,
    pub date: Option<DateKey>,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub kind: Option<EventType>,
}

pub fn run(config: &DaybookConfig, args: AddArgs) -> Result<()> {
    let interactive = args.name.is_none() || args.start.is_none();

    // --- Name ---
    let name = match args.name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Name")
            .allow_empty(true)
            .interact_text()?,
    };

    // --- Start ---
    let start = match args.start {
        Some(s) => Some(s),
        None => prompt_optional("  Starts at (HH:MM)", parse_time)?,
    };

    // --- End / Duration ---
    let end = match (args.end, args.duration, start) {
        (Some(end), _, _) => Some(end),
        (None, Some(dur), Some(start)) => Some(apply_duration(start, &dur)?),
        (None, None, Some(start)) if interactive => {
            prompt_optional("  Ends at (HH:MM or e.g. 45m)", |input| parse_end(input, start))?
        }
        _ => None,
    };

    // --- Description ---
    let description = match args.description {
        Some(d) => d,
        None if interactive => Input::new()
            .with_prompt("  Description (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    // --- Type ---
    let kind = match args.kind {
        Some(k) => k,
        None if interactive => prompt_kind()?,
        None => EventType::Unset,
    };

    let mut draft = EventDraft::new(name).description(description).kind(kind);
    draft.start = start;
    draft.end = end;

    let date = args.date.unwrap_or_else(DateKey::today);
    let mut index = config.open_index();
    index.select(date);
    let event = index.add(&draft)?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!(
            "  Added: {} {}-{} on {}",
            event.name,
            event.start,
            event.end,
            day_heading(date)
        )
        .green()
    );

    Ok(())
}

/// Prompt until the input parses or is left empty.
fn prompt_optional<T, F>(prompt: &str, parse: F) -> Result<Option<T>>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match parse(&input) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn prompt_kind() -> Result<EventType> {
    let kinds = [
        EventType::Unset,
        EventType::Work,
        EventType::Personal,
        EventType::Other,
    ];
    let labels = ["(none)", "work", "personal", "other"];

    let selection = Select::new()
        .with_prompt("  Type")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(kinds[selection])
}
