use std::path::PathBuf;

use anyhow::{Context, Result};
use daybook_core::DateKey;
use daybook_core::config::DaybookConfig;
use owo_colors::OwoColorize;

pub fn run(config: &DaybookConfig, date: Option<DateKey>, out: Option<PathBuf>) -> Result<()> {
    let mut index = config.open_index();
    index.select(date.unwrap_or_else(DateKey::today));

    let export = index.export()?;

    let dir = out.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(&export.file_name);
    std::fs::write(&path, &export.contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let count = index.day_events().len();
    println!(
        "{}",
        format!(
            "  Exported {} {} to {}",
            count,
            if count == 1 { "event" } else { "events" },
            path.display()
        )
        .green()
    );

    Ok(())
}
