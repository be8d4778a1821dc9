use anyhow::Result;
use daybook_core::config::DaybookConfig;
use daybook_core::storage::FileStorage;
use owo_colors::OwoColorize;

pub fn run(config: &DaybookConfig) -> Result<()> {
    let path = DaybookConfig::config_path()?;
    println!("{} {}", "Config file:".bold(), path.display());

    if config.persist {
        let record = FileStorage::new(config.data_path()).path_for(&config.storage_key);
        println!("{} {}", "Events file:".bold(), record.display());
    } else {
        println!("{} {}", "Events file:".bold(), "none (persist = false)".dimmed());
    }

    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}
