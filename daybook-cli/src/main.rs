mod commands;
mod input;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daybook_core::config::DaybookConfig;
use daybook_core::{DateKey, DaybookError, EventType, Rejection, TimeOfDay};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "A month calendar and day planner for your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long, value_parser = input::parse_month)]
        month: Option<daybook_core::grid::MonthCursor>,

        /// Step back one month from the shown month
        #[arg(short, long, conflicts_with = "next")]
        prev: bool,

        /// Step forward one month from the shown month
        #[arg(short, long)]
        next: bool,
    },
    /// List the events of a day
    Day {
        /// Day to show (YYYY-MM-DD or e.g. "tomorrow", defaults to today)
        #[arg(value_parser = input::parse_date)]
        date: Option<DateKey>,

        /// Only show events whose name or description contains this
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add an event (prompts for anything missing)
    Add {
        name: Option<String>,

        /// Day of the event (defaults to today)
        #[arg(short, long, value_parser = input::parse_date)]
        date: Option<DateKey>,

        /// Start time (HH:MM)
        #[arg(short, long, value_parser = input::parse_time)]
        start: Option<TimeOfDay>,

        /// End time (HH:MM)
        #[arg(short, long, value_parser = input::parse_time, conflicts_with = "duration")]
        end: Option<TimeOfDay>,

        /// Length of the event instead of an end time (e.g. "30m", "1h 30m")
        #[arg(long)]
        duration: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// work, personal or other
        #[arg(short = 't', long = "type")]
        kind: Option<EventType>,
    },
    /// Delete an event by id (or id prefix)
    Delete {
        id: String,

        /// Day the event is on (defaults to today)
        #[arg(short, long, value_parser = input::parse_date)]
        date: Option<DateKey>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Save a day's events to events-<date>.json
    Export {
        #[arg(value_parser = input::parse_date)]
        date: Option<DateKey>,

        /// Directory to write into (defaults to the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show the config file location and effective settings
    Config,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match rejection_of(&e) {
            Some(rejection) => eprintln!("{}", rejection.to_string().red()),
            None => eprintln!("{} {:#}", "Error:".red().bold(), e),
        }
        std::process::exit(1);
    }
}

/// Rejections are expected outcomes and print without the error prefix.
fn rejection_of(e: &anyhow::Error) -> Option<&Rejection> {
    e.downcast_ref::<Rejection>()
        .or_else(|| match e.downcast_ref::<DaybookError>() {
            Some(DaybookError::Rejected(rejection)) => Some(rejection),
            _ => None,
        })
}

fn run(cli: Cli) -> Result<()> {
    let config = DaybookConfig::load()?;
    log::debug!("Using data dir {}", config.data_path().display());

    match cli.command {
        Commands::Month { month, prev, next } => {
            let step = if prev {
                commands::month::Step::Prev
            } else if next {
                commands::month::Step::Next
            } else {
                commands::month::Step::Stay
            };
            commands::month::run(&config, month, step)
        }
        Commands::Day { date, search } => commands::day::run(&config, date, search),
        Commands::Add {
            name,
            date,
            start,
            end,
            duration,
            description,
            kind,
        } => commands::add::run(
            &config,
            commands::add::AddArgs {
                name,
                date,
                start,
                end,
                duration,
                description,
                kind,
            },
        ),
        Commands::Delete { id, date, yes } => commands::delete::run(&config, &id, date, yes),
        Commands::Export { date, out } => commands::export::run(&config, date, out),
        Commands::Config => commands::config::run(&config),
    }
}
