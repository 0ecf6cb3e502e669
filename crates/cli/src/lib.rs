//! Preview CLI: renders each Messenger surface against bundled demo fixtures
//! so wording, paging, and payloads can be inspected without a live page.

pub mod commands;
pub mod fixtures;

use std::path::PathBuf;

use anyhow::Result;
use bookbot_core::availability::PageIndex;
use bookbot_core::config::BotSettings;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "bookbot",
    about = "Booking bot message previewer",
    after_help = "Examples:\n  bookbot menu\n  bookbot availability --mode times --page 1\n  bookbot receipt --config bookbot.toml"
)]
pub struct Cli {
    /// Settings file layered over the built-in defaults.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Render the greeting card, or the compact quick menu")]
    Menu {
        #[arg(long, help = "Render the returning-user quick menu instead")]
        quick: bool,
    },
    #[command(about = "Render the store hours text")]
    Hours,
    #[command(about = "Render the store address and contact text")]
    Info,
    #[command(about = "Render the category cards, or one category's services")]
    Catalog {
        #[arg(long, help = "Render the services of the demo category instead")]
        services: bool,
    },
    #[command(about = "Render the asset cards with their availability summaries")]
    Assets,
    #[command(about = "Render one page of an availability picker")]
    Availability {
        #[arg(long, value_enum, default_value_t = PickerMode::Dates)]
        mode: PickerMode,
        #[arg(long, default_value_t = 0, help = "Zero-based page index")]
        page: u32,
    },
    #[command(about = "Render the in-progress booking summary and its replies")]
    State,
    #[command(about = "Render the confirmed-booking receipt")]
    Receipt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PickerMode {
    Dates,
    Times,
    Durations,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => BotSettings::load(path)?,
        None => BotSettings::default(),
    };

    let output = match cli.command {
        Command::Menu { quick } => commands::menu(quick, &settings)?,
        Command::Hours => commands::hours(&settings)?,
        Command::Info => commands::info(&settings)?,
        Command::Catalog { services } => commands::catalog(services, &settings)?,
        Command::Assets => commands::assets(&settings)?,
        Command::Availability { mode, page } => {
            commands::availability(mode, PageIndex::new(page), &settings)?
        }
        Command::State => commands::state(&settings)?,
        Command::Receipt => commands::receipt(&settings)?,
    };

    println!("{output}");
    Ok(())
}
