//! Firefox Optimizer: Firefox security & privacy preference hardening
//!
//! Discovers Firefox profiles via profiles.ini, then applies curated
//! groups of user.js preference overrides, with backup, restore, and
//! reset over the same profile set. Running without a subcommand opens
//! the interactive menu.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod catalog;
mod commands;
mod config;
mod error;
mod firefox;
mod interactive;
mod menu;

use catalog::Catalog;
use menu::Selection;

#[derive(Parser)]
#[command(name = "firefox-optimizer")]
#[command(about = "Firefox security & privacy preference optimizer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply optimization categories to every discovered profile
    Apply {
        /// Categories to apply: comma-separated 1-based numbers, 0 for all
        #[arg(default_value = "0")]
        categories: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Back up each profile's user.js to user.js.backup
    Backup,

    /// Restore each profile's user.js from user.js.backup
    Restore,

    /// Delete each profile's user.js, reverting to Firefox defaults
    Reset,

    /// Show the optimization catalog
    List {
        /// Include the rationale text for every option
        #[arg(short, long)]
        details: bool,
    },

    /// Check GitHub for a newer release and optionally self-update
    Update,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::load()?;

    match cli.command {
        None => {
            let profiles = firefox::locate()?;
            interactive::run(&catalog, &profiles)?;
        }

        Some(Commands::Apply { categories, yes }) => {
            let profiles = firefox::locate()?;
            let selection = Selection::parse(&categories, catalog.len())?;
            let Selection::Indices(indices) = selection else {
                return Ok(());
            };
            if !yes {
                println!(
                    "Note: Existing user.js files will be overwritten. A backup will be created as {}.",
                    firefox::paths::USER_JS_BACKUP
                );
                if !commands::utils::confirm("Do you want to continue? (y/n): ")? {
                    return Ok(());
                }
            }
            commands::apply::execute(&indices, &catalog, &profiles)?;
        }

        Some(Commands::Backup) => {
            let profiles = firefox::locate()?;
            commands::backup::execute(&profiles)?;
        }

        Some(Commands::Restore) => {
            let profiles = firefox::locate()?;
            commands::restore::execute(&profiles)?;
        }

        Some(Commands::Reset) => {
            let profiles = firefox::locate()?;
            commands::reset::execute(&profiles)?;
        }

        Some(Commands::List { details }) => {
            println!("{}", commands::list::render(&catalog, details));
        }

        Some(Commands::Update) => {
            commands::update::execute();
        }
    }

    Ok(())
}
