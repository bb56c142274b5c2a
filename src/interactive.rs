//! Interactive menu loop
//!
//! Raw input lines come from stdin; interpreting them is delegated to
//! the pure transitions in [`crate::menu`], so the loop itself only
//! prints, reads, and dispatches.

use std::path::PathBuf;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::commands::{self, update::UpdateOutcome, utils};
use crate::firefox::paths;
use crate::menu::{MenuChoice, Selection};

fn banner() {
    println!(
        r"
=============================================
           Firefox Optimizer v{}
     Firefox Security & Privacy Optimizer
=============================================
",
        env!("CARGO_PKG_VERSION")
    );
}

fn print_main_menu() {
    println!("Please select an option:");
    println!("1. Apply optimization settings");
    println!("2. Backup current settings");
    println!("3. Restore settings from backup");
    println!("4. Reset to default settings");
    println!("5. Check for updates");
    println!("l. List optimization catalog");
    println!("q. Quit");
}

fn print_category_menu(catalog: &Catalog) {
    println!("Optimization Categories:");
    for (idx, category) in catalog.categories().iter().enumerate() {
        println!("{}. {}", idx + 1, category.name);
    }
    println!("\n0. Apply all categories");
    println!("b. Go back to main menu");
}

/// Run the interactive menu until the operator quits.
///
/// Returns after `q`, or after a successful self-update so the process
/// can exit and be restarted on the new binary.
pub fn run(catalog: &Catalog, profiles: &[PathBuf]) -> Result<()> {
    banner();
    loop {
        print_main_menu();
        let input = utils::prompt("\nEnter your choice: ")?;
        let Some(choice) = MenuChoice::parse(&input) else {
            println!("Invalid choice. Please select a valid option.");
            utils::prompt("\nPress Enter to continue...")?;
            continue;
        };

        match choice {
            MenuChoice::Apply => {
                apply_flow(catalog, profiles)?;
                utils::pause()?;
            }
            MenuChoice::Backup => {
                commands::backup::execute(profiles)?;
                utils::pause()?;
            }
            MenuChoice::Restore => {
                commands::restore::execute(profiles)?;
                utils::pause()?;
            }
            MenuChoice::Reset => {
                commands::reset::execute(profiles)?;
                utils::pause()?;
            }
            MenuChoice::CheckUpdates => {
                if commands::update::execute() == UpdateOutcome::Replaced {
                    return Ok(());
                }
                utils::pause()?;
            }
            MenuChoice::ListCatalog => {
                println!("{}", commands::list::render(catalog, true));
                utils::pause()?;
            }
            MenuChoice::Quit => {
                println!("Exiting Firefox Optimizer.");
                return Ok(());
            }
        }
    }
}

/// Confirmation gate, category selection, then the apply engine.
fn apply_flow(catalog: &Catalog, profiles: &[PathBuf]) -> Result<()> {
    println!(
        "Note: Existing user.js files will be overwritten. A backup will be created as {}.",
        paths::USER_JS_BACKUP
    );
    if !utils::confirm("Do you want to continue? (y/n): ")? {
        return Ok(());
    }

    loop {
        print_category_menu(catalog);
        let input = utils::prompt(
            "\nEnter the numbers of the categories to apply (comma-separated), 0 for all, or 'b' to go back: ",
        )?;
        match Selection::parse(&input, catalog.len()) {
            Ok(Selection::Cancelled) => return Ok(()),
            Ok(Selection::Indices(indices)) => {
                return commands::apply::execute(&indices, catalog, profiles);
            }
            Err(e) => println!("{}", e),
        }
    }
}
