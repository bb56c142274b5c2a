//! Apply command - flatten selected categories and rewrite user.js per profile

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::catalog::Catalog;
use crate::firefox::paths;

/// Flatten the selected categories into the ordered write sequence.
///
/// Order is the contract: selection order, then catalog option order,
/// then each option's own line order. Duplicate lines across options
/// are kept as-is; later `user_pref` calls shadow earlier ones in
/// Firefox and this tool preserves exactly what the catalog says.
pub fn flatten(indices: &[usize], catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();
    for &idx in indices {
        if let Some(category) = catalog.categories().get(idx) {
            for option in &category.options {
                lines.extend(option.settings.iter().cloned());
            }
        }
    }
    lines
}

/// Apply the selected categories to every profile.
///
/// Profiles are processed strictly in order and independently: a backup
/// or write failure is reported and skips that profile only.
pub fn execute(indices: &[usize], catalog: &Catalog, profiles: &[PathBuf]) -> Result<()> {
    let lines = flatten(indices, catalog);
    for profile in profiles {
        apply_profile(profile, &lines);
    }
    Ok(())
}

fn apply_profile(profile: &Path, lines: &[String]) {
    let user_js = paths::user_js(profile);
    let backup_js = paths::backup_js(profile);

    if user_js.exists() {
        if let Err(e) = fs::copy(&user_js, &backup_js) {
            eprintln!(
                "{} backing up user.js for profile {}: {}",
                "Failed:".red(),
                profile.display(),
                e
            );
            return;
        }
        println!(
            "Existing user.js backed up to {} for profile: {}",
            paths::USER_JS_BACKUP,
            profile.display()
        );
    } else {
        println!(
            "No existing user.js file to backup in profile: {}",
            profile.display()
        );
    }

    println!("\nApplying settings to profile: {}", profile.display());
    if let Err(e) = write_settings(&user_js, lines) {
        eprintln!(
            "{} writing {}: {}",
            "Failed:".red(),
            user_js.display(),
            e
        );
        return;
    }
    println!("Settings applied to profile: {}", profile.display());

    match verify(profile, lines) {
        Ok(missing) if missing.is_empty() => {
            println!(
                "{} all selected settings have been applied and verified.",
                "Ok:".green()
            );
        }
        Ok(missing) => {
            println!(
                "{} the following settings were not applied correctly:",
                "Warning:".yellow()
            );
            for line in &missing {
                println!("  {}", line);
            }
        }
        Err(e) => {
            eprintln!(
                "{} verifying settings for profile {}: {}",
                "Failed:".red(),
                profile.display(),
                e
            );
        }
    }
}

/// Truncate-create user.js and write each line in order, reporting
/// progress as a percentage of lines written. Cosmetic only.
fn write_settings(user_js: &Path, lines: &[String]) -> Result<()> {
    let mut file = File::create(user_js)
        .with_context(|| format!("Failed to create: {}", user_js.display()))?;

    let total = lines.len();
    for (index, line) in lines.iter().enumerate() {
        writeln!(file, "{}", line)?;
        let progress = ((index + 1) as f64 / total as f64) * 100.0;
        print!(
            "Applying setting {}/{} ({:.2}%)\r",
            index + 1,
            total,
            progress
        );
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}

/// Re-read user.js and report the expected lines it does not contain.
///
/// Membership is set-based: duplicates and ordering collapse, so a file
/// containing each expected line at least once verifies clean. Failure
/// to re-open the file is a verification error, not fatal to the run.
pub fn verify(profile: &Path, expected: &[String]) -> Result<Vec<String>> {
    let user_js = paths::user_js(profile);
    let content = fs::read_to_string(&user_js)
        .with_context(|| format!("Failed to read back: {}", user_js.display()))?;

    let present: HashSet<&str> = content.lines().collect();
    Ok(expected
        .iter()
        .filter(|line| !present.contains(line.trim()))
        .cloned()
        .collect())
}
