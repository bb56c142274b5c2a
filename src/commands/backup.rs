//! Backup command - copy each profile's user.js to its backup name

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::firefox::paths;

/// Copy user.js to the fixed backup name for every profile.
///
/// One failed profile never aborts the rest. Profiles without a user.js
/// have nothing to back up and are reported as such.
pub fn execute(profiles: &[PathBuf]) -> Result<()> {
    for profile in profiles {
        let user_js = paths::user_js(profile);
        let backup_js = paths::backup_js(profile);

        if !user_js.exists() {
            println!("No user.js file found in profile: {}", profile.display());
            continue;
        }

        match fs::copy(&user_js, &backup_js) {
            Ok(_) => println!(
                "{} backup created for profile: {}",
                "Ok:".green(),
                profile.display()
            ),
            Err(e) => eprintln!(
                "{} to create backup for profile {}: {}",
                "Failed:".red(),
                profile.display(),
                e
            ),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_copies_user_js() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().to_path_buf();
        fs::write(paths::user_js(&profile), "user_pref(\"a\", true);\n").unwrap();

        execute(&[profile.clone()]).unwrap();

        let backup = fs::read_to_string(paths::backup_js(&profile)).unwrap();
        assert_eq!(backup, "user_pref(\"a\", true);\n");
    }

    #[test]
    fn test_backup_overwrites_previous_generation() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().to_path_buf();
        fs::write(paths::backup_js(&profile), "stale\n").unwrap();
        fs::write(paths::user_js(&profile), "fresh\n").unwrap();

        execute(&[profile.clone()]).unwrap();

        let backup = fs::read_to_string(paths::backup_js(&profile)).unwrap();
        assert_eq!(backup, "fresh\n");
    }

    #[test]
    fn test_backup_without_user_js_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().to_path_buf();

        execute(&[profile.clone()]).unwrap();

        assert!(!paths::backup_js(&profile).exists());
    }
}
