//! Reset command - delete each profile's user.js

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::firefox::paths;

/// Delete user.js for every profile, reverting to Firefox defaults.
///
/// One failed profile never aborts the rest. The backup file, if any,
/// is deliberately left in place.
pub fn execute(profiles: &[PathBuf]) -> Result<()> {
    for profile in profiles {
        let user_js = paths::user_js(profile);

        if !user_js.exists() {
            println!(
                "No user.js file to remove in profile: {}",
                profile.display()
            );
            continue;
        }

        match fs::remove_file(&user_js) {
            Ok(()) => println!(
                "{} user.js removed, settings reset to default for profile: {}",
                "Ok:".green(),
                profile.display()
            ),
            Err(e) => eprintln!(
                "{} to reset settings for profile {}: {}",
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
    fn test_reset_removes_user_js_only() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().to_path_buf();
        fs::write(paths::user_js(&profile), "user_pref(\"a\", true);\n").unwrap();
        fs::write(paths::backup_js(&profile), "kept\n").unwrap();

        execute(&[profile.clone()]).unwrap();

        assert!(!paths::user_js(&profile).exists());
        assert!(paths::backup_js(&profile).exists());
    }

    #[test]
    fn test_reset_without_user_js_performs_no_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().to_path_buf();

        execute(&[profile.clone()]).unwrap();

        assert_eq!(fs::read_dir(&profile).unwrap().count(), 0);
    }

    #[test]
    fn test_reset_continues_past_failing_profile() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let good = dir.path().join("good");
        fs::create_dir(&good).unwrap();
        fs::write(paths::user_js(&good), "x\n").unwrap();

        execute(&[missing, good.clone()]).unwrap();

        assert!(!paths::user_js(&good).exists());
    }
}
