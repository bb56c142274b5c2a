//! Restore command - copy each profile's backup back over user.js

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::firefox::paths;

/// Copy the backup back over user.js for every profile.
///
/// One failed profile never aborts the rest. Profiles without a backup
/// are reported and left untouched.
pub fn execute(profiles: &[PathBuf]) -> Result<()> {
    for profile in profiles {
        let user_js = paths::user_js(profile);
        let backup_js = paths::backup_js(profile);

        if !backup_js.exists() {
            println!("No backup found for profile: {}", profile.display());
            continue;
        }

        match fs::copy(&backup_js, &user_js) {
            Ok(_) => println!(
                "{} settings restored from backup for profile: {}",
                "Ok:".green(),
                profile.display()
            ),
            Err(e) => eprintln!(
                "{} to restore settings for profile {}: {}",
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
    fn test_backup_then_restore_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().to_path_buf();
        let original = "user_pref(\"a\", true);\nuser_pref(\"b\", 2);\n";
        fs::write(paths::user_js(&profile), original).unwrap();

        super::super::backup::execute(&[profile.clone()]).unwrap();
        fs::write(paths::user_js(&profile), "mutated beyond recognition\n").unwrap();
        execute(&[profile.clone()]).unwrap();

        let restored = fs::read_to_string(paths::user_js(&profile)).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_restore_without_backup_leaves_user_js_alone() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().to_path_buf();
        fs::write(paths::user_js(&profile), "current\n").unwrap();

        execute(&[profile.clone()]).unwrap();

        let content = fs::read_to_string(paths::user_js(&profile)).unwrap();
        assert_eq!(content, "current\n");
    }
}
