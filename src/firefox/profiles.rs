//! Firefox profile discovery via profiles.ini
//!
//! profiles.ini is a section-based key/value file. Every section whose
//! name starts with `Profile` names one profile directory, either
//! relative to the installation root (`IsRelative=1`, the default) or
//! absolute.

use std::fs;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;

use crate::config::{self, ProfileRoot};
use crate::error::LocateError;
use crate::firefox::paths;

/// One `[Profile*]` section parsed out of profiles.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntry {
    /// Raw `Path` value.
    pub path: String,
    /// `IsRelative` value, default true.
    pub is_relative: bool,
}

/// Discover all Firefox profiles for the current host.
///
/// Reads every candidate profiles.ini, resolves each `[Profile*]`
/// section, and keeps the directories that exist on disk. Candidates
/// that do not exist are reported on stderr and skipped.
pub fn locate() -> Result<Vec<PathBuf>, LocateError> {
    locate_in(&config::candidate_roots()?)
}

/// Core of [`locate`] operating on an explicit root list.
pub fn locate_in(roots: &[ProfileRoot]) -> Result<Vec<PathBuf>, LocateError> {
    let mut profiles = Vec::new();
    let mut found_index = false;

    for root in roots {
        if !root.ini_path.exists() {
            continue;
        }
        found_index = true;

        let content = match fs::read_to_string(&root.ini_path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!(
                    "{} reading {}: {}",
                    "Failed:".red(),
                    root.ini_path.display(),
                    e
                );
                continue;
            }
        };

        for entry in parse_profile_entries(&content) {
            let resolved = resolve_entry(&entry, &root.base_dir);
            if resolved.exists() {
                profiles.push(resolved);
            } else {
                eprintln!("Profile path does not exist: {}", resolved.display());
            }
        }
    }

    if !found_index {
        return Err(LocateError::NoIndexFileFound);
    }
    if profiles.is_empty() {
        return Err(LocateError::NoProfilesFound);
    }

    println!("Found {} Firefox profile(s).", profiles.len());
    Ok(profiles)
}

/// Parse the `[Profile*]` sections out of profiles.ini content.
///
/// Recognized keys are `Path` (required) and `IsRelative` (integer,
/// default 1). Other sections, `[General]` and `[Install*]` among them,
/// are ignored. A profile section without a `Path` contributes nothing.
pub fn parse_profile_entries(content: &str) -> Vec<ProfileEntry> {
    let mut entries = Vec::new();
    let mut in_profile_section = false;
    let mut path: Option<String> = None;
    let mut is_relative = true;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
            continue;
        }

        if let Some(header) = parse_section_header(trimmed) {
            if in_profile_section {
                if let Some(p) = path.take() {
                    entries.push(ProfileEntry {
                        path: p,
                        is_relative,
                    });
                }
            }
            in_profile_section = header.starts_with("Profile");
            path = None;
            is_relative = true;
        } else if in_profile_section {
            if let Some((key, value)) = trimmed.split_once('=') {
                match key.trim() {
                    "Path" => path = Some(value.trim().to_string()),
                    "IsRelative" => {
                        is_relative = value.trim().parse::<i64>().unwrap_or(1) != 0;
                    }
                    _ => {}
                }
            }
        }
    }

    if in_profile_section {
        if let Some(p) = path.take() {
            entries.push(ProfileEntry {
                path: p,
                is_relative,
            });
        }
    }

    entries
}

fn parse_section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']').map(str::trim)
}

/// Resolve a parsed entry against its installation root.
fn resolve_entry(entry: &ProfileEntry, base_dir: &Path) -> PathBuf {
    if entry.is_relative {
        paths::normalize(&base_dir.join(&entry.path))
    } else {
        paths::normalize(Path::new(&entry.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_at(base_dir: &Path) -> ProfileRoot {
        ProfileRoot {
            ini_path: base_dir.join("profiles.ini"),
            base_dir: base_dir.to_path_buf(),
        }
    }

    #[test]
    fn test_parse_single_profile() {
        let content = "[Profile0]\nName=default\nIsRelative=1\nPath=abcd.default\n";
        let entries = parse_profile_entries(content);
        assert_eq!(
            entries,
            vec![ProfileEntry {
                path: "abcd.default".to_string(),
                is_relative: true,
            }]
        );
    }

    #[test]
    fn test_parse_multiple_profiles() {
        let content = "\
[General]
StartWithLastProfile=1

[Profile0]
Path=abcd.default

[Profile1]
IsRelative=0
Path=/opt/firefox/profile

[Install4F96D1932A9F858E]
Default=abcd.default
";
        let entries = parse_profile_entries(content);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "abcd.default");
        assert!(entries[0].is_relative);
        assert_eq!(entries[1].path, "/opt/firefox/profile");
        assert!(!entries[1].is_relative);
    }

    #[test]
    fn test_parse_is_relative_defaults_to_true() {
        let entries = parse_profile_entries("[Profile0]\nPath=p\n");
        assert!(entries[0].is_relative);
    }

    #[test]
    fn test_parse_profile_without_path_skipped() {
        let entries = parse_profile_entries("[Profile0]\nName=broken\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_comments_and_blank_lines_ignored() {
        let content = "; header comment\n\n[Profile0]\n# noise\nPath=p\n";
        let entries = parse_profile_entries(content);
        assert_eq!(entries[0].path, "p");
    }

    #[test]
    fn test_resolve_relative_joins_base() {
        let entry = ProfileEntry {
            path: "sub/../abcd.default".to_string(),
            is_relative: true,
        };
        assert_eq!(
            resolve_entry(&entry, Path::new("/base/firefox")),
            PathBuf::from("/base/firefox/abcd.default")
        );
    }

    #[test]
    fn test_resolve_absolute_ignores_base() {
        let entry = ProfileEntry {
            path: "/opt/./profile".to_string(),
            is_relative: false,
        };
        assert_eq!(
            resolve_entry(&entry, Path::new("/base/firefox")),
            PathBuf::from("/opt/profile")
        );
    }

    #[test]
    fn test_locate_no_index_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = locate_in(&[root_at(dir.path())]);
        assert!(matches!(result, Err(LocateError::NoIndexFileFound)));
    }

    #[test]
    fn test_locate_index_without_resolvable_profiles() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("profiles.ini"),
            "[Profile0]\nPath=missing.dir\n",
        )
        .unwrap();
        let result = locate_in(&[root_at(dir.path())]);
        assert!(matches!(result, Err(LocateError::NoProfilesFound)));
    }

    #[test]
    fn test_locate_keeps_existing_profiles_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("abcd.default")).unwrap();
        fs::write(
            dir.path().join("profiles.ini"),
            "[Profile0]\nPath=abcd.default\n\n[Profile1]\nPath=gone.dir\n",
        )
        .unwrap();

        let profiles = locate_in(&[root_at(dir.path())]).unwrap();
        assert_eq!(profiles, vec![dir.path().join("abcd.default")]);
    }

    #[test]
    fn test_locate_aggregates_across_roots() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        for dir in [&first, &second] {
            fs::create_dir(dir.path().join("p.default")).unwrap();
            fs::write(dir.path().join("profiles.ini"), "[Profile0]\nPath=p.default\n").unwrap();
        }

        let profiles = locate_in(&[root_at(first.path()), root_at(second.path())]).unwrap();
        assert_eq!(
            profiles,
            vec![
                first.path().join("p.default"),
                second.path().join("p.default")
            ]
        );
    }

    #[test]
    fn test_locate_missing_root_is_not_fatal() {
        let present = tempfile::tempdir().unwrap();
        fs::create_dir(present.path().join("p.default")).unwrap();
        fs::write(
            present.path().join("profiles.ini"),
            "[Profile0]\nPath=p.default\n",
        )
        .unwrap();

        let absent = root_at(Path::new("/nonexistent/firefox/root"));
        let profiles = locate_in(&[absent, root_at(present.path())]).unwrap();
        assert_eq!(profiles, vec![present.path().join("p.default")]);
    }
}
