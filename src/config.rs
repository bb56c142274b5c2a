//! Platform-specific Firefox installation paths

use std::path::PathBuf;

use crate::error::LocateError;

/// One Firefox installation convention: where its profiles.ini lives and
/// the directory that relative profile paths resolve against.
#[derive(Debug, Clone)]
pub struct ProfileRoot {
    /// Path to this installation's profiles.ini.
    pub ini_path: PathBuf,
    /// Base directory for `IsRelative=1` profile paths.
    pub base_dir: PathBuf,
}

impl ProfileRoot {
    fn new(base_dir: PathBuf) -> Self {
        Self {
            ini_path: base_dir.join("profiles.ini"),
            base_dir,
        }
    }
}

/// Candidate Firefox installation roots for the current host
/// - Linux: ~/.mozilla/firefox, plus the snap confinement path
/// - macOS: ~/Library/Application Support/Firefox
/// - Windows: %APPDATA%/Mozilla/Firefox
///
/// Fails with [`LocateError::UnsupportedPlatform`] on any other host,
/// before any file access. A supported host without a resolvable home
/// directory yields no candidates, which surfaces later as
/// [`LocateError::NoIndexFileFound`].
pub fn candidate_roots() -> Result<Vec<ProfileRoot>, LocateError> {
    #[cfg(target_os = "linux")]
    {
        let Some(home) = dirs::home_dir() else {
            return Ok(Vec::new());
        };
        Ok(vec![
            ProfileRoot::new(home.join(".mozilla").join("firefox")),
            ProfileRoot::new(
                home.join("snap")
                    .join("firefox")
                    .join("common")
                    .join(".mozilla")
                    .join("firefox"),
            ),
        ])
    }

    #[cfg(target_os = "macos")]
    {
        let Some(home) = dirs::home_dir() else {
            return Ok(Vec::new());
        };
        Ok(vec![ProfileRoot::new(
            home.join("Library")
                .join("Application Support")
                .join("Firefox"),
        )])
    }

    #[cfg(target_os = "windows")]
    {
        let Some(appdata) = dirs::config_dir() else {
            return Ok(Vec::new());
        };
        Ok(vec![ProfileRoot::new(
            appdata.join("Mozilla").join("Firefox"),
        )])
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        Err(LocateError::UnsupportedPlatform(
            std::env::consts::OS.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_roots_resolve() {
        // Supported hosts report at least one candidate installation
        let roots = candidate_roots().expect("supported platform");
        assert!(!roots.is_empty());
        for root in &roots {
            assert!(root.ini_path.ends_with("profiles.ini"));
            assert_eq!(root.ini_path.parent(), Some(root.base_dir.as_path()));
        }
    }
}
