//! Update command - check GitHub releases and replace the running binary

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use semver::Version;
use serde::Deserialize;
use ureq::Agent;

use super::utils;

/// GitHub API endpoint for the latest release.
const RELEASE_API_URL: &str =
    "https://api.github.com/repos/aerobit/firefox-optimizer/releases/latest";

/// Global timeout for all HTTP operations.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum accepted API response body (10 MB).
const MAX_API_RESPONSE_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum accepted artifact download (50 MB).
const MAX_DOWNLOAD_SIZE: u64 = 50 * 1024 * 1024;

/// Hosts that update requests may touch. Any other host is rejected
/// regardless of the URL path.
const ALLOWED_HOSTS: &[&str] = &[
    "github.com",
    "api.github.com",
    "objects.githubusercontent.com",
    "github-releases.githubusercontent.com",
];

/// Release descriptor returned by the GitHub API.
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    #[serde(default)]
    assets: Vec<Asset>,
}

/// One downloadable artifact attached to a release.
#[derive(Debug, Deserialize)]
struct Asset {
    name: String,
    browser_download_url: String,
}

/// Outcome of the update flow, for the caller's control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Already on the latest release, or the check was declined/failed.
    Continue,
    /// The running binary was replaced; the process should exit so a
    /// restart picks up the new artifact.
    Replaced,
}

/// Check for a newer release and optionally replace the running binary.
///
/// Network and replacement failures are reported, never propagated: the
/// menu keeps running afterwards.
pub fn execute() -> UpdateOutcome {
    println!("\nChecking for updates...");
    match check_and_update() {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} {:#}", "Failed to check for updates:".red(), e);
            UpdateOutcome::Continue
        }
    }
}

fn check_and_update() -> Result<UpdateOutcome> {
    let release = fetch_latest_release()?;

    let current = Version::parse(env!("CARGO_PKG_VERSION"))
        .context("Failed to parse the running version")?;
    let latest_str = release.tag_name.strip_prefix('v').unwrap_or(&release.tag_name);
    let latest = Version::parse(latest_str)
        .with_context(|| format!("Failed to parse latest version '{}'", release.tag_name))?;

    if latest <= current {
        println!("You are using the latest version of Firefox Optimizer.");
        return Ok(UpdateOutcome::Continue);
    }

    println!("A new version ({}) is available.", latest);

    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let exe_name = exe
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    let Some(asset) = release.assets.iter().find(|a| a.name == exe_name) else {
        println!(
            "No release asset named '{}' found; download manually from the release page.",
            exe_name
        );
        return Ok(UpdateOutcome::Continue);
    };

    if !utils::confirm("Do you want to update now? (y/n): ")? {
        println!("Update canceled.");
        return Ok(UpdateOutcome::Continue);
    }

    let bytes = download(&asset.browser_download_url)?;
    replace_running_binary(&exe, &bytes)?;

    println!(
        "{} Firefox Optimizer has been updated to version {}. Please restart it.",
        "Ok:".green(),
        latest
    );
    Ok(UpdateOutcome::Replaced)
}

/// Fetch and decode the latest release descriptor.
fn fetch_latest_release() -> Result<Release> {
    validate_update_url(RELEASE_API_URL)?;

    let body = agent()
        .get(RELEASE_API_URL)
        .header("User-Agent", "firefox-optimizer")
        .header("Accept", "application/vnd.github+json")
        .call()
        .context("Failed to fetch latest release info from GitHub")?
        .into_body()
        .with_config()
        .limit(MAX_API_RESPONSE_SIZE)
        .read_to_string()
        .context("Failed to read release response")?;

    serde_json::from_str(&body).context("Failed to parse release descriptor")
}

/// Download a release artifact, size-capped.
fn download(url: &str) -> Result<Vec<u8>> {
    validate_update_url(url)?;

    agent()
        .get(url)
        .header("User-Agent", "firefox-optimizer")
        .call()
        .with_context(|| format!("Failed to download: {}", url))?
        .into_body()
        .with_config()
        .limit(MAX_DOWNLOAD_SIZE)
        .read_to_vec()
        .context("Failed to read downloaded artifact")
}

/// HTTP agent with the global timeout applied.
fn agent() -> Agent {
    Agent::config_builder()
        .timeout_global(Some(HTTP_TIMEOUT))
        .build()
        .into()
}

/// Validate that a URL is safe for update operations: HTTPS only, host
/// on the GitHub allowlist. Asset URLs come out of the release JSON, so
/// they are validated too before any request is made.
fn validate_update_url(raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw).with_context(|| format!("Invalid URL: {}", raw))?;

    if parsed.scheme() != "https" {
        bail!(
            "Insecure URL scheme '{}' rejected; only HTTPS is allowed",
            parsed.scheme()
        );
    }

    let host = parsed.host_str().unwrap_or("");
    if !ALLOWED_HOSTS.contains(&host) {
        bail!("URL host '{}' is not allowed for update downloads", host);
    }

    Ok(())
}

/// Swap the new artifact in over the running executable.
///
/// The bytes land in a sibling file first; the final step is a rename,
/// which on Unix leaves the running inode valid. Windows cannot rename
/// over a running exe, so the old one is moved aside to `.old` first.
fn replace_running_binary(current_exe: &Path, bytes: &[u8]) -> Result<()> {
    let new_path = current_exe.with_extension("new");
    fs::write(&new_path, bytes)
        .with_context(|| format!("Failed to write: {}", new_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&new_path, fs::Permissions::from_mode(0o755))
            .context("Failed to set executable permissions")?;
        fs::rename(&new_path, current_exe).context("Failed to replace the running binary")?;
    }

    #[cfg(windows)]
    {
        let old_path = current_exe.with_extension("old");
        let _ = fs::remove_file(&old_path);
        fs::rename(current_exe, &old_path).context("Failed to move the running binary aside")?;
        fs::rename(&new_path, current_exe).context("Failed to install the new binary")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_descriptor_decodes() {
        let json = r#"{
            "tag_name": "v1.1.0",
            "html_url": "https://github.com/aerobit/firefox-optimizer/releases/tag/v1.1.0",
            "assets": [
                {"name": "firefox-optimizer",
                 "browser_download_url": "https://github.com/aerobit/firefox-optimizer/releases/download/v1.1.0/firefox-optimizer"}
            ]
        }"#;
        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v1.1.0");
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].name, "firefox-optimizer");
    }

    #[test]
    fn test_release_without_assets_decodes() {
        let release: Release = serde_json::from_str(r#"{"tag_name": "v2.0.0"}"#).unwrap();
        assert!(release.assets.is_empty());
    }

    #[test]
    fn test_version_tag_comparison() {
        let current = Version::parse("1.0.0").unwrap();
        let same = Version::parse("v1.0.0".strip_prefix('v').unwrap()).unwrap();
        let newer = Version::parse("1.0.1").unwrap();
        assert!(same <= current);
        assert!(newer > current);
    }

    #[test]
    fn test_validate_rejects_plain_http() {
        assert!(validate_update_url("http://api.github.com/repos/x/y").is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_host() {
        assert!(validate_update_url("https://evil.example.com/payload").is_err());
    }

    #[test]
    fn test_validate_accepts_github_hosts() {
        assert!(validate_update_url(RELEASE_API_URL).is_ok());
        assert!(validate_update_url(
            "https://objects.githubusercontent.com/release/firefox-optimizer"
        )
        .is_ok());
    }

    #[test]
    fn test_replace_writes_new_binary_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("firefox-optimizer");
        fs::write(&exe, b"old build").unwrap();

        replace_running_binary(&exe, b"new build").unwrap();

        assert_eq!(fs::read(&exe).unwrap(), b"new build");
        assert!(!exe.with_extension("new").exists());
    }
}
