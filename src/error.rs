//! Typed errors for startup discovery and menu input

use thiserror::Error;

/// Errors that abort startup before any profile work can happen.
///
/// Everything here is fatal: without a profile list no further action is
/// meaningful, so `main` prints the diagnostic and exits non-zero.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The host OS has no known Firefox installation convention.
    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    /// None of the candidate profiles.ini locations exist.
    #[error("No profiles.ini file found.")]
    NoIndexFileFound,

    /// At least one profiles.ini was read but no profile directory resolved.
    #[error("No Firefox profiles found.")]
    NoProfilesFound,
}

/// Rejection of a category selection expression.
///
/// Non-fatal: the caller re-prompts. A single bad token rejects the whole
/// expression, so partial selections are never applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A token failed to parse as a category number.
    #[error("Invalid input '{0}'. Please enter numbers separated by commas.")]
    InvalidNumber(String),

    /// A category number falls outside the catalog.
    #[error("Invalid selection '{0}'. Please choose valid category numbers.")]
    OutOfRange(usize),
}
