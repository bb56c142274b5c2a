//! Pure menu transition functions
//!
//! The interactive loop reads raw input lines; everything that
//! interprets them lives here, so each transition is testable without
//! simulating console input.

use crate::error::SelectionError;

/// Top-level menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Apply,
    Backup,
    Restore,
    Reset,
    CheckUpdates,
    ListCatalog,
    Quit,
}

impl MenuChoice {
    /// Map a main-menu input line to an action. `None` re-prompts.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" => Some(Self::Apply),
            "2" => Some(Self::Backup),
            "3" => Some(Self::Restore),
            "4" => Some(Self::Reset),
            "5" => Some(Self::CheckUpdates),
            "l" => Some(Self::ListCatalog),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Result of resolving a category selection expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The operator backed out of the category menu.
    Cancelled,
    /// 0-based category indices in input order. Duplicates are kept:
    /// selecting a category twice writes its lines twice.
    Indices(Vec<usize>),
}

impl Selection {
    /// Resolve a selection expression against a catalog of
    /// `category_count` entries.
    ///
    /// `"b"` cancels (case-insensitive), `"0"` selects every category in
    /// catalog order, anything else is a comma-separated list of 1-based
    /// category numbers. One bad token rejects the whole expression.
    pub fn parse(input: &str, category_count: usize) -> Result<Self, SelectionError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("b") {
            return Ok(Self::Cancelled);
        }
        if trimmed == "0" {
            return Ok(Self::Indices((0..category_count).collect()));
        }

        let mut indices = Vec::new();
        for token in trimmed.split(',') {
            let token = token.trim();
            let number: usize = token
                .parse()
                .map_err(|_| SelectionError::InvalidNumber(token.to_string()))?;
            if number == 0 || number > category_count {
                return Err(SelectionError::OutOfRange(number));
            }
            indices.push(number - 1);
        }
        Ok(Self::Indices(indices))
    }
}

/// Interpret a y/n confirmation answer. Anything but "y" declines.
pub fn parse_confirm(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
