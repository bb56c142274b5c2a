//! Optimization settings catalog
//!
//! The catalog is a declarative JSON table embedded at compile time and
//! deserialized once at startup. Keeping it as data rather than nested
//! literals lets integrity checks (unique category names, every option
//! emitting at least one line) run separately from the workflow logic.

use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("data.json");

/// One optimization toggle: what it does and the user.js lines it emits.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizationOption {
    /// Short label shown in menus.
    pub description: String,
    /// Rationale text explaining what the option changes.
    pub details: String,
    /// Raw preference lines, written verbatim to user.js.
    pub settings: Vec<String>,
}

/// A named, ordered group of related options.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    pub options: Vec<OptimizationOption>,
}

/// The full settings catalog.
///
/// Category order defines menu numbering and, within a selected
/// category, write ordering. Immutable after load.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Load and validate the embedded catalog table.
    pub fn load() -> Result<Self> {
        Self::parse(CATALOG_JSON).context("Failed to load embedded settings catalog")
    }

    /// Parse a catalog from its JSON representation and validate it.
    pub fn parse(json: &str) -> Result<Self> {
        let categories: Vec<Category> =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Integrity checks: at least one category, unique category names,
    /// at least one option per category, at least one preference line
    /// per option.
    fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            bail!("Settings catalog is empty");
        }
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.name.as_str()) {
                bail!("Duplicate catalog category: {}", category.name);
            }
            if category.options.is_empty() {
                bail!("Catalog category has no options: {}", category.name);
            }
            for option in &category.options {
                if option.settings.is_empty() {
                    bail!(
                        "Option emits no settings: {} / {}",
                        category.name,
                        option.description
                    );
                }
            }
        }
        Ok(())
    }
}
