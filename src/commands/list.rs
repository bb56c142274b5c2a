//! List command - show the optimization catalog

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::catalog::Catalog;

/// Render the catalog as a table, one row per option.
///
/// `details` adds the rationale column. Read-only; touches no profile.
pub fn render(catalog: &Catalog, details: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["#", "Category", "Option", "Prefs"];
    if details {
        header.push("Details");
    }
    table.set_header(header);

    for (idx, category) in catalog.categories().iter().enumerate() {
        for (opt_idx, option) in category.options.iter().enumerate() {
            // Category name and number only on the first row of its group
            let (number, name) = if opt_idx == 0 {
                ((idx + 1).to_string(), category.name.as_str())
            } else {
                (String::new(), "")
            };

            let mut row = vec![
                Cell::new(number),
                Cell::new(name),
                Cell::new(&option.description),
                Cell::new(option.settings.len()),
            ];
            if details {
                row.push(Cell::new(&option.details));
            }
            table.add_row(row);
        }
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::parse(
            r#"[
                {"name": "Privacy", "options": [
                    {"description": "Isolate cookies", "details": "Scopes site data.",
                     "settings": ["user_pref(\"a\", true);", "user_pref(\"b\", true);"]}
                ]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_contains_category_and_option() {
        let output = render(&small_catalog(), false);
        assert!(output.contains("Privacy"));
        assert!(output.contains("Isolate cookies"));
        assert!(!output.contains("Scopes site data."));
    }

    #[test]
    fn test_render_with_details_adds_rationale() {
        let output = render(&small_catalog(), true);
        assert!(output.contains("Scopes site data."));
    }
}
