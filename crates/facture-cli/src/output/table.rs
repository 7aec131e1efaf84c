//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// One placeholder of an inspected template.
pub struct PlaceholderRow {
    /// Symbol name as written in the template.
    pub name: String,
    /// Directive applied to the symbol value.
    pub directive: Option<String>,
    /// Directive applied to the output rendered so far.
    pub chained: Option<String>,
}

/// Format placeholders as an ASCII table.
pub fn format_placeholder_table(rows: &[PlaceholderRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Symbol", "Directive", "Chained"]);

    for row in rows {
        table.add_row(vec![
            row.name.clone(),
            row.directive.clone().unwrap_or_else(|| "-".into()),
            row.chained.clone().unwrap_or_else(|| "-".into()),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directives_show_as_dash() {
        let rows = vec![PlaceholderRow {
            name: "client".into(),
            directive: Some("case=A".into()),
            chained: None,
        }];
        let rendered = format_placeholder_table(&rows).to_string();
        assert!(rendered.contains("client"));
        assert!(rendered.contains("case=A"));
        assert!(rendered.contains('-'));
    }
}
