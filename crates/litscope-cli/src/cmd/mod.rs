pub mod load;

use anyhow::Result;
use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

use crate::config::Config;

/// Table with the shared look of all litscope output
pub(crate) fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    table
}

/// `litscope config` - print the effective configuration
pub fn show_config(config: &Config) -> Result<()> {
    let mut table = styled_table(&["Setting", "Value"]);
    table.add_row(vec![
        "Strict authors",
        if config.scopus.strict_authors {
            "yes"
        } else {
            "no"
        },
    ]);
    table.add_row(vec!["Output format", &config.output.format.to_string()]);
    table.add_row(vec!["Table rows", &config.output.max_rows.to_string()]);

    eprintln!("\n{table}");
    Ok(())
}
