//! Output formatting for items and command results.

use inventory_core::InventoryItem;
use serde::{Deserialize, Serialize};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

const HEADERS: [&str; 5] = ["ID", "Name", "Quantity", "Price", "Created At"];

/// Formats a list of items in the requested output format.
pub fn format_items(items: &[InventoryItem], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Table => Ok(items_to_table(items)),
        OutputFormat::Json | OutputFormat::Yaml => format_value(&items, format),
    }
}

/// Serializes any value as JSON or YAML.
///
/// `Table` falls back to JSON; callers render their own table text.
pub fn format_value<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(value)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| format!("YAML serialization failed: {e}"))
        }
    }
}

fn items_to_table(items: &[InventoryItem]) -> String {
    let rows: Vec<[String; 5]> = items
        .iter()
        .map(|item| {
            [
                item.id.to_string(),
                item.name.clone(),
                item.quantity.to_string(),
                item.price.to_string(),
                item.created_at.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

/// Appends one table line. ID, quantity and price are right-aligned.
fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (cell, &width))| match col {
            0 | 2 | 3 => format!("{cell:>width$}"),
            _ => format!("{cell:<width$}"),
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
