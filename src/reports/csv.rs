//! Pantry export.
//!
//! One header line, then one row per item in input order. Names are wrapped
//! in double quotes but not escaped, and no other field is quoted. A name
//! containing `"` or a unit containing `,` therefore yields a malformed row.
//! Consumers of the existing artifact depend on this exact shape.

use crate::model::{format_item_date, PantryItem};

/// Download name of the export artifact.
pub const EXPORT_FILE_NAME: &str = "my-pantry.csv";
/// Media type of the export artifact.
pub const EXPORT_MIME_TYPE: &str = "text/csv";
pub const EXPORT_HEADER: &str = "Name,Quantity,Unit,Expiry Date,Added Date";

/// Serialize items to the export format. Rows are joined with `\n` and the
/// text has no trailing newline.
#[must_use]
pub fn to_delimited_text(items: &[PantryItem]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(EXPORT_HEADER.to_string());
    lines.extend(items.iter().map(export_row));
    lines.join("\n")
}

fn export_row(item: &PantryItem) -> String {
    format!(
        "\"{}\",{},{},{},{}",
        item.name,
        item.quantity,
        item.unit,
        format_item_date(item.expiry_date),
        item.added_date.map(format_item_date).unwrap_or_default()
    )
}
