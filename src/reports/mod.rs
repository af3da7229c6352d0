//! Rendering pantry, recipe and suggestion data for output.
//!
//! - CSV: the pantry export artifact
//! - JSON: structured data for scripting
//! - Table: aligned terminal output

mod csv;
mod json;
mod table;
mod types;

pub use csv::{to_delimited_text, EXPORT_FILE_NAME, EXPORT_HEADER, EXPORT_MIME_TYPE};
pub use json::to_json;
pub use table::TableReporter;
pub use types::ReportFormat;
