//! Export module for boxoffice-cli
//!
//! Provides analysis export in multiple formats:
//! - CSV: the enriched record table (spreadsheet-compatible, `;`-separated)
//! - JSON: machine-readable full export including the inflation rates
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_records_csv, DEFAULT_EXPORT_FILE, DELIMITER};
pub use self::json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::{export_full_yaml, import_from_yaml};
