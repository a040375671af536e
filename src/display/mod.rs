//! Display formatting for terminal output
//!
//! Provides utilities for formatting the analysis for terminal display,
//! including the record table and the highlights summary.

pub mod report;
pub mod table;

pub use report::{format_highlights, format_millions, format_millions_whole, HIGHLIGHTS_BANNER};
pub use table::format_record_table;
