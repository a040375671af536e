//! Business logic layer for boxoffice-cli
//!
//! Services derive adjusted figures, highlights and sorted views from the
//! raw film records without mutating them.

pub mod analysis;
pub mod enrich;
pub mod highlights;
pub mod views;

pub use analysis::Analysis;
pub use enrich::{enrich_record, EnrichmentService};
pub use highlights::Highlights;
