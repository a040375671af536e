//! Core data models for boxoffice-cli
//!
//! This module contains the film records and the inflation table the
//! analysis is computed from.

pub mod film;
pub mod inflation;

pub use film::{EnrichedRecord, FilmRecord};
pub use inflation::{InflationTable, REFERENCE_YEAR};
