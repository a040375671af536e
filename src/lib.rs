//! boxoffice-cli - Inflation-adjusted box office analysis
//!
//! This library computes inflation-adjusted budget, box office and profit
//! for a built-in list of franchise films, and renders the results as
//! terminal charts, a console summary and a delimited table.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `catalog`: The built-in films and inflation rates
//! - `models`: Film records and the inflation table
//! - `services`: Enrichment, highlights and sorted views
//! - `charts`: Bar and line charts drawn with ratatui
//! - `display`: Console formatting
//! - `export`: CSV, JSON and YAML export
//! - `config`: Output settings
//! - `cli`: Command handlers
//! - `tui`: Interactive chart viewer
//!
//! # Example
//!
//! ```rust
//! use boxoffice_cli::catalog::{film_catalog, inflation_rates};
//! use boxoffice_cli::services::Analysis;
//!
//! let analysis = Analysis::run(&film_catalog(), &inflation_rates()).unwrap();
//! assert_eq!(analysis.highlights().max_budget, "The Force Awakens");
//! ```

pub mod catalog;
pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{BoxOfficeError, BoxOfficeResult};
