//! Configuration management for boxoffice-cli
//!
//! Output settings loaded from an optional JSON file and overridden from
//! the command line.

pub mod settings;

pub use settings::Settings;
