//! Terminal User Interface module
//!
//! An interactive viewer that pages through the three charts using ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
