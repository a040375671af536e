//! Logging setup
//!
//! Diagnostics go to stderr through `tracing` so stdout carries only the
//! report, charts and table messages.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when neither `--log-level` nor `BOXOFFICE_LOG` is set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Map a level name to an `EnvFilter` directive, falling back to the default
pub fn filter_for(level: &str) -> EnvFilter {
    let normalised = match level.to_lowercase().as_str() {
        "warning" => "warn".to_string(),
        other => other.to_string(),
    };
    EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber
pub fn init_logging(level: &str) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second initialisation (e.g. from tests) is ignored.
    let _ = tracing_subscriber::registry()
        .with(filter_for(level))
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_filter_for_known_levels() {
        assert_eq!(filter_for("WARNING").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(filter_for("debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging("info");
        init_logging("debug");
    }
}
