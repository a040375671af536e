//! Output settings for boxoffice-cli
//!
//! Controls where the table and charts are written and how large charts are
//! drawn. The analysis itself has no settings: films, rates and the reference
//! year are built in.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::charts::{MIN_HEIGHT, MIN_WIDTH};
use crate::error::BoxOfficeError;
use crate::export::DEFAULT_EXPORT_FILE;

/// User settings for boxoffice-cli
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Where the CSV table is written
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,

    /// Directory to save chart text files in; charts are only printed when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_dir: Option<PathBuf>,

    /// Chart width in terminal columns
    #[serde(default = "default_chart_width")]
    pub chart_width: u16,

    /// Chart height in terminal rows (bar charts grow to fit every film)
    #[serde(default = "default_chart_height")]
    pub chart_height: u16,
}

fn default_schema_version() -> u32 {
    1
}

fn default_export_path() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_FILE)
}

fn default_chart_width() -> u16 {
    100
}

fn default_chart_height() -> u16 {
    24
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            export_path: default_export_path(),
            chart_dir: None,
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, or use defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self, BoxOfficeError> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|e| {
            BoxOfficeError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            BoxOfficeError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), BoxOfficeError> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BoxOfficeError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(path, contents).map_err(|e| {
            BoxOfficeError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Check that chart dimensions are drawable
    pub fn validate(&self) -> Result<(), BoxOfficeError> {
        if self.chart_width < MIN_WIDTH || self.chart_height < MIN_HEIGHT {
            return Err(BoxOfficeError::Config(format!(
                "chart size {}x{} is below the minimum {}x{}",
                self.chart_width, self.chart_height, MIN_WIDTH, MIN_HEIGHT
            )));
        }
        Ok(())
    }
}
