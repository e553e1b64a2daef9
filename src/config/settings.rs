//! User settings for the expense tracker
//!
//! Display preferences and the sizes of the dashboard views.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Upper bound for the monthly chart window
pub const MAX_TRAILING_MONTHS: u32 = 120;

/// User settings, stored as `config.json` in the base directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many expenses the dashboard's recent list shows
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// How many months the monthly chart covers
    #[serde(default = "default_trailing_months")]
    pub trailing_months: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_recent_count() -> usize {
    5
}

fn default_trailing_months() -> u32 {
    6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_count: default_recent_count(),
            trailing_months: default_trailing_months(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings: Self = read_json(paths.settings_file())
            .map_err(|e| ExpenseError::Config(format!("Failed to load settings: {}", e)))?;
        settings.validated()
    }

    /// Reject an unusable date format and clamp the monthly chart window
    pub fn validated(mut self) -> Result<Self, ExpenseError> {
        if !self.date_format_is_valid() {
            return Err(ExpenseError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }

        let months = self.trailing_months.clamp(1, MAX_TRAILING_MONTHS);
        if months != self.trailing_months {
            warn!(
                configured = self.trailing_months,
                used = months,
                "trailing_months out of range"
            );
            self.trailing_months = months;
        }

        Ok(self)
    }

    /// Whether `date_format` contains only valid strftime specifiers
    pub fn date_format_is_valid(&self) -> bool {
        !StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
