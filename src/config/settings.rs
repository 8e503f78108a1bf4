//! User settings for fintrack
//!
//! Manages user preferences including display currency, exchange-rate cache
//! lifetime, and payment status thresholds.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display currency code used for plan amounts
    #[serde(default = "default_currency")]
    pub currency_code: String,

    /// How long a fetched exchange rate stays fresh, in seconds
    #[serde(default = "default_rate_ttl")]
    pub rate_cache_ttl_secs: u64,

    /// Days until due within which an unpaid payment is "urgent"
    #[serde(default = "default_urgent_days")]
    pub payment_urgent_days: i64,

    /// Days until due within which an unpaid payment is "soon"
    #[serde(default = "default_soon_days")]
    pub payment_soon_days: i64,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "RON".to_string()
}

fn default_rate_ttl() -> u64 {
    300 // 5 minutes
}

fn default_urgent_days() -> i64 {
    3
}

fn default_soon_days() -> i64 {
    7
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: default_currency(),
            rate_cache_ttl_secs: default_rate_ttl(),
            payment_urgent_days: default_urgent_days(),
            payment_soon_days: default_soon_days(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FintrackError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Let the caller decide when to persist the defaults.
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FintrackError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FintrackError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_code, "RON");
        assert_eq!(settings.rate_cache_ttl_secs, 300);
        assert_eq!(settings.payment_urgent_days, 3);
        assert_eq!(settings.payment_soon_days, 7);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_code = "EUR".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_code, "EUR");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.rate_cache_ttl_secs, 300);
    }
}
