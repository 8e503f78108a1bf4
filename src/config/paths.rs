//! Path management for fintrack
//!
//! Resolves the application directory for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories` (e.g. `~/.config/fintrack`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FintrackError;

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct FintrackPaths {
    base_dir: PathBuf,
}

impl FintrackPaths {
    /// Resolve the application directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// `FINTRACK_DATA_DIR` override is not set.
    pub fn new() -> Result<Self, FintrackError> {
        let base_dir = if let Ok(custom) = std::env::var("FINTRACK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "fintrack")
                .map(|p| p.config_dir().to_path_buf())
                .ok_or_else(|| {
                    FintrackError::Config("Could not determine a home directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Get the path to payments.json
    pub fn payments_file(&self) -> PathBuf {
        self.data_dir().join("payments.json")
    }

    /// Get the path to shopping.json
    pub fn shopping_file(&self) -> PathBuf {
        self.data_dir().join("shopping.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FintrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FintrackError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FintrackError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if fintrack has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.budgets_file(), temp_dir.path().join("data").join("budgets.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }
}
