//! Rate table loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a fiscal-year
//! rate table from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateTable;

/// Loads and provides access to a fiscal-year rate table.
///
/// The `ConfigLoader` reads a YAML rate table file and hands out the parsed
/// [`RateTable`] to the calculation functions.
///
/// # File Structure
///
/// ```text
/// config/korea-2025.yaml
/// ├── metadata    # name, fiscal year, effective date, source note
/// ├── standard    # standard-scheme rates and the non-taxable threshold
/// └── flat        # flat withholding rate
/// ```
///
/// # Example
///
/// ```no_run
/// use daywage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/korea-2025.yaml").unwrap();
/// println!("Fiscal year: {}", loader.rates().metadata.fiscal_year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: RateTable,
}

impl ConfigLoader {
    /// Loads a rate table from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rate table file (e.g., "./config/korea-2025.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or is missing required fields
    ///   (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use daywage_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/korea-2025.yaml")?;
    /// # Ok::<(), daywage_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rates: RateTable =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { rates })
    }

    /// Creates a loader backed by the built-in 2025 rate table.
    pub fn builtin() -> Self {
        Self {
            rates: RateTable::korea_2025(),
        }
    }

    /// Returns the loaded rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
