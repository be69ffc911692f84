//! Settings resolution for the command line.
//!
//! Values come from, in order of precedence: command-line flags (or the
//! `INVENTORY_DB` environment variable for the database path), an optional
//! YAML config file, and built-in defaults.
//!
//! # Example YAML
//!
//! ```yaml
//! database: /var/lib/inventory/inventory.db
//! format: table
//! ```

use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Database file used when nothing else is configured.
pub const DEFAULT_DATABASE: &str = "inventory.db";

/// Contents of the optional YAML config file. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub database: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Loads configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| format!("Failed to open config '{}': {e}", path.display()))?;
        serde_yaml::from_reader(BufReader::new(file))
            .map_err(|e| format!("Failed to parse config '{}': {e}", path.display()))
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database: PathBuf,
    pub format: OutputFormat,
}

impl Settings {
    /// Merges explicit values over the config file over defaults.
    pub fn resolve(
        database: Option<PathBuf>,
        format: Option<OutputFormat>,
        file: Option<FileConfig>,
    ) -> Self {
        let file = file.unwrap_or_default();
        Self {
            database: database
                .or(file.database)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE)),
            format: format.or(file.format).unwrap_or_default(),
        }
    }
}
