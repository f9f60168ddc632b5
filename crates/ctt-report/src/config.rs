//! File-backed report configuration.
//!
//! The tracker keeps its settings in `~/.claude-task-tracker/config.json`.
//! Everything here has a sensible default, and a missing config file is
//! not an error - the report runs fine on defaults alone.

use crate::selection::NavigationSelectionController;
use ctt_core::{SessionListProjector, StatusCategory, StatusTaxonomy, DEFAULT_EXCERPT_LENGTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Directory under the home directory holding tracker state.
const CONFIG_DIR: &str = ".claude-task-tracker";

/// Config file name inside [`CONFIG_DIR`].
const CONFIG_FILE: &str = "config.json";

/// Errors from loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but is not valid config JSON
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One configured raw-status mapping, layered over the default table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMapping {
    /// Raw status string as written by a hook
    pub status: String,
    /// Category it should classify into
    pub category: StatusCategory,
}

/// Report configuration.
///
/// Deserialized from JSON; every field is optional in the file and falls
/// back to its default, so a partial config is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ReportConfig {
    /// Goal excerpt length for the session list, in characters
    pub truncation_length: usize,

    /// Ordered navigation sections; the first one is active on startup
    pub sections: Vec<String>,

    /// Extra or overriding raw-status mappings
    pub status_overrides: Vec<StatusMapping>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            truncation_length: DEFAULT_EXCERPT_LENGTH,
            sections: vec![
                "today".to_string(),
                "sessions".to_string(),
                "accounts".to_string(),
            ],
            status_overrides: Vec::new(),
        }
    }
}

impl ReportConfig {
    /// Returns the default config file path, if a home directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Loads the default config file, falling back to defaults.
    ///
    /// A missing file is normal (fresh install) and silently uses the
    /// defaults; an unreadable or malformed file is logged and also
    /// falls back, matching the original tracker's tolerance.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            debug!("no home directory, using default config");
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "config load failed, using defaults");
                Self::default()
            }
        }
    }

    /// Builds the classification taxonomy: default table plus overrides.
    pub fn taxonomy(&self) -> StatusTaxonomy {
        let mut taxonomy = StatusTaxonomy::default();
        taxonomy.extend(
            self.status_overrides
                .iter()
                .map(|m| (m.status.clone(), m.category)),
        );
        taxonomy
    }

    /// Builds the list projector with the configured excerpt length.
    pub fn projector(&self) -> SessionListProjector {
        SessionListProjector::new(self.truncation_length)
    }

    /// Builds the navigation controller over the configured sections.
    pub fn navigation(&self) -> NavigationSelectionController {
        NavigationSelectionController::new(self.sections.clone())
    }
}
