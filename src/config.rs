use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;
use crate::report::DEFAULT_CRITICAL_TAGS;

pub const DEFAULT_TEST_FILE: &str = "test_app/main/test_macropad.c";
pub const DEFAULT_TITLE: &str = "MacroPad Test Suite Summary";

/// Settings for one reporter run. Every field may be omitted from a config
/// file, in which case the built-in default applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub test_file: PathBuf,
    pub critical_tags: Vec<String>,
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            test_file: PathBuf::from(DEFAULT_TEST_FILE),
            critical_tags: DEFAULT_CRITICAL_TAGS.iter().map(|t| t.to_string()).collect(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ReportConfig {
    /// Loads a config file, choosing the parser from its extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading report config");

        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string())),
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string())),
            _ => Err(ConfigError::unsupported_format(extension)),
        }
    }

    /// Applies command-line values on top of this config. An empty
    /// `critical_tags` keeps the configured list.
    pub fn with_overrides(mut self, test_file: Option<PathBuf>, critical_tags: Vec<String>) -> Self {
        if let Some(test_file) = test_file {
            self.test_file = test_file;
        }
        if !critical_tags.is_empty() {
            self.critical_tags = critical_tags;
        }
        self
    }
}
