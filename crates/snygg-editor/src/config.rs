//! Editor configuration.
//!
//! Loaded from a YAML file; every field is optional.
//!
//! ```yaml
//! default_level: developer
//! undo_limit: 100
//! pretty: false
//! schema: https://schemas.florisboard.org/snygg/v2/stylesheet
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use snygg::Level;

use crate::error::WorkspaceError;

/// Schema reference written into new stylesheets.
pub const DEFAULT_SCHEMA: &str = "https://schemas.florisboard.org/snygg/v2/stylesheet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Level the editor opens at.
    pub default_level: Level,
    /// Maximum number of undo snapshots kept.
    pub undo_limit: usize,
    /// Pretty-print saved stylesheets.
    pub pretty: bool,
    /// `$schema` written into stylesheets that do not carry one.
    pub schema: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            default_level: Level::default(),
            undo_limit: 50,
            pretty: true,
            schema: Some(DEFAULT_SCHEMA.to_string()),
        }
    }
}

impl EditorConfig {
    pub fn from_yaml(input: &str) -> Result<Self, serde_yaml::Error> {
        // an empty document deserializes as unit, not as an empty mapping
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(input)
    }

    /// Reads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, WorkspaceError> {
        let input = match fs::read_to_string(path) {
            Ok(input) => input,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no editor config, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(WorkspaceError::io(path, err)),
        };
        Self::from_yaml(&input).map_err(|err| WorkspaceError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}
