//! Theme component metadata.
//!
//! A theme extension ships one or more components; each names the stylesheet
//! file it renders with. [`ComponentMetaDraft`] holds the raw form input and
//! [`ComponentMetaDraft::validate`] produces a trimmed [`ThemeComponentMeta`].

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MetaValidationError, WorkspaceError};

static COMPONENT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("component id pattern is valid"));

/// Directory, relative to the workspace, holding default stylesheet files.
pub const STYLESHEET_DIR: &str = "stylesheets";

/// Path of the stylesheet used when a component does not name one.
pub fn default_stylesheet_path(id: &str) -> String {
    format!("{}/{}.json", STYLESHEET_DIR, id)
}

/// Validated metadata of one theme component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeComponentMeta {
    pub id: String,
    pub label: String,
    pub authors: Vec<String>,
    #[serde(default)]
    pub is_night_theme: bool,
    #[serde(default)]
    pub is_borderless: bool,
    #[serde(default)]
    pub is_material_you_aware: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stylesheet_path: String,
}

impl ThemeComponentMeta {
    /// The stylesheet path, or the default one when none is set.
    pub fn stylesheet_path(&self) -> String {
        if self.stylesheet_path.is_empty() {
            default_stylesheet_path(&self.id)
        } else {
            self.stylesheet_path.clone()
        }
    }

    /// Starts an edit of this metadata.
    pub fn to_draft(&self) -> ComponentMetaDraft {
        ComponentMetaDraft {
            id: self.id.clone(),
            label: self.label.clone(),
            authors: self.authors.join("\n"),
            is_night_theme: self.is_night_theme,
            is_borderless: self.is_borderless,
            is_material_you_aware: self.is_material_you_aware,
            stylesheet_path: self.stylesheet_path.clone(),
        }
    }
}

/// Unvalidated metadata as typed into an edit form.
///
/// `authors` is newline separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentMetaDraft {
    pub id: String,
    pub label: String,
    pub authors: String,
    pub is_night_theme: bool,
    pub is_borderless: bool,
    pub is_material_you_aware: bool,
    pub stylesheet_path: String,
}

impl ComponentMetaDraft {
    /// Checks every field and returns the trimmed metadata.
    ///
    /// Fields are checked in form order; the first failure is returned.
    pub fn validate(&self) -> Result<ThemeComponentMeta, MetaValidationError> {
        let id = self.id.trim();
        if !COMPONENT_ID.is_match(id) {
            return Err(MetaValidationError::InvalidId { id: id.to_string() });
        }

        let label = self.label.trim();
        if label.is_empty() {
            return Err(MetaValidationError::BlankLabel);
        }

        let authors: Vec<String> = self
            .authors
            .lines()
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .map(str::to_string)
            .collect();
        if authors.is_empty() {
            return Err(MetaValidationError::NoAuthors);
        }

        let stylesheet_path = self.stylesheet_path.trim();
        if !is_valid_stylesheet_path(stylesheet_path) {
            return Err(MetaValidationError::InvalidStylesheetPath {
                path: stylesheet_path.to_string(),
            });
        }

        Ok(ThemeComponentMeta {
            id: id.to_string(),
            label: label.to_string(),
            authors,
            is_night_theme: self.is_night_theme,
            is_borderless: self.is_borderless,
            is_material_you_aware: self.is_material_you_aware,
            stylesheet_path: stylesheet_path.to_string(),
        })
    }

    /// Validates and additionally rejects ids taken by sibling components.
    ///
    /// `current_id` is the id before editing; keeping it is always allowed.
    pub fn validate_among<'a>(
        &self,
        current_id: Option<&str>,
        siblings: impl IntoIterator<Item = &'a ThemeComponentMeta>,
    ) -> Result<ThemeComponentMeta, WorkspaceError> {
        let meta = self.validate()?;
        if current_id != Some(meta.id.as_str())
            && siblings.into_iter().any(|sibling| sibling.id == meta.id)
        {
            return Err(WorkspaceError::DuplicateComponentId { id: meta.id });
        }
        Ok(meta)
    }
}

/// File name of the extension manifest inside a workspace directory.
pub const MANIFEST_FILE: &str = "extension.json";

/// The parts of an extension manifest the editor reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionManifest {
    #[serde(default)]
    pub themes: Vec<ThemeComponentMeta>,
}

impl ExtensionManifest {
    /// Reads `extension.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, WorkspaceError> {
        let path = dir.join(MANIFEST_FILE);
        let input = fs::read_to_string(&path).map_err(|e| WorkspaceError::io(&path, e))?;
        serde_json::from_str(&input).map_err(|e| WorkspaceError::Manifest {
            path,
            message: e.to_string(),
        })
    }

    pub fn component(&self, id: &str) -> Result<&ThemeComponentMeta, WorkspaceError> {
        self.themes
            .iter()
            .find(|theme| theme.id == id)
            .ok_or_else(|| WorkspaceError::UnknownComponent { id: id.to_string() })
    }

    /// Components other than `id`, for duplicate checks.
    pub fn siblings<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a ThemeComponentMeta> {
        self.themes.iter().filter(move |theme| theme.id != id)
    }
}

/// Blank, or a relative `.json` path that stays inside the workspace.
fn is_valid_stylesheet_path(path: &str) -> bool {
    if path.is_empty() {
        return true;
    }
    path.ends_with(".json")
        && !path.starts_with('/')
        && !path.contains('\\')
        && path
            .split('/')
            .all(|part| !part.is_empty() && part != "." && part != "..")
}
