//! Snygg Editor - the editing workspace around a snygg stylesheet.
//!
//! Where the `snygg` crate models stylesheets, this crate hosts them:
//!
//! - [`Workspace`]: transactional edits with dirty tracking, undo and redo,
//!   loading with fallback and saving into the component's stylesheet path
//! - [`ImeUiCatalog`]: the keyboard UI elements and the properties they accept
//! - [`EnglishTranslations`]: display names for elements, properties and encoders
//! - [`StylesheetView`]: a serializable projection of a stylesheet at a level
//! - [`ThemeComponentMeta`]: validated theme component metadata
//! - [`EditorConfig`]: YAML configuration
//!
//! The `snygg-edit` binary exposes all of this on the command line.

mod component;
mod config;
mod error;
mod translations;
mod view;
mod workspace;

pub mod ime_ui;

pub use component::{
    default_stylesheet_path, ComponentMetaDraft, ExtensionManifest, ThemeComponentMeta,
    MANIFEST_FILE, STYLESHEET_DIR,
};
pub use config::{EditorConfig, DEFAULT_SCHEMA};
pub use error::{MetaValidationError, WorkspaceError};
pub use ime_ui::ImeUiCatalog;
pub use translations::EnglishTranslations;
pub use view::{Preview, PropertyRow, RuleView, StylesheetView};
pub use workspace::Workspace;
