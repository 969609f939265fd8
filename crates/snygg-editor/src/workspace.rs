//! Editing workspace for one theme component.
//!
//! A [`Workspace`] owns the [`StylesheetEditor`] of a component, wraps every
//! mutation in a transaction that records an undo snapshot and marks the
//! workspace dirty, and saves the stylesheet back into the workspace
//! directory.
//!
//! # Example
//!
//! ```rust
//! use snygg::{Command, Rule};
//! use snygg_editor::{ComponentMetaDraft, EditorConfig, Workspace};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let meta = ComponentMetaDraft {
//!     id: "night".into(),
//!     label: "Night".into(),
//!     authors: "me".into(),
//!     ..Default::default()
//! }
//! .validate()
//! .unwrap();
//!
//! let mut workspace = Workspace::open(dir.path(), meta, EditorConfig::default());
//! assert!(!workspace.is_dirty());
//!
//! workspace.apply(Command::AddRule { rule: Rule::new("keyboard").unwrap() }).unwrap();
//! assert!(workspace.is_dirty());
//!
//! let path = workspace.save().unwrap();
//! assert!(path.ends_with("stylesheets/night.json"));
//! ```

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use snygg::projection::Translations;
use snygg::{Applied, Command, EditError, Level, SpecCatalog, StylesheetEditor};

use crate::component::{ComponentMetaDraft, ThemeComponentMeta};
use crate::config::EditorConfig;
use crate::error::WorkspaceError;
use crate::view::StylesheetView;

#[derive(Debug, Clone)]
pub struct Workspace {
    dir: PathBuf,
    meta: ThemeComponentMeta,
    stylesheet_path_on_load: String,
    editor: StylesheetEditor,
    config: EditorConfig,
    level: Level,
    dirty: bool,
    undo: VecDeque<StylesheetEditor>,
    redo: Vec<StylesheetEditor>,
}

impl Workspace {
    /// Opens the stylesheet of `meta` inside `dir`.
    ///
    /// A missing, unreadable or malformed stylesheet yields a fresh editor;
    /// the problem is logged, not returned.
    pub fn open(dir: impl Into<PathBuf>, meta: ThemeComponentMeta, config: EditorConfig) -> Self {
        let dir = dir.into();
        let stylesheet_path = meta.stylesheet_path();
        let editor = load_stylesheet(&dir.join(&stylesheet_path), &config);

        Workspace {
            dir,
            meta,
            stylesheet_path_on_load: stylesheet_path,
            editor,
            level: config.default_level,
            config,
            dirty: false,
            undo: VecDeque::new(),
            redo: Vec::new(),
        }
    }

    pub fn editor(&self) -> &StylesheetEditor {
        &self.editor
    }

    pub fn meta(&self) -> &ThemeComponentMeta {
        &self.meta
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Advances Basic → Advanced → Developer → Basic.
    pub fn cycle_level(&mut self) -> Level {
        self.level = self.level.next();
        self.level
    }

    /// Absolute path the stylesheet is saved to.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.dir.join(self.meta.stylesheet_path())
    }

    /// Runs `f` against the editor as one undoable step and marks the
    /// workspace dirty.
    pub fn update<T>(&mut self, f: impl FnOnce(&mut StylesheetEditor) -> T) -> T {
        let snapshot = self.editor.clone();
        let result = f(&mut self.editor);
        self.record(snapshot);
        result
    }

    /// Like [`update`](Workspace::update), but an `Err` rolls the editor
    /// back and leaves the dirty flag and history untouched.
    pub fn try_update<T, E>(
        &mut self,
        f: impl FnOnce(&mut StylesheetEditor) -> Result<T, E>,
    ) -> Result<T, E> {
        let snapshot = self.editor.clone();
        match f(&mut self.editor) {
            Ok(value) => {
                self.record(snapshot);
                Ok(value)
            }
            Err(err) => {
                self.editor = snapshot;
                Err(err)
            }
        }
    }

    /// Applies a command. Only commands that change state are recorded.
    pub fn apply(&mut self, command: Command) -> Result<Applied, EditError> {
        let snapshot = self.editor.clone();
        let applied = self.editor.apply(command)?;
        if applied.changed {
            self.record(snapshot);
        }
        Ok(applied)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Restores the state before the last recorded step.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        self.redo.push(std::mem::replace(&mut self.editor, previous));
        self.dirty = true;
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        self.undo.push_back(std::mem::replace(&mut self.editor, next));
        self.dirty = true;
        true
    }

    /// Validates `draft` against `siblings` and replaces the metadata.
    pub fn edit_meta<'a>(
        &mut self,
        draft: &ComponentMetaDraft,
        siblings: impl IntoIterator<Item = &'a ThemeComponentMeta>,
    ) -> Result<(), WorkspaceError> {
        let meta = draft.validate_among(Some(self.meta.id.as_str()), siblings)?;
        if meta != self.meta {
            tracing::debug!(id = %meta.id, "component metadata changed");
            self.meta = meta;
            self.dirty = true;
        }
        Ok(())
    }

    /// Projects the current stylesheet at the workspace level.
    pub fn view(&self, catalog: &dyn SpecCatalog, tr: &dyn Translations) -> StylesheetView {
        StylesheetView::build(&self.editor, catalog, tr, self.level)
    }

    /// Writes the stylesheet and clears the dirty flag.
    ///
    /// If the stylesheet path changed since loading, the old file is removed.
    pub fn save(&mut self) -> Result<PathBuf, WorkspaceError> {
        let relative = self.meta.stylesheet_path();
        let path = self.dir.join(&relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| WorkspaceError::io(parent, e))?;
        }

        let contents = if self.config.pretty {
            self.editor.to_json()?
        } else {
            self.editor.to_json_compact()?
        };
        fs::write(&path, contents).map_err(|e| WorkspaceError::io(&path, e))?;

        if relative != self.stylesheet_path_on_load {
            let old = self.dir.join(&self.stylesheet_path_on_load);
            match fs::remove_file(&old) {
                Ok(()) => tracing::debug!(path = %old.display(), "removed moved stylesheet"),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(WorkspaceError::io(old, err)),
            }
            self.stylesheet_path_on_load = relative;
        }

        tracing::info!(path = %path.display(), rules = self.editor.len(), "saved stylesheet");
        self.dirty = false;
        Ok(path)
    }

    fn record(&mut self, snapshot: StylesheetEditor) {
        if self.config.undo_limit > 0 {
            if self.undo.len() >= self.config.undo_limit {
                self.undo.pop_front();
            }
            self.undo.push_back(snapshot);
        }
        self.redo.clear();
        self.dirty = true;
    }
}

fn load_stylesheet(path: &Path, config: &EditorConfig) -> StylesheetEditor {
    let fresh = || {
        let mut editor = StylesheetEditor::new();
        editor.set_schema(config.schema.clone());
        editor
    };

    match fs::read_to_string(path) {
        Ok(input) => match StylesheetEditor::from_json(&input) {
            Ok(editor) => editor,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "malformed stylesheet, starting empty");
                fresh()
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no stylesheet yet");
            fresh()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "unreadable stylesheet, starting empty");
            fresh()
        }
    }
}
