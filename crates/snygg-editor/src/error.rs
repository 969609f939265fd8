//! Error types for the editor workspace.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A theme component metadata field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaValidationError {
    #[error("component id '{id}' must start with a lowercase letter and contain only a-z, 0-9 and '_'")]
    InvalidId { id: String },

    #[error("component label must not be blank")]
    BlankLabel,

    #[error("component must list at least one author")]
    NoAuthors,

    #[error("stylesheet path '{path}' must be a relative path ending in .json")]
    InvalidStylesheetPath { path: String },
}

/// Errors raised by [`Workspace`](crate::Workspace) and config loading.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Encode(#[from] snygg::EncodeError),

    #[error("invalid component metadata: {0}")]
    InvalidMeta(#[from] MetaValidationError),

    #[error("a theme component with id '{id}' already exists")]
    DuplicateComponentId { id: String },

    #[error("failed to parse config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("failed to parse extension manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("no theme component with id '{id}'")]
    UnknownComponent { id: String },
}

impl WorkspaceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WorkspaceError::Io {
            path: path.into(),
            source,
        }
    }
}
