//! Error types for the snygg crate.
//!
//! None of these failures is fatal:
//!
//! - [`DecodeError`]: malformed persisted input (values, rules, documents)
//! - [`ValueError`]: a value was built with contents it cannot be written back with
//! - [`RuleError`]: a rule could not be constructed from its parts
//! - [`EditError`]: an edit operation was rejected, leaving the stylesheet untouched
//! - [`EncodeError`]: a value or stylesheet could not be written

use thiserror::Error;

use crate::rule::Rule;

/// Errors raised while decoding values, rules or whole stylesheets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No encoder recognised the input.
    #[error("unrecognised property value '{input}'")]
    UnknownValue { input: String },

    /// The input has the shape of a known encoding but carries bad data.
    #[error("invalid {encoder} value '{input}': {reason}")]
    InvalidValue {
        encoder: &'static str,
        input: String,
        reason: String,
    },

    /// A rule selector string could not be parsed.
    #[error("invalid rule '{input}': {reason}")]
    InvalidRule { input: String, reason: String },

    /// The same rule appeared twice in one document.
    #[error("duplicate rule '{rule}'")]
    DuplicateRule { rule: String },

    /// The same property name appeared twice in one rule.
    #[error("duplicate property '{name}' in rule '{rule}'")]
    DuplicateProperty { rule: String, name: String },

    /// The document itself is not valid JSON/YAML or has the wrong shape.
    #[error("failed to parse {format} stylesheet: {message}")]
    Syntax {
        format: &'static str,
        message: String,
    },
}

/// Value contents outside the range its encoding can represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("number must be finite")]
    NotFinite,

    #[error("corner radius must not be negative")]
    NegativeRadius,

    #[error("corner radius must not exceed 100%")]
    RadiusOverflow,

    #[error("'{key}' is not a variable name; names start with '--'")]
    InvalidVariableName { key: String },
}

/// Errors raised when building a [`Rule`] from its parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("rule element must not be empty")]
    EmptyElement,

    #[error("rule element '{0}' may only contain ASCII letters, digits and '-'")]
    InvalidElement(String),

    #[error("the defined variables rule cannot carry selectors or attributes")]
    InvalidDefinedVariables,
}

/// Errors raised by stylesheet edit operations.
///
/// Every variant guarantees that the stylesheet was left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The target rule of an add or rename already exists.
    #[error("rule '{rule}' already exists")]
    RuleConflict { rule: Rule },

    /// A property was added under a name that is already present.
    #[error("property '{name}' already exists in rule '{rule}'")]
    PropertyConflict { rule: Rule, name: String },

    /// The operation addressed a rule that is not in the stylesheet.
    #[error("rule '{rule}' does not exist")]
    MissingRule { rule: Rule },

    /// A property value would not read back after saving.
    #[error("invalid value for property '{name}' in rule '{rule}': {source}")]
    InvalidValue {
        rule: Rule,
        name: String,
        source: ValueError,
    },
}

/// Failure while writing a value or a stylesheet.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// An encoder was asked to serialize a value that belongs to another encoder.
    #[error("{encoder} cannot encode a {actual} value")]
    EncoderMismatch {
        encoder: &'static str,
        actual: &'static str,
    },

    #[error("failed to write JSON stylesheet: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write YAML stylesheet: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
