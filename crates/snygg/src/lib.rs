//! Snygg - Typed stylesheet model and editing engine for keyboard themes.
//!
//! A snygg stylesheet maps [`Rule`]s (which UI element, in which state) to
//! [`PropertySet`]s (ordered property name to [`Value`] pairs). This crate
//! provides:
//!
//! - A closed value type system with one [`ValueEncoder`] per variant
//! - Rule syntax parsing and canonical printing
//! - A [`StylesheetEditor`] with validated, all-or-nothing edit operations
//! - Level projection: which properties are shown at [`Level::Basic`],
//!   [`Level::Advanced`] or [`Level::Developer`], and under which names
//! - One-hop variable resolution through the `@defines` rule
//! - An order-preserving JSON/YAML codec
//!
//! # Quick Start
//!
//! ```rust
//! use snygg::{Color, Rule, StylesheetEditor, Value};
//!
//! let mut editor = StylesheetEditor::new();
//!
//! // variables live in the @defines rule
//! editor
//!     .add_property(
//!         &Rule::defined_variables(),
//!         "--primary",
//!         Value::SolidColor(Color::from_argb(0xFF4CAF50)),
//!     )
//!     .unwrap();
//!
//! let key: Rule = "key:pressed".parse().unwrap();
//! editor.add_rule(key.clone()).unwrap();
//! editor
//!     .add_property(&key, "background", Value::variable("--primary").unwrap())
//!     .unwrap();
//!
//! let value = editor.get(&key).unwrap().get("background").unwrap();
//! let shown = editor.resolve(value).displayed().unwrap();
//! assert_eq!(shown.encode(), "#4caf50");
//! ```
//!
//! # Failure Model
//!
//! Nothing in this crate panics on bad input. Edit operations return
//! [`EditError`] and leave the stylesheet untouched; decoding returns
//! [`DecodeError`], and [`StylesheetEditor::load_or_default`] degrades to an
//! empty editor instead.
//!
//! Everything the editor holds can be saved and loaded again: property
//! edits check their value with [`Value::validate`] and reject contents whose
//! encoding would not decode, such as `SizeDp(f32::INFINITY)`.

mod error;
mod level;
mod property_set;
mod rule;
mod spec;
mod stylesheet;
mod value;

pub mod projection;
pub mod variables;

pub use error::{DecodeError, EditError, EncodeError, RuleError, ValueError};
pub use level::Level;
pub use property_set::PropertySet;
pub use rule::{
    Rule, RuleBuilder, Selector, ANNOTATION_MARKER, CODES_ATTRIBUTE, DEFINES_ELEMENT,
    MODES_ATTRIBUTE,
};
pub use spec::{PropertySetSpec, PropertySpec, SpecCatalog, StaticCatalog};
pub use stylesheet::{Applied, Command, StylesheetEditor, SCHEMA_KEY};
pub use value::{
    is_variable_name, Color, Shape, ShapeKind, ShapeUnit, Value, ValueEncoder, VARIABLE_PREFIX,
};
pub use variables::{ValuePreview, VariableWarning};
