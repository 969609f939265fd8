//! Property set specs: which properties are legal for an element.
//!
//! The catalog itself is supplied by the host application through the
//! [`SpecCatalog`] trait. This crate only queries it; it never defines or
//! validates catalog contents.
//!
//! # Example
//!
//! ```rust
//! use snygg::{Level, PropertySetSpec, PropertySpec, SpecCatalog, StaticCatalog, ValueEncoder};
//!
//! let catalog = StaticCatalog::new().with(
//!     "key",
//!     PropertySetSpec::new()
//!         .property("background", PropertySpec::new(Level::Basic, [ValueEncoder::SolidColor]))
//!         .property("width", PropertySpec::new(Level::Developer, [ValueEncoder::DpSize])),
//! );
//!
//! let spec = catalog.property_set_spec("key").unwrap();
//! assert_eq!(spec.property_spec("width").unwrap().level(), Level::Developer);
//! assert!(catalog.property_set_spec("unknown").is_none());
//! ```

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::level::Level;
use crate::value::ValueEncoder;

/// Declaration of a single property: its minimum level and accepted encoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    level: Level,
    encoders: Vec<ValueEncoder>,
}

impl PropertySpec {
    pub fn new(level: Level, encoders: impl IntoIterator<Item = ValueEncoder>) -> Self {
        PropertySpec {
            level,
            encoders: encoders.into_iter().collect(),
        }
    }

    /// Minimum level at which the property is shown.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Encoders a value of this property may use, in picker order.
    pub fn encoders(&self) -> &[ValueEncoder] {
        &self.encoders
    }

    pub fn supports(&self, encoder: ValueEncoder) -> bool {
        self.encoders.contains(&encoder)
    }
}

/// The properties legal for one element.
///
/// Exact names are looked up first; names not declared exactly can match a
/// prefix entry (used for `--*` variables).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySetSpec {
    properties: IndexMap<String, PropertySpec>,
    prefixed: Vec<(String, PropertySpec)>,
}

impl PropertySetSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a property by exact name.
    pub fn property(mut self, name: impl Into<String>, spec: PropertySpec) -> Self {
        self.properties.insert(name.into(), spec);
        self
    }

    /// Declares every property whose name starts with `prefix`.
    pub fn prefixed(mut self, prefix: impl Into<String>, spec: PropertySpec) -> Self {
        self.prefixed.push((prefix.into(), spec));
        self
    }

    pub fn property_spec(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.get(name).or_else(|| {
            self.prefixed
                .iter()
                .find(|(prefix, _)| name.starts_with(prefix.as_str()))
                .map(|(_, spec)| spec)
        })
    }

    /// Exactly declared property names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Declared properties visible at `level`.
    pub fn names_at(&self, level: Level) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(move |(_, spec)| spec.level <= level)
            .map(|(name, _)| name.as_str())
    }

    /// Returns true if `name` is declared and accepts `encoder`.
    pub fn supports(&self, name: &str, encoder: ValueEncoder) -> bool {
        self.property_spec(name)
            .is_some_and(|spec| spec.supports(encoder))
    }
}

/// Read-only catalog of property set specs, keyed by element name.
pub trait SpecCatalog {
    fn property_set_spec(&self, element: &str) -> Option<&PropertySetSpec>;
}

/// In-memory [`SpecCatalog`].
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    specs: HashMap<String, PropertySetSpec>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, element: impl Into<String>, spec: PropertySetSpec) -> Self {
        self.insert(element, spec);
        self
    }

    pub fn insert(&mut self, element: impl Into<String>, spec: PropertySetSpec) {
        self.specs.insert(element.into(), spec);
    }

    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }
}

impl SpecCatalog for StaticCatalog {
    fn property_set_spec(&self, element: &str) -> Option<&PropertySetSpec> {
        self.specs.get(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_spec() -> PropertySetSpec {
        PropertySetSpec::new()
            .property(
                "background",
                PropertySpec::new(
                    Level::Basic,
                    [ValueEncoder::SolidColor, ValueEncoder::DefinedVariable],
                ),
            )
            .property("shape", PropertySpec::new(Level::Advanced, [ValueEncoder::RectangleShape]))
            .property("width", PropertySpec::new(Level::Developer, [ValueEncoder::DpSize]))
            .prefixed("--", PropertySpec::new(Level::Basic, [ValueEncoder::SolidColor]))
    }

    #[test]
    fn test_exact_lookup() {
        let spec = key_spec();
        assert_eq!(spec.property_spec("shape").unwrap().level(), Level::Advanced);
        assert!(spec.property_spec("height").is_none());
    }

    #[test]
    fn test_prefixed_lookup() {
        let spec = key_spec();
        assert_eq!(spec.property_spec("--primary").unwrap().level(), Level::Basic);
    }

    #[test]
    fn test_names_at_level() {
        let spec = key_spec();
        let basic: Vec<&str> = spec.names_at(Level::Basic).collect();
        assert_eq!(basic, vec!["background"]);
        let all: Vec<&str> = spec.names_at(Level::Developer).collect();
        assert_eq!(all, vec!["background", "shape", "width"]);
    }

    #[test]
    fn test_supports() {
        let spec = key_spec();
        assert!(spec.supports("background", ValueEncoder::DefinedVariable));
        assert!(!spec.supports("background", ValueEncoder::DpSize));
        assert!(!spec.supports("height", ValueEncoder::DpSize));
    }

    #[test]
    fn test_static_catalog() {
        let catalog = StaticCatalog::new().with("key", key_spec());
        assert!(catalog.property_set_spec("key").is_some());
        assert!(catalog.property_set_spec("keyboard").is_none());
        assert_eq!(catalog.elements().count(), 1);
    }
}
