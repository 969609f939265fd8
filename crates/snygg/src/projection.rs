//! Level projection: how rules and properties are named and filtered for display.
//!
//! Everything here is a pure function of the stylesheet state, the active
//! [`Level`] and a [`Translations`] table. At [`Level::Developer`] raw internal
//! names are shown; below that, translations are used when available and raw
//! names otherwise.
//!
//! # Example
//!
//! ```rust
//! use snygg::projection::{self, NoTranslations};
//! use snygg::{Level, Rule};
//!
//! let rule: Rule = "key[code=10|32]:pressed".parse().unwrap();
//! assert_eq!(projection::element_name(&rule, Level::Basic, &NoTranslations), "key");
//! assert_eq!(projection::attribute_line("codes", rule.codes()), "codes = [10, 32]");
//! ```

use crate::level::Level;
use crate::property_set::PropertySet;
use crate::rule::{Rule, Selector};
use crate::spec::{PropertySetSpec, SpecCatalog};
use crate::value::{Value, ValueEncoder};

/// Placeholder shown for a property whose name has not been picked yet.
pub const DEFAULT_PLACEHOLDER: &str = "- select -";

/// Display strings supplied by the host. Every lookup defaults to "none".
pub trait Translations {
    /// Display name for a qualified element such as `key` or `@defines`.
    fn element(&self, _element: &str) -> Option<&str> {
        None
    }

    fn selector(&self, _selector: Selector) -> Option<&str> {
        None
    }

    fn property(&self, _name: &str) -> Option<&str> {
        None
    }

    fn encoder(&self, _encoder: ValueEncoder) -> Option<&str> {
        None
    }

    fn placeholder(&self) -> Option<&str> {
        None
    }

    /// Explanation shown under the `@defines` rule.
    fn defined_variables_description(&self) -> Option<&str> {
        None
    }
}

/// Translation table with no entries; every name renders raw.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Translations for NoTranslations {}

/// Display name of a rule's element.
pub fn element_name(rule: &Rule, level: Level, tr: &dyn Translations) -> String {
    let raw = rule.qualified_element();
    if level == Level::Developer {
        return raw;
    }
    tr.element(&raw).map(str::to_string).unwrap_or(raw)
}

pub fn selector_name(selector: Selector, level: Level, tr: &dyn Translations) -> String {
    let raw = format!(":{}", selector.as_str());
    if level == Level::Developer {
        return raw;
    }
    tr.selector(selector).map(str::to_string).unwrap_or(raw)
}

/// Display names of every selector set on `rule`, in canonical order.
pub fn selector_names(rule: &Rule, level: Level, tr: &dyn Translations) -> Vec<String> {
    rule.selectors()
        .map(|selector| selector_name(selector, level, tr))
        .collect()
}

/// Display name of a property. A blank name renders as the placeholder.
pub fn property_name(name: &str, level: Level, tr: &dyn Translations) -> String {
    if name.trim().is_empty() {
        return tr.placeholder().unwrap_or(DEFAULT_PLACEHOLDER).to_string();
    }
    if level == Level::Developer {
        return name.to_string();
    }
    tr.property(name).unwrap_or(name).to_string()
}

/// Display form of a value: its canonical encoding at every level.
pub fn property_value(value: &Value, _level: Level) -> String {
    value.encode()
}

pub fn encoder_name(encoder: ValueEncoder, tr: &dyn Translations) -> String {
    tr.encoder(encoder)
        .unwrap_or_else(|| encoder.category_name())
        .to_string()
}

/// Formats an attribute list as `label = [a, b]`.
pub fn attribute_line(label: &str, values: &[i32]) -> String {
    let joined: Vec<String> = values.iter().map(i32::to_string).collect();
    format!("{} = [{}]", label, joined.join(", "))
}

/// Description line shown under a rule header, if any.
pub fn rule_description(rule: &Rule, tr: &dyn Translations) -> Option<String> {
    if !rule.is_defined_variables_rule() {
        return None;
    }
    tr.defined_variables_description().map(str::to_string)
}

/// Returns true if property `name` of `rule` is shown at `level`.
///
/// Properties of the `@defines` rule are always shown. Elsewhere, a property
/// is shown when its declared level is at most `level`; properties the
/// property set spec does not declare are hidden.
pub fn is_property_visible(
    rule: &Rule,
    name: &str,
    spec: Option<&PropertySetSpec>,
    level: Level,
) -> bool {
    if rule.is_defined_variables_rule() {
        return true;
    }
    spec.and_then(|spec| spec.property_spec(name))
        .is_some_and(|property| property.level() <= level)
}

/// The properties of `set` visible at `level`, in set order.
pub fn visible_properties<'a>(
    rule: &'a Rule,
    set: &'a PropertySet,
    catalog: &'a dyn SpecCatalog,
    level: Level,
) -> impl Iterator<Item = (&'a String, &'a Value)> + 'a {
    let spec = catalog.property_set_spec(rule.element());
    set.iter()
        .filter(move |(name, _)| is_property_visible(rule, name, spec, level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{PropertySpec, StaticCatalog};
    use crate::value::Color;

    struct Fixture;

    impl Translations for Fixture {
        fn element(&self, element: &str) -> Option<&str> {
            match element {
                "key" => Some("Key"),
                "@defines" => Some("Variables"),
                _ => None,
            }
        }

        fn selector(&self, selector: Selector) -> Option<&str> {
            match selector {
                Selector::Pressed => Some("Pressed"),
                _ => None,
            }
        }

        fn property(&self, name: &str) -> Option<&str> {
            (name == "background").then_some("Background")
        }

        fn placeholder(&self) -> Option<&str> {
            Some("Pick one")
        }

        fn defined_variables_description(&self) -> Option<&str> {
            Some("Shared values")
        }
    }

    fn catalog() -> StaticCatalog {
        StaticCatalog::new().with(
            "key",
            PropertySetSpec::new()
                .property(
                    "background",
                    PropertySpec::new(Level::Basic, [ValueEncoder::SolidColor]),
                )
                .property("width", PropertySpec::new(Level::Developer, [ValueEncoder::DpSize])),
        )
    }

    // =========================================================================
    // Names
    // =========================================================================

    #[test]
    fn test_element_name_by_level() {
        let rule = Rule::new("key").unwrap();
        assert_eq!(element_name(&rule, Level::Basic, &Fixture), "Key");
        assert_eq!(element_name(&rule, Level::Advanced, &Fixture), "Key");
        assert_eq!(element_name(&rule, Level::Developer, &Fixture), "key");
    }

    #[test]
    fn test_element_name_falls_back_to_raw() {
        let rule = Rule::new("smartbar").unwrap();
        assert_eq!(element_name(&rule, Level::Basic, &Fixture), "smartbar");
        let defines = Rule::defined_variables();
        assert_eq!(element_name(&defines, Level::Basic, &NoTranslations), "@defines");
        assert_eq!(element_name(&defines, Level::Basic, &Fixture), "Variables");
    }

    #[test]
    fn test_selector_names() {
        let rule: Rule = "key:pressed:disabled".parse().unwrap();
        assert_eq!(
            selector_names(&rule, Level::Basic, &Fixture),
            vec!["Pressed", ":disabled"]
        );
        assert_eq!(
            selector_names(&rule, Level::Developer, &Fixture),
            vec![":pressed", ":disabled"]
        );
    }

    #[test]
    fn test_property_name() {
        assert_eq!(property_name("background", Level::Basic, &Fixture), "Background");
        assert_eq!(property_name("background", Level::Developer, &Fixture), "background");
        assert_eq!(property_name("width", Level::Basic, &Fixture), "width");
    }

    #[test]
    fn test_blank_property_name_uses_placeholder() {
        assert_eq!(property_name("", Level::Basic, &Fixture), "Pick one");
        assert_eq!(property_name(" ", Level::Developer, &NoTranslations), DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_property_value_is_encoding() {
        let value = Value::SolidColor(Color::from_argb(0xFF112233));
        for level in Level::ALL {
            assert_eq!(property_value(&value, level), "#112233");
        }
    }

    #[test]
    fn test_encoder_name_falls_back_to_category() {
        assert_eq!(encoder_name(ValueEncoder::DpSize, &NoTranslations), "Size (dp)");
    }

    #[test]
    fn test_attribute_line() {
        assert_eq!(attribute_line("codes", &[10, 32]), "codes = [10, 32]");
        assert_eq!(attribute_line("modes", &[]), "modes = []");
    }

    #[test]
    fn test_rule_description() {
        assert_eq!(
            rule_description(&Rule::defined_variables(), &Fixture).as_deref(),
            Some("Shared values")
        );
        assert!(rule_description(&Rule::new("key").unwrap(), &Fixture).is_none());
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    #[test]
    fn test_developer_property_hidden_below_developer() {
        let catalog = catalog();
        let spec = catalog.property_set_spec("key");
        let rule = Rule::new("key").unwrap();
        assert!(!is_property_visible(&rule, "width", spec, Level::Basic));
        assert!(!is_property_visible(&rule, "width", spec, Level::Advanced));
        assert!(is_property_visible(&rule, "width", spec, Level::Developer));
        assert!(is_property_visible(&rule, "background", spec, Level::Basic));
    }

    #[test]
    fn test_undeclared_property_hidden() {
        let catalog = catalog();
        let rule = Rule::new("key").unwrap();
        let spec = catalog.property_set_spec("key");
        assert!(!is_property_visible(&rule, "height", spec, Level::Developer));
        assert!(!is_property_visible(&rule, "background", None, Level::Developer));
    }

    #[test]
    fn test_defines_always_visible() {
        let rule = Rule::defined_variables();
        for level in Level::ALL {
            assert!(is_property_visible(&rule, "--primary", None, level));
        }
    }

    #[test]
    fn test_visible_properties_keeps_order() {
        let catalog = catalog();
        let rule = Rule::new("key").unwrap();
        let set = PropertySet::new()
            .with("width", Value::SizeDp(2.0))
            .with("background", Value::SolidColor(Color::BLACK));

        let basic: Vec<&str> = visible_properties(&rule, &set, &catalog, Level::Basic)
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(basic, vec!["background"]);

        let developer: Vec<&str> = visible_properties(&rule, &set, &catalog, Level::Developer)
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(developer, vec!["width", "background"]);
    }
}
