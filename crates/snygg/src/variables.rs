//! Variable indirection.
//!
//! A [`Value::VariableReference`] names an entry of the `@defines` rule.
//! Resolution follows exactly one hop: a variable whose value is itself a
//! reference resolves to that reference, not further. [`check_variables`]
//! reports such chains so hosts can surface them.
//!
//! [`check_variables`]: StylesheetEditor::check_variables

use std::fmt;

use crate::property_set::PropertySet;
use crate::rule::Rule;
use crate::stylesheet::StylesheetEditor;
use crate::value::{is_variable_name, Value};

/// How a value appears after one step of variable resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValuePreview<'a> {
    /// Not a reference; shown as-is.
    Direct(&'a Value),
    /// A reference to a variable that is not defined.
    Unresolved { key: &'a str },
    /// A reference and the value it points at.
    Linked { key: &'a str, target: &'a Value },
}

impl<'a> ValuePreview<'a> {
    /// Number of indirection hops shown: 0 or 1.
    pub fn depth(&self) -> usize {
        match self {
            ValuePreview::Direct(_) => 0,
            ValuePreview::Unresolved { .. } | ValuePreview::Linked { .. } => 1,
        }
    }

    /// The value that should be rendered, if one is known.
    pub fn displayed(&self) -> Option<&'a Value> {
        match *self {
            ValuePreview::Direct(value) => Some(value),
            ValuePreview::Linked { target, .. } => Some(target),
            ValuePreview::Unresolved { .. } => None,
        }
    }
}

/// Resolves `value` against a variable table, following at most one hop.
pub fn resolve<'a>(value: &'a Value, variables: Option<&'a PropertySet>) -> ValuePreview<'a> {
    let Some(key) = value.variable_key() else {
        return ValuePreview::Direct(value);
    };
    match variables.and_then(|vars| vars.get(key)) {
        Some(target) => ValuePreview::Linked { key, target },
        None => ValuePreview::Unresolved { key },
    }
}

/// A problem found by [`StylesheetEditor::check_variables`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableWarning {
    /// A rule references a variable that `@defines` does not declare.
    UnresolvedReference {
        rule: Rule,
        property: String,
        key: String,
    },
    /// A variable's value is itself a reference; it will not be followed.
    NestedReference { variable: String, target: String },
    /// A `@defines` entry whose name lacks the `--` prefix.
    InvalidVariableName { name: String },
}

impl fmt::Display for VariableWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableWarning::UnresolvedReference {
                rule,
                property,
                key,
            } => write!(
                f,
                "{} {{ {} }} references undefined variable '{}'",
                rule, property, key
            ),
            VariableWarning::NestedReference { variable, target } => write!(
                f,
                "variable '{}' refers to '{}', which is not followed",
                variable, target
            ),
            VariableWarning::InvalidVariableName { name } => {
                write!(f, "'{}' is not a valid variable name", name)
            }
        }
    }
}

impl StylesheetEditor {
    /// Resolves `value` against this stylesheet's `@defines` rule.
    pub fn resolve<'a>(&'a self, value: &'a Value) -> ValuePreview<'a> {
        resolve(value, self.defined_variables())
    }

    /// Lists variable problems, in stylesheet order.
    pub fn check_variables(&self) -> Vec<VariableWarning> {
        let mut warnings = Vec::new();
        let variables = self.defined_variables();

        if let Some(variables) = variables {
            for (name, value) in variables {
                if !is_variable_name(name) {
                    warnings.push(VariableWarning::InvalidVariableName { name: name.clone() });
                }
                if let Some(target) = value.variable_key() {
                    warnings.push(VariableWarning::NestedReference {
                        variable: name.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }

        for (rule, set) in self.rules() {
            if rule.is_defined_variables_rule() {
                continue;
            }
            for (property, value) in set {
                if let ValuePreview::Unresolved { key } = resolve(value, variables) {
                    warnings.push(VariableWarning::UnresolvedReference {
                        rule: rule.clone(),
                        property: property.clone(),
                        key: key.to_string(),
                    });
                }
            }
        }

        if !warnings.is_empty() {
            tracing::debug!(count = warnings.len(), "stylesheet has variable warnings");
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Color;

    fn green() -> Value {
        Value::SolidColor(Color::from_argb(0xFF4CAF50))
    }

    fn variables() -> PropertySet {
        PropertySet::new()
            .with("--primary", green())
            .with("--alias", Value::variable("--primary").unwrap())
    }

    // =========================================================================
    // resolve
    // =========================================================================

    #[test]
    fn test_direct_value() {
        let value = Value::SizeDp(4.0);
        let preview = resolve(&value, None);
        assert_eq!(preview, ValuePreview::Direct(&value));
        assert_eq!(preview.depth(), 0);
        assert_eq!(preview.displayed(), Some(&value));
    }

    #[test]
    fn test_linked_value() {
        let vars = variables();
        let value = Value::variable("--primary").unwrap();
        let preview = resolve(&value, Some(&vars));
        assert_eq!(
            preview,
            ValuePreview::Linked {
                key: "--primary",
                target: &green()
            }
        );
        assert_eq!(preview.depth(), 1);
    }

    #[test]
    fn test_unresolved_value() {
        let vars = variables();
        let value = Value::variable("--missing").unwrap();
        assert_eq!(
            resolve(&value, Some(&vars)),
            ValuePreview::Unresolved { key: "--missing" }
        );
        assert_eq!(
            resolve(&value, None),
            ValuePreview::Unresolved { key: "--missing" }
        );
        assert_eq!(resolve(&value, None).displayed(), None);
    }

    #[test]
    fn test_resolution_stops_after_one_hop() {
        let vars = variables();
        let value = Value::variable("--alias").unwrap();
        let preview = resolve(&value, Some(&vars));
        assert_eq!(
            preview,
            ValuePreview::Linked {
                key: "--alias",
                target: &Value::variable("--primary").unwrap()
            }
        );
        assert_eq!(preview.depth(), 1);
    }

    // =========================================================================
    // check_variables
    // =========================================================================

    #[test]
    fn test_check_variables() {
        let mut editor = StylesheetEditor::new();
        let defines = Rule::defined_variables();
        editor.add_property(&defines, "--primary", green()).unwrap();
        editor
            .add_property(&defines, "--alias", Value::variable("--primary").unwrap())
            .unwrap();
        editor.add_property(&defines, "accent", green()).unwrap();

        let key = Rule::new("key").unwrap();
        editor.add_rule(key.clone()).unwrap();
        editor
            .add_property(&key, "background", Value::variable("--primary").unwrap())
            .unwrap();
        editor
            .add_property(&key, "foreground", Value::variable("--missing").unwrap())
            .unwrap();

        assert_eq!(
            editor.check_variables(),
            vec![
                VariableWarning::NestedReference {
                    variable: "--alias".into(),
                    target: "--primary".into()
                },
                VariableWarning::InvalidVariableName {
                    name: "accent".into()
                },
                VariableWarning::UnresolvedReference {
                    rule: key,
                    property: "foreground".into(),
                    key: "--missing".into()
                },
            ]
        );
    }

    #[test]
    fn test_clean_stylesheet_has_no_warnings() {
        let editor = StylesheetEditor::new();
        assert!(editor.check_variables().is_empty());
    }

    #[test]
    fn test_warning_display() {
        let warning = VariableWarning::UnresolvedReference {
            rule: Rule::new("key").unwrap(),
            property: "background".into(),
            key: "--x".into(),
        };
        assert_eq!(
            warning.to_string(),
            "key { background } references undefined variable '--x'"
        );
    }
}
