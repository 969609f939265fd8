//! The stylesheet editor: an ordered mapping from [`Rule`] to [`PropertySet`].
//!
//! # Invariants
//!
//! - Insertion order is meaningful and preserved. Renaming a rule moves it to
//!   the end; overwriting a property keeps its position.
//! - Every editor produced by [`StylesheetEditor::new`], [`Default`] or a
//!   decode path contains exactly one defined-variables rule (`@defines`).
//!   Because that rule is a fixed value and rules are map keys, there can never
//!   be two.
//! - Every operation validates before it mutates: a rejected operation leaves
//!   the editor untouched.
//!
//! # Example
//!
//! ```rust
//! use snygg::{Color, Rule, StylesheetEditor, Value};
//!
//! let mut editor = StylesheetEditor::new();
//! assert_eq!(editor.len(), 1); // @defines
//!
//! let key = Rule::builder("key").pressed().build().unwrap();
//! editor.add_rule(key.clone()).unwrap();
//! editor
//!     .add_property(&key, "background", Value::SolidColor(Color::from_argb(0xFF112233)))
//!     .unwrap();
//!
//! // adding the same rule twice is rejected
//! assert!(editor.add_rule(key.clone()).is_err());
//!
//! let json = editor.to_json().unwrap();
//! let decoded = StylesheetEditor::from_json(&json).unwrap();
//! assert_eq!(decoded, editor);
//! ```

mod codec;
mod command;

pub use codec::SCHEMA_KEY;
pub use command::{Applied, Command};

use indexmap::map::Iter;
use indexmap::IndexMap;

use crate::error::EditError;
use crate::property_set::PropertySet;
use crate::rule::Rule;
use crate::value::Value;

/// Ordered, owning collection of stylesheet rules.
#[derive(Debug, Clone, PartialEq)]
pub struct StylesheetEditor {
    schema: Option<String>,
    rules: IndexMap<Rule, PropertySet>,
}

impl Default for StylesheetEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl StylesheetEditor {
    /// Creates an editor holding only an empty `@defines` rule.
    pub fn new() -> Self {
        Self::from_parts(None, IndexMap::new())
    }

    /// Assembles an editor and restores the defined-variables invariant.
    pub(crate) fn from_parts(schema: Option<String>, rules: IndexMap<Rule, PropertySet>) -> Self {
        let mut editor = StylesheetEditor { schema, rules };
        editor.ensure_defined_variables();
        editor
    }

    /// Inserts an empty `@defines` rule at the front if none exists.
    ///
    /// Returns true if the rule had to be inserted.
    pub fn ensure_defined_variables(&mut self) -> bool {
        let rule = Rule::defined_variables();
        if self.rules.contains_key(&rule) {
            return false;
        }
        self.rules.shift_insert(0, rule, PropertySet::new());
        true
    }

    /// The `$schema` reference carried by the document, if any.
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn set_schema(&mut self, schema: Option<String>) {
        self.schema = schema;
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over rules in insertion order.
    pub fn rules(&self) -> Iter<'_, Rule, PropertySet> {
        self.rules.iter()
    }

    /// Rules in canonical [`Rule`] order rather than insertion order.
    pub fn sorted_rules(&self) -> Vec<(&Rule, &PropertySet)> {
        let mut rules: Vec<_> = self.rules.iter().collect();
        rules.sort_by(|a, b| a.0.cmp(b.0));
        rules
    }

    pub fn get(&self, rule: &Rule) -> Option<&PropertySet> {
        self.rules.get(rule)
    }

    pub fn contains_rule(&self, rule: &Rule) -> bool {
        self.rules.contains_key(rule)
    }

    /// Position of `rule` in insertion order.
    pub fn position(&self, rule: &Rule) -> Option<usize> {
        self.rules.get_index_of(rule)
    }

    /// The variable table, if the `@defines` rule is present.
    pub fn defined_variables(&self) -> Option<&PropertySet> {
        self.rules.get(&Rule::defined_variables())
    }

    /// Returns true if any rule other than `@defines` exists.
    pub fn has_user_rules(&self) -> bool {
        self.rules
            .keys()
            .any(|rule| !rule.is_defined_variables_rule())
    }

    /// Adds a new rule with an empty property set at the end.
    pub fn add_rule(&mut self, rule: Rule) -> Result<Applied, EditError> {
        self.add_or_replace_rule(None, rule)
    }

    /// Renames `old` to `new`, moving its property set to the end.
    pub fn rename_rule(&mut self, old: &Rule, new: Rule) -> Result<Applied, EditError> {
        self.add_or_replace_rule(Some(old), new)
    }

    /// Adds `new`, or renames `old` to `new`.
    ///
    /// - `old == None`: inserts `new` with an empty set. Fails with
    ///   [`EditError::RuleConflict`] if `new` exists.
    /// - `old == Some(new)`: no-op success.
    /// - otherwise: fails with [`EditError::RuleConflict`] if `new` exists, or
    ///   [`EditError::MissingRule`] if `old` does not; else re-inserts the
    ///   property set of `old` under `new`, appended at the end.
    pub fn add_or_replace_rule(
        &mut self,
        old: Option<&Rule>,
        new: Rule,
    ) -> Result<Applied, EditError> {
        if old == Some(&new) {
            return Ok(Applied::unchanged(self.position(&new)));
        }
        if self.rules.contains_key(&new) {
            return Err(EditError::RuleConflict { rule: new });
        }

        let set = match old {
            None => PropertySet::new(),
            Some(old) => self
                .rules
                .shift_remove(old)
                .ok_or_else(|| EditError::MissingRule { rule: old.clone() })?,
        };

        let (index, _) = self.rules.insert_full(new, set);
        Ok(Applied::changed(Some(index)))
    }

    /// Removes a rule and its property set. Returns whether it existed.
    ///
    /// Removing `@defines` is allowed; [`ensure_defined_variables`] or the
    /// next load puts an empty one back.
    ///
    /// [`ensure_defined_variables`]: StylesheetEditor::ensure_defined_variables
    pub fn remove_rule(&mut self, rule: &Rule) -> bool {
        self.rules.shift_remove(rule).is_some()
    }

    /// Adds a property that must not exist yet.
    ///
    /// Fails with [`EditError::InvalidValue`] if `value` would not decode
    /// after saving.
    pub fn add_property(
        &mut self,
        rule: &Rule,
        name: impl Into<String>,
        value: Value,
    ) -> Result<(), EditError> {
        let name = check_value(rule, name.into(), &value)?;
        let set = self.property_set_mut(rule)?;
        if set.contains(&name) {
            return Err(EditError::PropertyConflict {
                rule: rule.clone(),
                name,
            });
        }
        set.set(name, value);
        Ok(())
    }

    /// Inserts or overwrites a property, returning the previous value.
    ///
    /// Overwritten entries keep their position; new entries are appended.
    /// Values are checked as in [`add_property`](StylesheetEditor::add_property).
    pub fn set_property(
        &mut self,
        rule: &Rule,
        name: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, EditError> {
        let name = check_value(rule, name.into(), &value)?;
        let set = self.property_set_mut(rule)?;
        Ok(set.set(name, value))
    }

    /// Removes a property. Returns whether it existed.
    pub fn remove_property(&mut self, rule: &Rule, name: &str) -> bool {
        self.rules
            .get_mut(rule)
            .and_then(|set| set.remove(name))
            .is_some()
    }

    fn property_set_mut(&mut self, rule: &Rule) -> Result<&mut PropertySet, EditError> {
        self.rules
            .get_mut(rule)
            .ok_or_else(|| EditError::MissingRule { rule: rule.clone() })
    }
}

fn check_value(rule: &Rule, name: String, value: &Value) -> Result<String, EditError> {
    match value.validate() {
        Ok(()) => Ok(name),
        Err(source) => Err(EditError::InvalidValue {
            rule: rule.clone(),
            name,
            source,
        }),
    }
}
