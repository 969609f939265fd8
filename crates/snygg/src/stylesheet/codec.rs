//! Persisted stylesheet format.
//!
//! A stylesheet document is a mapping from rule syntax to a mapping of
//! property names to encoded values. An optional `$schema` entry is kept and
//! written first. Document order is preserved in both directions.
//!
//! ```json
//! {
//!   "$schema": "https://schemas.florisboard.org/snygg/v2/stylesheet",
//!   "@defines": { "--primary": "#4caf50" },
//!   "key:pressed": { "background": "var(--primary)", "shape": "rounded-corner(8dp)" }
//! }
//! ```
//!
//! Keys are never merged: a rule appearing twice (including rules that differ
//! only in attribute or selector order) is a [`DecodeError::DuplicateRule`], a
//! property name appearing twice in one rule is a
//! [`DecodeError::DuplicateProperty`], and a second `$schema` is a syntax error.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::StylesheetEditor;
use crate::error::{DecodeError, EncodeError};
use crate::property_set::PropertySet;
use crate::rule::Rule;
use crate::value::Value;

/// Document key holding the schema reference.
pub const SCHEMA_KEY: &str = "$schema";

/// Mapping entries in document order, repeated keys included.
struct Entries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Schema(String),
    Properties(Entries<String>),
}

#[derive(Deserialize)]
#[serde(transparent)]
struct RawStylesheet(Entries<RawEntry>);

impl RawStylesheet {
    fn into_editor(self) -> Result<StylesheetEditor, DecodeError> {
        let RawStylesheet(Entries(entries)) = self;
        let mut schema = None;
        let mut rules: IndexMap<Rule, PropertySet> = IndexMap::with_capacity(entries.len());

        for (key, entry) in entries {
            if key == SCHEMA_KEY {
                let RawEntry::Schema(reference) = entry else {
                    return Err(schema_error(format!("'{}' must be a string", SCHEMA_KEY)));
                };
                if schema.replace(reference).is_some() {
                    return Err(schema_error(format!("duplicate '{}'", SCHEMA_KEY)));
                }
                continue;
            }

            let rule: Rule = key.parse()?;
            let RawEntry::Properties(Entries(properties)) = entry else {
                return Err(DecodeError::InvalidRule {
                    input: key,
                    reason: "expected a mapping of property names to values".to_string(),
                });
            };

            let mut set = PropertySet::new();
            for (name, encoded) in properties {
                if set.contains(&name) {
                    return Err(DecodeError::DuplicateProperty { rule: key, name });
                }
                set.set(name, Value::decode(&encoded)?);
            }

            if rules.contains_key(&rule) {
                return Err(DecodeError::DuplicateRule { rule: key });
            }
            rules.insert(rule, set);
        }

        Ok(StylesheetEditor::from_parts(schema, rules))
    }
}

fn schema_error(message: String) -> DecodeError {
    DecodeError::Syntax {
        format: "stylesheet",
        message,
    }
}

impl Serialize for StylesheetEditor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.rules.len() + usize::from(self.schema.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(schema) = &self.schema {
            map.serialize_entry(SCHEMA_KEY, schema)?;
        }
        for (rule, set) in &self.rules {
            map.serialize_entry(rule, set)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StylesheetEditor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawStylesheet::deserialize(deserializer)?
            .into_editor()
            .map_err(serde::de::Error::custom)
    }
}

impl StylesheetEditor {
    /// Parses a JSON stylesheet document.
    ///
    /// The result always contains the `@defines` rule.
    pub fn from_json(input: &str) -> Result<Self, DecodeError> {
        let raw: RawStylesheet =
            serde_json::from_str(input).map_err(|e| DecodeError::Syntax {
                format: "JSON",
                message: e.to_string(),
            })?;
        raw.into_editor()
    }

    /// Parses a YAML stylesheet document.
    pub fn from_yaml(input: &str) -> Result<Self, DecodeError> {
        let raw: RawStylesheet =
            serde_yaml::from_str(input).map_err(|e| DecodeError::Syntax {
                format: "YAML",
                message: e.to_string(),
            })?;
        raw.into_editor()
    }

    /// Writes the stylesheet as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the stylesheet as compact JSON.
    pub fn to_json_compact(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_yaml(&self) -> Result<String, EncodeError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parses a JSON document, falling back to a fresh editor when the input
    /// is malformed.
    pub fn load_or_default(input: &str) -> Self {
        match Self::from_json(input) {
            Ok(editor) => editor,
            Err(err) => {
                tracing::warn!(%err, "discarding malformed stylesheet");
                Self::new()
            }
        }
    }
}
