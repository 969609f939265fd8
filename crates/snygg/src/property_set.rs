//! Ordered property sets.

use indexmap::map::Iter;
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::Value;

/// Ordered mapping from property name to [`Value`].
///
/// Overwriting an existing name keeps its position; new names are appended.
/// Removal preserves the relative order of the remaining entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySet {
    properties: IndexMap<String, Value>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for constructing sets in code and tests.
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Position of `name` among the properties.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.properties.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.properties.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Inserts or overwrites a property, returning the previous value.
    pub(crate) fn set(&mut self, name: String, value: Value) -> Option<Value> {
        self.properties.insert(name, value)
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.shift_remove(name)
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, Value)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        PropertySet {
            properties: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl Serialize for PropertySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for (name, value) in &self.properties {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropertySetVisitor;

        impl<'de> Visitor<'de> for PropertySetVisitor {
            type Value = PropertySet;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a mapping of property names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PropertySet, A::Error> {
                let mut properties = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, Value>()? {
                    properties.insert(name, value);
                }
                Ok(PropertySet { properties })
            }
        }

        deserializer.deserialize_map(PropertySetVisitor)
    }
}
