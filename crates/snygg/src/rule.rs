//! Rules: the match keys of a stylesheet.
//!
//! A [`Rule`] identifies which UI element a property set applies to, and in
//! which interaction state. Rules are immutable value objects: editing a rule
//! means replacing it with a new one.
//!
//! # Syntax
//!
//! ```text
//! [@]element[code=10|32][mode=0]:pressed:focus:disabled
//! ```
//!
//! - `@` marks an annotation rule (only `@defines` is meaningful today)
//! - `element` is made of ASCII letters, digits and `-`
//! - `[code=..]` / `[mode=..]` list integer attributes, separated by `|`
//! - `:pressed`, `:focus`, `:disabled` are selector flags
//!
//! Attribute lists are stored sorted and de-duplicated, and selectors have a
//! fixed order, so `key:focus:pressed` and `key:pressed:focus` are the same
//! rule and both print as `key:pressed:focus`.
//!
//! # Example
//!
//! ```rust
//! use snygg::Rule;
//!
//! let rule: Rule = "key[code=32|10]:pressed".parse().unwrap();
//! assert_eq!(rule.element(), "key");
//! assert_eq!(rule.codes(), &[10, 32]);
//! assert!(rule.is_pressed());
//! assert_eq!(rule.to_string(), "key[code=10|32]:pressed");
//!
//! let built = Rule::builder("key").codes([10, 32]).pressed().build().unwrap();
//! assert_eq!(built, rule);
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DecodeError, RuleError};

/// Prefix marking an annotation rule.
pub const ANNOTATION_MARKER: char = '@';
/// Element name of the defined-variables rule.
pub const DEFINES_ELEMENT: &str = "defines";
/// Attribute name for key codes.
pub const CODES_ATTRIBUTE: &str = "code";
/// Attribute name for input modes.
pub const MODES_ATTRIBUTE: &str = "mode";

static RULE_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(@?)([A-Za-z0-9-]+)((?:\[(?:code|mode)=[+-]?[0-9]+(?:\|[+-]?[0-9]+)*\])*)((?::(?:pressed|focus|disabled))*)$",
    )
    .expect("rule syntax pattern is valid")
});

static RULE_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[(code|mode)=([^\]]+)\]").expect("rule attribute pattern is valid")
});

/// Interaction state selectors a rule can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Selector {
    Pressed,
    Focus,
    Disabled,
}

impl Selector {
    pub const ALL: [Selector; 3] = [Selector::Pressed, Selector::Focus, Selector::Disabled];

    /// The selector keyword as written after `:`.
    pub fn as_str(self) -> &'static str {
        match self {
            Selector::Pressed => "pressed",
            Selector::Focus => "focus",
            Selector::Disabled => "disabled",
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stylesheet rule.
///
/// Equality, hashing and ordering are structural. The derived ordering is the
/// canonical one: element, annotation flag, selector flags (pressed, focus,
/// disabled), then codes and modes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule {
    element: String,
    is_annotation: bool,
    pressed: bool,
    focus: bool,
    disabled: bool,
    codes: Vec<i32>,
    modes: Vec<i32>,
}

impl Rule {
    /// Creates a plain rule for `element` with no selectors or attributes.
    pub fn new(element: impl Into<String>) -> Result<Self, RuleError> {
        Self::builder(element).build()
    }

    /// Starts building a rule for `element`.
    pub fn builder(element: impl Into<String>) -> RuleBuilder {
        RuleBuilder {
            element: element.into(),
            is_annotation: false,
            pressed: false,
            focus: false,
            disabled: false,
            codes: Vec::new(),
            modes: Vec::new(),
        }
    }

    /// The distinguished `@defines` rule holding the variable table.
    pub fn defined_variables() -> Self {
        Rule {
            element: DEFINES_ELEMENT.to_string(),
            is_annotation: true,
            pressed: false,
            focus: false,
            disabled: false,
            codes: Vec::new(),
            modes: Vec::new(),
        }
    }

    /// Returns true if this is the `@defines` rule.
    pub fn is_defined_variables_rule(&self) -> bool {
        self.is_annotation && self.element == DEFINES_ELEMENT
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn is_annotation(&self) -> bool {
        self.is_annotation
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_focus(&self) -> bool {
        self.focus
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn has_selector(&self, selector: Selector) -> bool {
        match selector {
            Selector::Pressed => self.pressed,
            Selector::Focus => self.focus,
            Selector::Disabled => self.disabled,
        }
    }

    /// Active selectors in canonical order.
    pub fn selectors(&self) -> impl Iterator<Item = Selector> + '_ {
        Selector::ALL
            .into_iter()
            .filter(move |selector| self.has_selector(*selector))
    }

    /// Key codes, sorted ascending.
    pub fn codes(&self) -> &[i32] {
        &self.codes
    }

    /// Input modes, sorted ascending.
    pub fn modes(&self) -> &[i32] {
        &self.modes
    }

    /// Element name with the annotation marker, e.g. `@defines`.
    pub fn qualified_element(&self) -> String {
        if self.is_annotation {
            format!("{}{}", ANNOTATION_MARKER, self.element)
        } else {
            self.element.clone()
        }
    }

    /// Returns a builder preloaded with this rule, for deriving a variant.
    pub fn to_builder(&self) -> RuleBuilder {
        RuleBuilder {
            element: self.element.clone(),
            is_annotation: self.is_annotation,
            pressed: self.pressed,
            focus: self.focus,
            disabled: self.disabled,
            codes: self.codes.clone(),
            modes: self.modes.clone(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_element())?;
        write_attribute(f, CODES_ATTRIBUTE, &self.codes)?;
        write_attribute(f, MODES_ATTRIBUTE, &self.modes)?;
        for selector in self.selectors() {
            write!(f, ":{}", selector)?;
        }
        Ok(())
    }
}

fn write_attribute(f: &mut fmt::Formatter<'_>, name: &str, values: &[i32]) -> fmt::Result {
    if values.is_empty() {
        return Ok(());
    }
    let joined: Vec<String> = values.iter().map(i32::to_string).collect();
    write!(f, "[{}={}]", name, joined.join("|"))
}

impl FromStr for Rule {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| DecodeError::InvalidRule {
            input: s.to_string(),
            reason,
        };

        let caps = RULE_SYNTAX
            .captures(s.trim())
            .ok_or_else(|| invalid("does not match [@]element[attr=..]:selector".to_string()))?;

        let mut builder = Rule::builder(&caps[2]);
        if !caps[1].is_empty() {
            builder = builder.annotation();
        }

        for attr in RULE_ATTRIBUTE.captures_iter(&caps[3]) {
            let mut values = Vec::new();
            for raw in attr[2].split('|') {
                let value = raw
                    .parse::<i32>()
                    .map_err(|_| invalid(format!("attribute value {} is out of range", raw)))?;
                values.push(value);
            }
            builder = match &attr[1] {
                CODES_ATTRIBUTE => builder.codes(values),
                _ => builder.modes(values),
            };
        }

        for selector in caps[4].split(':').filter(|part| !part.is_empty()) {
            builder = match selector {
                "pressed" => builder.pressed(),
                "focus" => builder.focus(),
                _ => builder.disabled(),
            };
        }

        builder.build().map_err(|e| invalid(e.to_string()))
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Fluent builder for [`Rule`].
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    element: String,
    is_annotation: bool,
    pressed: bool,
    focus: bool,
    disabled: bool,
    codes: Vec<i32>,
    modes: Vec<i32>,
}

impl RuleBuilder {
    /// Marks the rule as an annotation (`@element`).
    pub fn annotation(mut self) -> Self {
        self.is_annotation = true;
        self
    }

    pub fn pressed(mut self) -> Self {
        self.pressed = true;
        self
    }

    pub fn focus(mut self) -> Self {
        self.focus = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Sets or clears a selector flag.
    pub fn selector(mut self, selector: Selector, enabled: bool) -> Self {
        match selector {
            Selector::Pressed => self.pressed = enabled,
            Selector::Focus => self.focus = enabled,
            Selector::Disabled => self.disabled = enabled,
        }
        self
    }

    /// Adds key codes. Repeated calls accumulate.
    pub fn codes(mut self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.codes.extend(codes);
        self
    }

    /// Adds input modes. Repeated calls accumulate.
    pub fn modes(mut self, modes: impl IntoIterator<Item = i32>) -> Self {
        self.modes.extend(modes);
        self
    }

    /// Removes all codes and modes.
    pub fn clear_attributes(mut self) -> Self {
        self.codes.clear();
        self.modes.clear();
        self
    }

    /// Validates and builds the rule.
    pub fn build(self) -> Result<Rule, RuleError> {
        let element = self.element.trim().to_string();
        if element.is_empty() {
            return Err(RuleError::EmptyElement);
        }
        if !element
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(RuleError::InvalidElement(element));
        }

        let mut codes = self.codes;
        codes.sort_unstable();
        codes.dedup();
        let mut modes = self.modes;
        modes.sort_unstable();
        modes.dedup();

        let rule = Rule {
            element,
            is_annotation: self.is_annotation,
            pressed: self.pressed,
            focus: self.focus,
            disabled: self.disabled,
            codes,
            modes,
        };

        if rule.is_defined_variables_rule() && rule != Rule::defined_variables() {
            return Err(RuleError::InvalidDefinedVariables);
        }

        Ok(rule)
    }
}
