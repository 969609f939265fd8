//! Read-only view model of a stylesheet at a given level.
//!
//! [`StylesheetView::build`] projects the editor state into plain data that a
//! UI (or the CLI's `--json` output) can render without touching the model.

use serde::Serialize;
use snygg::projection::{self, Translations};
use snygg::{Level, Rule, SpecCatalog, StylesheetEditor, ValuePreview};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylesheetView {
    pub level: Level,
    /// True when the stylesheet has no rules besides `@defines`.
    pub show_empty_hint: bool,
    pub rules: Vec<RuleView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleView {
    /// Position in the stylesheet.
    pub index: usize,
    /// Raw rule syntax, usable as a command argument.
    pub rule: String,
    pub element: String,
    pub selectors: Vec<String>,
    /// `codes = [..]` / `modes = [..]` lines, for non-empty lists only.
    pub attributes: Vec<String>,
    pub description: Option<String>,
    /// The `@defines` rule cannot be renamed.
    pub editable: bool,
    pub properties: Vec<PropertyRow>,
    /// Number of properties hidden at this level.
    pub hidden: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyRow {
    pub name: String,
    pub label: String,
    pub value: String,
    pub preview: Preview,
}

/// Serializable form of [`ValuePreview`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Preview {
    Direct { value: String },
    Unresolved { key: String },
    Linked { key: String, target: String },
}

impl From<ValuePreview<'_>> for Preview {
    fn from(preview: ValuePreview<'_>) -> Self {
        match preview {
            ValuePreview::Direct(value) => Preview::Direct {
                value: value.encode(),
            },
            ValuePreview::Unresolved { key } => Preview::Unresolved {
                key: key.to_string(),
            },
            ValuePreview::Linked { key, target } => Preview::Linked {
                key: key.to_string(),
                target: target.encode(),
            },
        }
    }
}

impl StylesheetView {
    pub fn build(
        editor: &StylesheetEditor,
        catalog: &dyn SpecCatalog,
        tr: &dyn Translations,
        level: Level,
    ) -> Self {
        let rules = editor
            .rules()
            .enumerate()
            .map(|(index, (rule, set))| {
                let properties: Vec<PropertyRow> =
                    projection::visible_properties(rule, set, catalog, level)
                        .map(|(name, value)| PropertyRow {
                            name: name.clone(),
                            label: projection::property_name(name, level, tr),
                            value: projection::property_value(value, level),
                            preview: editor.resolve(value).into(),
                        })
                        .collect();

                RuleView {
                    index,
                    rule: rule.to_string(),
                    element: projection::element_name(rule, level, tr),
                    selectors: projection::selector_names(rule, level, tr),
                    attributes: attribute_lines(rule),
                    description: projection::rule_description(rule, tr),
                    editable: !rule.is_defined_variables_rule(),
                    hidden: set.len() - properties.len(),
                    properties,
                }
            })
            .collect();

        StylesheetView {
            level,
            show_empty_hint: !editor.has_user_rules(),
            rules,
        }
    }
}

fn attribute_lines(rule: &Rule) -> Vec<String> {
    let mut lines = Vec::new();
    if !rule.codes().is_empty() {
        lines.push(projection::attribute_line("codes", rule.codes()));
    }
    if !rule.modes().is_empty() {
        lines.push(projection::attribute_line("modes", rule.modes()));
    }
    lines
}
