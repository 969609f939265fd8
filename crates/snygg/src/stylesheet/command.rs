//! Edit commands.
//!
//! Every editor mutation can be expressed as a [`Command`], which lets hosts
//! record, replay or batch edits (the CLI reads them as JSON).

use serde::{Deserialize, Serialize};

use super::StylesheetEditor;
use crate::error::EditError;
use crate::rule::Rule;
use crate::value::Value;

/// A single editor mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Command {
    AddRule { rule: Rule },
    RenameRule { from: Rule, to: Rule },
    RemoveRule { rule: Rule },
    AddProperty { rule: Rule, name: String, value: Value },
    SetProperty { rule: Rule, name: String, value: Value },
    RemoveProperty { rule: Rule, name: String },
}

impl Command {
    /// The rule the command targets (the new name for renames).
    pub fn rule(&self) -> &Rule {
        match self {
            Command::AddRule { rule }
            | Command::RemoveRule { rule }
            | Command::AddProperty { rule, .. }
            | Command::SetProperty { rule, .. }
            | Command::RemoveProperty { rule, .. } => rule,
            Command::RenameRule { to, .. } => to,
        }
    }
}

/// Outcome of a successful command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// Whether the editor state changed.
    pub changed: bool,
    /// Position of the affected rule afterwards, if it still exists.
    pub rule_index: Option<usize>,
}

impl Applied {
    pub(crate) fn changed(rule_index: Option<usize>) -> Self {
        Applied {
            changed: true,
            rule_index,
        }
    }

    pub(crate) fn unchanged(rule_index: Option<usize>) -> Self {
        Applied {
            changed: false,
            rule_index,
        }
    }
}

impl StylesheetEditor {
    /// Applies a command. Failed commands leave the editor untouched.
    pub fn apply(&mut self, command: Command) -> Result<Applied, EditError> {
        tracing::debug!(?command, "applying stylesheet command");
        let result = match command {
            Command::AddRule { rule } => self.add_rule(rule),
            Command::RenameRule { from, to } => self.rename_rule(&from, to),
            Command::RemoveRule { rule } => {
                let changed = self.remove_rule(&rule);
                Ok(Applied {
                    changed,
                    rule_index: None,
                })
            }
            Command::AddProperty { rule, name, value } => self
                .add_property(&rule, name, value)
                .map(|()| Applied::changed(self.position(&rule))),
            Command::SetProperty { rule, name, value } => {
                let previous = self.set_property(&rule, name, value.clone())?;
                Ok(Applied {
                    changed: previous.as_ref() != Some(&value),
                    rule_index: self.position(&rule),
                })
            }
            Command::RemoveProperty { rule, name } => {
                let changed = self.remove_property(&rule, &name);
                Ok(Applied {
                    changed,
                    rule_index: self.position(&rule),
                })
            }
        };
        if let Err(err) = &result {
            tracing::debug!(%err, "stylesheet command rejected");
        }
        result
    }
}
