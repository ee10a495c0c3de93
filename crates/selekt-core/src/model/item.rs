// ── Selectable items ──
//
// The controller never looks inside an option beyond the projections
// declared by `SelectItem`. `SelectOption` is the ready-made record used
// by the CLI harness and by consumers that don't need their own type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Projections the controller needs from an application option.
pub trait SelectItem: Clone + Send + Sync + 'static {
    /// Identity used for selection, toggling, and default resolution.
    type Key: Clone + Eq + fmt::Debug + Send + Sync + 'static;

    fn key(&self) -> &Self::Key;

    fn label(&self) -> &str;

    /// Presentation group, if any.
    fn group(&self) -> Option<&str> {
        None
    }

    /// Disabled options are shown but can't be highlighted or chosen.
    fn is_disabled(&self) -> bool {
        false
    }
}

/// A plain option record: `value` is the key, `name` the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
            group: None,
            disabled: false,
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl SelectItem for SelectOption {
    type Key = String;

    fn key(&self) -> &String {
        &self.value
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ── Source entries ──────────────────────────────────────────────────

/// One entry of a hand-written option source: either an option or a
/// named group of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry {
    Group {
        name: String,
        items: Vec<SelectOption>,
    },
    Option(SelectOption),
}

/// Flatten grouped entries into a pool, stamping each grouped option with
/// its group name. Order is preserved.
pub fn flatten_entries(entries: Vec<OptionEntry>) -> Vec<SelectOption> {
    let mut flat = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            OptionEntry::Option(option) => flat.push(option),
            OptionEntry::Group { name, items } => {
                flat.extend(items.into_iter().map(|item| item.in_group(name.clone())));
            }
        }
    }
    flat
}
