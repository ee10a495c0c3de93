//! Shared helpers for command handlers.

use selekt_core::{PoolEntry, SelectItem, SelectOption, Selection, Snapshot};
use tabled::Tabled;

use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct OptionRow {
    #[tabled(rename = "")]
    marker: String,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "State")]
    state: String,
}

impl OptionRow {
    /// Row for `option` as it appears in `snapshot`: `>` marks the
    /// highlight, `*` the selection.
    pub fn new(option: &SelectOption, snapshot: &Snapshot<SelectOption>) -> Self {
        let highlighted = snapshot.is_highlighted(option.key());
        let selected = snapshot.is_selected(option.key());
        let marker = match (highlighted, selected) {
            (true, true) => ">*",
            (true, false) => ">",
            (false, true) => "*",
            (false, false) => "",
        };
        Self {
            marker: marker.into(),
            key: option.value.clone(),
            label: option.name.clone(),
            group: option.group.clone().unwrap_or_else(|| "-".into()),
            state: if option.disabled { "disabled" } else { "" }.into(),
        }
    }
}

// ── Rendering ───────────────────────────────────────────────────────

/// Keys of a grouped pool in display order.
pub fn entry_keys(entries: &[PoolEntry<SelectOption>]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| match entry {
            PoolEntry::Option(option) => std::slice::from_ref(option),
            PoolEntry::Group { items, .. } => items.as_slice(),
        })
        .map(|option| option.value.clone())
        .collect()
}

/// The pool as a table, or a placeholder when it's empty.
pub fn pool_table(snapshot: &Snapshot<SelectOption>) -> String {
    if snapshot.pool().is_empty() {
        return "(no options)".into();
    }
    let rows: Vec<OptionRow> = snapshot
        .pool()
        .iter()
        .map(|option| OptionRow::new(option, snapshot))
        .collect();
    output::render_table(&rows)
}

/// Human-readable snapshot: state summary followed by the pool.
pub fn snapshot_detail(snapshot: &Snapshot<SelectOption>) -> String {
    let keys = match &snapshot.value {
        Selection::None => "-".to_owned(),
        value => value.iter().cloned().collect::<Vec<_>>().join(","),
    };
    let lines = [
        format!("Value:     {} ({keys})", or_dash(&snapshot.display_value)),
        format!("Search:    {}", or_dash(&snapshot.search)),
        format!("Focus:     {}", yes_no(snapshot.focus)),
        format!("Fetching:  {}", yes_no(snapshot.fetching)),
        format!(
            "Highlight: {}",
            snapshot
                .highlighted_option()
                .map_or_else(|| "-".into(), |option| option.value.clone())
        ),
        pool_table(snapshot),
    ];
    lines.join("\n")
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

// ── Key resolution ──────────────────────────────────────────────────

/// Key selection in the shape of the current mode.
pub fn key_selection(keys: &[String], multiple: bool) -> Selection<String> {
    if multiple {
        Selection::Multiple(keys.to_vec())
    } else {
        keys.first().cloned().into()
    }
}

/// Resolve keys to options from `catalog`, failing on the first unknown key.
pub fn resolve_options(
    keys: &[String],
    catalog: &[SelectOption],
    multiple: bool,
) -> Result<Selection<SelectOption>, CliError> {
    let options = keys
        .iter()
        .map(|key| {
            catalog
                .iter()
                .find(|option| &option.value == key)
                .cloned()
                .ok_or_else(|| CliError::UnknownOption { key: key.clone() })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(if multiple {
        Selection::Multiple(options)
    } else {
        options.into_iter().next().into()
    })
}
