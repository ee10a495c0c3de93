// ── Snapshot composition ──
//
// Folds every facet of the controller into one immutable view-model.
// Consumers get a fresh `Arc<Snapshot<T>>` after each transition.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{SelectItem, Selection};

/// Separator used for multi-value display strings.
pub const DEFAULT_DELIMITER: &str = ", ";

/// A top-level entry of the grouped option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PoolEntry<T> {
    Option(T),
    Group { name: String, items: Vec<T> },
}

/// Immutable view-model handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize, T::Key: Serialize"))]
pub struct Snapshot<T: SelectItem> {
    /// Visible options, grouped for rendering.
    pub options: Vec<PoolEntry<T>>,
    /// Committed value as full options.
    pub option: Selection<T>,
    pub display_value: String,
    /// Committed value as bare keys.
    pub value: Selection<T::Key>,
    pub search: String,
    pub fetching: bool,
    pub focus: bool,
    /// Index into the flat pool, not into `options`.
    pub highlighted: Option<usize>,
    pub disabled: bool,
    #[serde(skip)]
    pool: Vec<T>,
}

impl<T: SelectItem> Snapshot<T> {
    /// The visible options in display order, ungrouped.
    pub fn pool(&self) -> &[T] {
        &self.pool
    }

    pub fn highlighted_option(&self) -> Option<&T> {
        self.highlighted.and_then(|i| self.pool.get(i))
    }

    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.option.iter().any(|option| option.key() == key)
    }

    pub fn is_highlighted(&self, key: &T::Key) -> bool {
        self.highlighted_option()
            .is_some_and(|option| option.key() == key)
    }
}

/// Every facet that goes into a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Facets<'a, T: SelectItem> {
    pub pool: &'a [T],
    pub value: &'a Selection<T>,
    pub search: &'a str,
    pub fetching: bool,
    pub focus: bool,
    pub highlighted: Option<usize>,
    pub disabled: bool,
    pub delimiter: &'a str,
}

pub fn compose<T: SelectItem>(facets: Facets<'_, T>) -> Snapshot<T> {
    Snapshot {
        options: group_options(facets.pool),
        option: facets.value.clone(),
        display_value: display_value(facets.value, facets.delimiter),
        value: values(facets.value),
        search: facets.search.to_owned(),
        fetching: facets.fetching,
        focus: facets.focus,
        highlighted: facets.highlighted,
        disabled: facets.disabled,
        pool: facets.pool.to_vec(),
    }
}

/// Group options by their group name. Ungrouped options stay top-level;
/// each group sits where its first member appeared.
pub fn group_options<T: SelectItem>(pool: &[T]) -> Vec<PoolEntry<T>> {
    let mut entries: Vec<PoolEntry<T>> = Vec::new();
    let mut group_at: HashMap<&str, usize> = HashMap::new();

    for option in pool {
        let Some(name) = option.group() else {
            entries.push(PoolEntry::Option(option.clone()));
            continue;
        };

        if let Some(&at) = group_at.get(name) {
            if let Some(PoolEntry::Group { items, .. }) = entries.get_mut(at) {
                items.push(option.clone());
            }
        } else {
            group_at.insert(name, entries.len());
            entries.push(PoolEntry::Group {
                name: name.to_owned(),
                items: vec![option.clone()],
            });
        }
    }
    entries
}

/// Label text for the value: empty, one label, or labels joined by `delimiter`.
pub fn display_value<T: SelectItem>(value: &Selection<T>, delimiter: &str) -> String {
    match value {
        Selection::None => String::new(),
        Selection::Single(option) => option.label().to_owned(),
        Selection::Multiple(options) => options
            .iter()
            .map(SelectItem::label)
            .collect::<Vec<_>>()
            .join(delimiter),
    }
}

/// Bare keys in the same shape as the value.
pub fn values<T: SelectItem>(value: &Selection<T>) -> Selection<T::Key> {
    value.map(|option| option.key().clone())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::SelectOption;
    use pretty_assertions::assert_eq;

    fn pool() -> Vec<SelectOption> {
        vec![
            SelectOption::new("sv", "Swedish"),
            SelectOption::new("de", "German").in_group("Germanic"),
            SelectOption::new("fr", "French").in_group("Romance"),
            SelectOption::new("nl", "Dutch").in_group("Germanic"),
            SelectOption::new("fi", "Finnish"),
        ]
    }

    #[test]
    fn groups_follow_first_appearance() {
        let entries = group_options(&pool());
        assert_eq!(entries.len(), 4);
        assert!(matches!(&entries[0], PoolEntry::Option(o) if o.value == "sv"));
        match &entries[1] {
            PoolEntry::Group { name, items } => {
                assert_eq!(name, "Germanic");
                assert_eq!(items.len(), 2);
                assert_eq!(items[1].value, "nl");
            }
            PoolEntry::Option(_) => panic!("expected a group"),
        }
        assert!(matches!(&entries[2], PoolEntry::Group { name, .. } if name == "Romance"));
        assert!(matches!(&entries[3], PoolEntry::Option(o) if o.value == "fi"));
    }

    #[test]
    fn display_value_by_shape() {
        let pool = pool();
        assert_eq!(display_value::<SelectOption>(&Selection::None, ", "), "");
        assert_eq!(display_value(&Selection::Single(pool[0].clone()), ", "), "Swedish");
        assert_eq!(
            display_value(&Selection::Multiple(vec![pool[0].clone(), pool[4].clone()]), " | "),
            "Swedish | Finnish"
        );
        assert_eq!(display_value::<SelectOption>(&Selection::Multiple(vec![]), ", "), "");
    }

    #[test]
    fn values_keep_shape() {
        let pool = pool();
        let value = Selection::Multiple(vec![pool[2].clone(), pool[0].clone()]);
        assert_eq!(
            values(&value),
            Selection::Multiple(vec!["fr".to_owned(), "sv".to_owned()])
        );
        assert_eq!(values::<SelectOption>(&Selection::None), Selection::None);
    }

    #[test]
    fn composed_snapshot_serializes_for_renderers() {
        let pool = vec![
            SelectOption::new("a", "Alpha"),
            SelectOption::new("b", "Beta").in_group("Greek"),
        ];
        let value = Selection::Single(pool[0].clone());
        let snapshot = compose(Facets {
            pool: &pool,
            value: &value,
            search: "",
            fetching: false,
            focus: true,
            highlighted: Some(1),
            disabled: false,
            delimiter: DEFAULT_DELIMITER,
        });

        assert!(snapshot.is_selected(&"a".to_owned()));
        assert!(snapshot.is_highlighted(&"b".to_owned()));

        insta::assert_json_snapshot!(snapshot, @r###"
        {
          "options": [
            {
              "type": "option",
              "value": "a",
              "name": "Alpha"
            },
            {
              "type": "group",
              "name": "Greek",
              "items": [
                {
                  "value": "b",
                  "name": "Beta",
                  "group": "Greek"
                }
              ]
            }
          ],
          "option": {
            "value": "a",
            "name": "Alpha"
          },
          "display_value": "Alpha",
          "value": "a",
          "search": "",
          "fetching": false,
          "focus": true,
          "highlighted": 1,
          "disabled": false
        }
        "###);
    }
}
