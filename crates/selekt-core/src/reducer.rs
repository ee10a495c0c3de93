// ── Selection reducer ──
//
// Pure functions computing the next value. Nothing here mutates its
// inputs; every call returns a fresh `Selection`.

use crate::model::{SelectItem, Selection};

/// Find the option with `key` in `pool`.
pub fn find<'a, T: SelectItem>(key: &T::Key, pool: &'a [T]) -> Option<&'a T> {
    pool.iter().find(|option| option.key() == key)
}

/// Find `key` among the current value first, then the pool. Options
/// that were selected and later filtered out stay reachable this way.
pub fn lookup<'a, T: SelectItem>(
    key: &T::Key,
    previous: &'a Selection<T>,
    pool: &'a [T],
) -> Option<&'a T> {
    find(key, previous.as_slice()).or_else(|| find(key, pool))
}

/// Whether `key` names something a selection can act on. Single mode
/// only picks from the pool; multiple mode can also reach held options
/// so they can be toggled off.
pub fn is_selectable<T: SelectItem>(
    key: &T::Key,
    previous: &Selection<T>,
    pool: &[T],
    multiple: bool,
) -> bool {
    if multiple {
        lookup(key, previous, pool).is_some()
    } else {
        find(key, pool).is_some()
    }
}

/// Compute the next value for a candidate selection.
///
/// Single mode replaces the value with the first candidate found in the
/// pool; a candidate that matches nothing leaves `previous` untouched.
/// Multiple mode toggles each candidate: present keys are removed, new
/// ones are appended after the existing selection.
pub fn compute_next<T: SelectItem>(
    candidate: &Selection<T::Key>,
    previous: &Selection<T>,
    pool: &[T],
    multiple: bool,
) -> Selection<T> {
    if !multiple {
        return candidate
            .iter()
            .find_map(|key| find(key, pool))
            .map_or_else(|| previous.clone(), |option| Selection::Single(option.clone()));
    }

    let mut incoming: Vec<T> = Vec::new();
    for key in candidate {
        if incoming.iter().any(|option| option.key() == key) {
            continue;
        }
        if let Some(option) = lookup(key, previous, pool) {
            incoming.push(option.clone());
        }
    }

    let mut current: Vec<T> = previous.iter().cloned().collect();
    if current.is_empty() {
        return Selection::Multiple(incoming);
    }

    for option in incoming {
        match current.iter().position(|held| held.key() == option.key()) {
            Some(at) => {
                current.remove(at);
            }
            None => current.push(option),
        }
    }
    Selection::Multiple(current)
}

/// Resolve an externally supplied default against the pool.
///
/// Lookup only: the previous value is ignored, so a default never toggles
/// anything off.
pub fn resolve_default<T: SelectItem>(
    default: &Selection<T::Key>,
    pool: &[T],
    multiple: bool,
) -> Selection<T> {
    compute_next(default, &Selection::empty(multiple), pool, multiple)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::SelectOption;
    use pretty_assertions::assert_eq;

    fn pool() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "Alpha"),
            SelectOption::new("b", "Beta"),
            SelectOption::new("c", "Gamma"),
        ]
    }

    fn key(k: &str) -> Selection<String> {
        Selection::Single(k.to_owned())
    }

    fn keys(value: &Selection<SelectOption>) -> Vec<&str> {
        value.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn single_selection_is_idempotent() {
        let pool = pool();
        let first = compute_next(&key("b"), &Selection::None, &pool, false);
        let second = compute_next(&key("b"), &first, &pool, false);
        assert_eq!(first, Selection::Single(pool[1].clone()));
        assert_eq!(first, second);
    }

    #[test]
    fn single_selection_replaces_previous() {
        let pool = pool();
        let prev = Selection::Single(pool[0].clone());
        let next = compute_next(&key("c"), &prev, &pool, false);
        assert_eq!(keys(&next), vec!["c"]);
    }

    #[test]
    fn unknown_key_keeps_previous_value() {
        let pool = pool();
        let prev = Selection::Single(pool[0].clone());
        assert_eq!(compute_next(&key("zz"), &prev, &pool, false), prev);

        let prev = Selection::Multiple(vec![pool[0].clone()]);
        assert_eq!(compute_next(&key("zz"), &prev, &pool, true), prev);
    }

    #[test]
    fn single_mode_ignores_held_option_missing_from_pool() {
        let pool = pool();
        let prev = Selection::Single(SelectOption::new("x", "Extra"));
        assert_eq!(compute_next(&key("x"), &prev, &pool, false), prev);
        assert!(!is_selectable(&"x".to_owned(), &prev, &pool, false));

        let held = Selection::Multiple(vec![SelectOption::new("x", "Extra")]);
        assert!(is_selectable(&"x".to_owned(), &held, &pool, true));
    }

    #[test]
    fn multiple_toggles_and_re_adds_at_end() {
        let pool = pool();
        let mut value = Selection::empty(true);
        for k in ["a", "b", "c"] {
            value = compute_next(&key(k), &value, &pool, true);
        }
        assert_eq!(keys(&value), vec!["a", "b", "c"]);

        value = compute_next(&key("a"), &value, &pool, true);
        assert_eq!(keys(&value), vec!["b", "c"]);

        value = compute_next(&key("a"), &value, &pool, true);
        assert_eq!(keys(&value), vec!["b", "c", "a"]);
    }

    #[test]
    fn filtered_out_selection_can_still_be_removed() {
        let full = pool();
        let value = Selection::Multiple(vec![full[0].clone(), full[2].clone()]);
        let filtered = vec![full[1].clone()];

        let next = compute_next(&key("a"), &value, &filtered, true);
        assert_eq!(keys(&next), vec!["c"]);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let pool = pool();
        let prev = Selection::Multiple(vec![pool[0].clone()]);
        let snapshot = prev.clone();
        let _ = compute_next(&key("a"), &prev, &pool, true);
        assert_eq!(prev, snapshot);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn default_list_resolves_without_duplicates() {
        let pool = pool();
        let default = Selection::Multiple(vec!["c".to_owned(), "zz".to_owned(), "c".to_owned(), "a".to_owned()]);
        let value = resolve_default(&default, &pool, true);
        assert_eq!(keys(&value), vec!["c", "a"]);
    }

    #[test]
    fn default_in_single_mode_uses_first_match() {
        let pool = pool();
        let default = Selection::Multiple(vec!["zz".to_owned(), "b".to_owned()]);
        assert_eq!(keys(&resolve_default(&default, &pool, false)), vec!["b"]);
        assert_eq!(resolve_default(&Selection::None, &pool, false), Selection::None);
    }

    #[test]
    fn empty_default_in_multiple_mode_is_empty_list() {
        let value = resolve_default(&Selection::None, &pool(), true);
        assert_eq!(value, Selection::Multiple(vec![]));
    }
}
