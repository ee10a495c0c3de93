// ── Keyboard highlight ──
//
// Tracks which option of the visible pool the keyboard cursor is on.
// Arrow keys move it with wraparound, skipping disabled options; Enter
// confirms the highlighted option; Escape asks for the input to blur.

use tracing::trace;

use crate::model::SelectItem;
use crate::props::Key;

/// What a key press means for the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome<K> {
    /// The highlight moved (or stayed, on an empty pool).
    Moved,
    /// Select the option with this key.
    Confirm(K),
    /// Give up focus.
    Dismiss,
    Ignored,
}

impl<K> KeyOutcome<K> {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Highlight cursor. `None` means nothing is highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightNavigator {
    index: Option<usize>,
}

impl HighlightNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = None;
    }

    pub fn highlighted<'a, T: SelectItem>(&self, pool: &'a [T]) -> Option<&'a T> {
        self.index.and_then(|i| pool.get(i))
    }

    pub fn next<T: SelectItem>(&mut self, pool: &[T]) -> Option<usize> {
        self.step(pool, Direction::Forward)
    }

    pub fn previous<T: SelectItem>(&mut self, pool: &[T]) -> Option<usize> {
        self.step(pool, Direction::Backward)
    }

    /// Arrow keys act on key-down so holding them repeats.
    pub fn on_key_down<T: SelectItem>(&mut self, key: &Key, pool: &[T]) -> KeyOutcome<T::Key> {
        match key {
            Key::ArrowDown => {
                self.next(pool);
                KeyOutcome::Moved
            }
            Key::ArrowUp => {
                self.previous(pool);
                KeyOutcome::Moved
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Enter and Escape act on key-up.
    pub fn on_key_up<T: SelectItem>(&mut self, key: &Key, pool: &[T]) -> KeyOutcome<T::Key> {
        match key {
            Key::Enter => match self.highlighted(pool) {
                Some(option) if !option.is_disabled() => KeyOutcome::Confirm(option.key().clone()),
                _ => KeyOutcome::Ignored,
            },
            Key::Escape => KeyOutcome::Dismiss,
            _ => KeyOutcome::Ignored,
        }
    }

    fn step<T: SelectItem>(&mut self, pool: &[T], direction: Direction) -> Option<usize> {
        let len = pool.len();
        if len == 0 {
            self.index = None;
            return None;
        }

        let mut cursor = self.index;
        for _ in 0..len {
            let candidate = match (cursor, direction) {
                (None, Direction::Forward) => 0,
                (None, Direction::Backward) => len - 1,
                (Some(i), Direction::Forward) => (i + 1) % len,
                (Some(i), Direction::Backward) => (i % len + len - 1) % len,
            };
            if pool.get(candidate).is_some_and(|option| !option.is_disabled()) {
                trace!(from = ?self.index, to = candidate, "highlight moved");
                self.index = Some(candidate);
                return self.index;
            }
            cursor = Some(candidate);
        }

        // Every option is disabled.
        self.index
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::SelectOption;

    fn pool(n: usize) -> Vec<SelectOption> {
        (0..n)
            .map(|i| SelectOption::new(i.to_string(), format!("Option {i}")))
            .collect()
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let pool = pool(3);
        let mut nav = HighlightNavigator { index: Some(2) };
        assert_eq!(nav.next(&pool), Some(0));
    }

    #[test]
    fn previous_from_nothing_goes_to_last() {
        let pool = pool(3);
        let mut nav = HighlightNavigator::new();
        assert_eq!(nav.previous(&pool), Some(2));
        assert_eq!(nav.previous(&pool), Some(1));
    }

    #[test]
    fn next_from_nothing_goes_to_first() {
        let mut nav = HighlightNavigator::new();
        assert_eq!(nav.next(&pool(3)), Some(0));
    }

    #[test]
    fn empty_pool_keeps_nothing_highlighted() {
        let mut nav = HighlightNavigator::new();
        assert_eq!(nav.next::<SelectOption>(&[]), None);
        assert_eq!(nav.previous::<SelectOption>(&[]), None);
    }

    #[test]
    fn disabled_options_are_skipped() {
        let mut pool = pool(4);
        pool[1] = pool[1].clone().disabled();
        pool[2] = pool[2].clone().disabled();

        let mut nav = HighlightNavigator { index: Some(0) };
        assert_eq!(nav.next(&pool), Some(3));
        assert_eq!(nav.previous(&pool), Some(0));
    }

    #[test]
    fn all_disabled_leaves_highlight_alone() {
        let pool: Vec<_> = pool(2).into_iter().map(SelectOption::disabled).collect();
        let mut nav = HighlightNavigator::new();
        assert_eq!(nav.next(&pool), None);
    }

    #[test]
    fn enter_confirms_highlighted_key() {
        let pool = pool(3);
        let mut nav = HighlightNavigator::new();
        assert_eq!(nav.on_key_up(&Key::Enter, &pool), KeyOutcome::Ignored);

        nav.on_key_down(&Key::ArrowDown, &pool);
        nav.on_key_down(&Key::ArrowDown, &pool);
        assert_eq!(
            nav.on_key_up(&Key::Enter, &pool),
            KeyOutcome::Confirm("1".to_owned())
        );
    }

    #[test]
    fn escape_dismisses_and_other_keys_are_ignored() {
        let pool = pool(1);
        let mut nav = HighlightNavigator::new();
        assert_eq!(nav.on_key_up(&Key::Escape, &pool), KeyOutcome::Dismiss);
        let outcome = nav.on_key_down(&Key::Other("a".into()), &pool);
        assert!(!outcome.prevents_default());
        assert_eq!(nav.index(), None);
    }

    #[test]
    fn reset_clears_highlight() {
        let mut nav = HighlightNavigator::new();
        nav.next(&pool(2));
        nav.reset();
        assert_eq!(nav.index(), None);
    }
}
