// ── Controller configuration ──
//
// Everything a `SelectController` is built from. Plain data fields can be
// filled from `selekt-config` settings; the async source, custom matcher,
// and callbacks are attached in code.

use std::fmt;
use std::time::Duration;

use crate::matcher::{FilterFn, Matcher};
use crate::model::{SelectItem, Selection};
use crate::resolver::FetchFn;
use crate::snapshot::DEFAULT_DELIMITER;

/// Called with `(keys, options)` after every confirmed selection.
pub type ChangeCallback<T> =
    Box<dyn FnMut(&Selection<<T as SelectItem>::Key>, &Selection<T>) + Send>;

/// Called on focus or blur of the input.
pub type FocusCallback = Box<dyn FnMut() + Send>;

pub(crate) struct Callbacks<T: SelectItem> {
    pub(crate) on_change: ChangeCallback<T>,
    pub(crate) on_focus: FocusCallback,
    pub(crate) on_blur: FocusCallback,
}

impl<T: SelectItem> Default for Callbacks<T> {
    fn default() -> Self {
        Self {
            on_change: Box::new(|_, _| {}),
            on_focus: Box::new(|| {}),
            on_blur: Box::new(|| {}),
        }
    }
}

/// Configuration for one controller instance.
pub struct SelectConfig<T: SelectItem> {
    /// Default selection, as keys.
    pub value: Selection<T::Key>,
    /// Static option source.
    pub options: Vec<T>,
    /// Accept typed text as a search query.
    pub search: bool,
    pub multiple: bool,
    pub disabled: bool,
    /// Ask the input to blur after each confirmed selection.
    pub close_on_select: bool,
    /// Async source; replaces synchronous filtering for non-empty queries.
    pub get_options: Option<FetchFn<T>>,
    /// Custom matcher; takes precedence over `fuzzy_search`.
    pub filter_options: Option<FilterFn<T>>,
    pub fuzzy_search: bool,
    /// Delay before an async fetch is issued.
    pub debounce: Duration,
    /// Separator for multi-value display strings.
    pub delimiter: String,
    pub(crate) callbacks: Callbacks<T>,
}

impl<T: SelectItem> Default for SelectConfig<T> {
    fn default() -> Self {
        Self {
            value: Selection::None,
            options: Vec::new(),
            search: false,
            multiple: false,
            disabled: false,
            close_on_select: true,
            get_options: None,
            filter_options: None,
            fuzzy_search: true,
            debounce: Duration::ZERO,
            delimiter: DEFAULT_DELIMITER.to_owned(),
            callbacks: Callbacks::default(),
        }
    }
}

impl<T: SelectItem> SelectConfig<T> {
    pub fn new(options: Vec<T>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<Selection<T::Key>>) -> Self {
        self.value = value.into();
        self
    }

    pub fn searchable(mut self, search: bool) -> Self {
        self.search = search;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn close_on_select(mut self, close: bool) -> Self {
        self.close_on_select = close;
        self
    }

    pub fn fuzzy_search(mut self, fuzzy: bool) -> Self {
        self.fuzzy_search = fuzzy;
        self
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_fetch(mut self, fetch: FetchFn<T>) -> Self {
        self.get_options = Some(fetch);
        self
    }

    pub fn with_filter(
        mut self,
        filter: impl Fn(&[T], &str) -> Vec<T> + Send + Sync + 'static,
    ) -> Self {
        self.filter_options = Some(std::sync::Arc::new(filter));
        self
    }

    pub fn on_change(
        mut self,
        callback: impl FnMut(&Selection<T::Key>, &Selection<T>) + Send + 'static,
    ) -> Self {
        self.callbacks.on_change = Box::new(callback);
        self
    }

    pub fn on_focus(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.callbacks.on_focus = Box::new(callback);
        self
    }

    pub fn on_blur(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.callbacks.on_blur = Box::new(callback);
        self
    }

    /// The matcher implied by `filter_options` and `fuzzy_search`.
    pub fn matcher(&self) -> Matcher<T> {
        match (&self.filter_options, self.fuzzy_search) {
            (Some(filter), _) => Matcher::Custom(std::sync::Arc::clone(filter)),
            (None, true) => Matcher::Fuzzy,
            (None, false) => Matcher::Exact,
        }
    }
}

impl<T: SelectItem> fmt::Debug for SelectConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectConfig")
            .field("value", &self.value)
            .field("options", &self.options.len())
            .field("search", &self.search)
            .field("multiple", &self.multiple)
            .field("disabled", &self.disabled)
            .field("close_on_select", &self.close_on_select)
            .field("get_options", &self.get_options.is_some())
            .field("matcher", &self.matcher())
            .field("debounce", &self.debounce)
            .field("delimiter", &self.delimiter)
            .finish_non_exhaustive()
    }
}
