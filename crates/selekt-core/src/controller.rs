// ── Select controller ──
//
// Owns every facet of one select widget and applies each host event as a
// single transition: mutate state, re-validate the highlight, publish one
// fresh snapshot. Async option fetches run elsewhere and are only applied
// when the host pumps the controller (`settle` / `poll_resolutions` /
// `next_resolution`), so a published snapshot never shows a half-applied
// transition.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, trace};

use crate::config::{Callbacks, SelectConfig};
use crate::highlight::{HighlightNavigator, KeyOutcome};
use crate::model::{SelectItem, Selection};
use crate::props::{EventResponse, InputEvent, InputProps, OptionEvent, OptionProps};
use crate::reducer;
use crate::resolver::{OptionResolver, Resolution, ResolveOutcome};
use crate::snapshot::{self, Facets, Snapshot};

/// Headless controller for a searchable single/multi select.
pub struct SelectController<T: SelectItem> {
    search_enabled: bool,
    multiple: bool,
    disabled: bool,
    close_on_select: bool,
    delimiter: String,

    value: Selection<T>,
    search: String,
    focus: bool,
    /// Default most recently applied through `set_default`.
    last_default: Option<Selection<T::Key>>,

    resolver: OptionResolver<T>,
    highlight: HighlightNavigator,
    callbacks: Callbacks<T>,
    snapshot: watch::Sender<Arc<Snapshot<T>>>,
}

impl<T: SelectItem> SelectController<T> {
    /// Build a controller. The pool starts as the full static source and
    /// the default value is resolved against it.
    pub fn new(config: SelectConfig<T>) -> Self {
        let matcher = config.matcher();
        let SelectConfig {
            value: default,
            options,
            search,
            multiple,
            disabled,
            close_on_select,
            get_options,
            debounce,
            delimiter,
            callbacks,
            ..
        } = config;

        let resolver = OptionResolver::new(options, matcher, get_options, debounce);
        let initial = Arc::new(snapshot::compose(Facets {
            pool: resolver.options(),
            value: &Selection::empty(multiple),
            search: "",
            fetching: false,
            focus: false,
            highlighted: None,
            disabled,
            delimiter: &delimiter,
        }));
        let (snapshot, _) = watch::channel(initial);

        let mut controller = Self {
            search_enabled: search,
            multiple,
            disabled,
            close_on_select,
            delimiter,
            value: Selection::empty(multiple),
            search: String::new(),
            focus: false,
            last_default: None,
            resolver,
            highlight: HighlightNavigator::new(),
            callbacks,
            snapshot,
        };
        controller.set_default(default);
        controller
    }

    // ── Observation ──────────────────────────────────────────────────

    /// Latest snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Snapshot<T>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot<T>>> {
        self.snapshot.subscribe()
    }

    pub fn value(&self) -> &Selection<T> {
        &self.value
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_focused(&self) -> bool {
        self.focus
    }

    pub fn is_fetching(&self) -> bool {
        self.resolver.fetching()
    }

    pub fn options(&self) -> &[T] {
        self.resolver.options()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlight.index()
    }

    // ── Prop bundles ─────────────────────────────────────────────────

    pub fn input_props(&self) -> InputProps {
        InputProps {
            tab_index: 0,
            read_only: !self.search_enabled,
            disabled: self.disabled,
            accepts_text: self.search_enabled,
        }
    }

    pub fn option_props(&self, key: &T::Key) -> OptionProps<T::Key> {
        let pool = self.resolver.options();
        OptionProps {
            tab_index: -1,
            value: key.clone(),
            disabled: reducer::find(key, pool).is_some_and(SelectItem::is_disabled),
            selected: self.value.iter().any(|option| option.key() == key),
            highlighted: self
                .highlight
                .highlighted(pool)
                .is_some_and(|option| option.key() == key),
        }
    }

    // ── Host events ──────────────────────────────────────────────────

    /// Dispatch an event from the input element.
    pub fn handle_input(&mut self, event: InputEvent) -> EventResponse {
        if self.disabled {
            return EventResponse::ignored();
        }

        match event {
            InputEvent::Focus => {
                self.focus_gained();
                EventResponse::ignored()
            }
            InputEvent::Blur => {
                self.focus_lost();
                EventResponse::ignored()
            }
            InputEvent::KeyDown(key) => {
                let outcome = self.highlight.on_key_down(&key, self.resolver.options());
                self.apply_key_outcome(outcome)
            }
            InputEvent::KeyUp(key) => {
                let outcome = self.highlight.on_key_up(&key, self.resolver.options());
                self.apply_key_outcome(outcome)
            }
            InputEvent::Change(text) => {
                if !self.search_enabled {
                    return EventResponse::ignored();
                }
                self.set_search(text);
                EventResponse::ignored()
            }
        }
    }

    /// Dispatch an event from the option element carrying `key`.
    pub fn handle_option(&mut self, key: &T::Key, event: OptionEvent) -> EventResponse {
        if self.disabled {
            return EventResponse::ignored();
        }

        match event {
            OptionEvent::PointerDown => {
                let blocked = reducer::find(key, self.resolver.options())
                    .is_some_and(SelectItem::is_disabled);
                if blocked {
                    return EventResponse::prevented();
                }
                let blur = self.select(key);
                EventResponse::prevented().with_blur(blur)
            }
        }
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Confirm a selection by key.
    ///
    /// Returns whether the host should blur the input. Keys that match no
    /// known option are ignored without notifying `on_change`. Re-selecting
    /// the current single value does notify.
    pub fn select(&mut self, key: &T::Key) -> bool {
        if !reducer::is_selectable(key, &self.value, self.resolver.options(), self.multiple) {
            debug!(?key, "ignoring selection of unknown option");
            return false;
        }

        let candidate = Selection::Single(key.clone());
        self.value = reducer::compute_next(
            &candidate,
            &self.value,
            self.resolver.options(),
            self.multiple,
        );
        debug!(?key, selected = self.value.len(), "selection applied");
        self.publish();

        let values = snapshot::values(&self.value);
        (self.callbacks.on_change)(&values, &self.value);

        self.close_on_select
    }

    /// Replace the search text and re-resolve the pool.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search {
            return;
        }
        self.search = text;
        self.resolve();
        self.publish();
    }

    /// Replace the static option source and re-resolve the current query.
    pub fn set_source(&mut self, options: Vec<T>) {
        self.resolver.set_source(options);
        self.resolve();
        self.publish();
    }

    /// Apply an external default. A default equal to the last one applied
    /// is a no-op; anything else replaces the value by lookup against the
    /// current pool. Returns whether the value was recomputed.
    pub fn set_default(&mut self, default: Selection<T::Key>) -> bool {
        if self.last_default.as_ref() == Some(&default) {
            trace!("default unchanged -- skipping");
            return false;
        }

        self.value = reducer::resolve_default(&default, self.resolver.options(), self.multiple);
        debug!(?default, selected = self.value.len(), "default applied");
        self.last_default = Some(default);
        self.publish();
        true
    }

    /// Force the value, bypassing the reducer and `on_change`.
    pub fn set_value(&mut self, value: Selection<T>) {
        self.value = value;
        self.publish();
    }

    // ── Async resolution ─────────────────────────────────────────────

    /// Apply every completion that has already arrived. Returns whether
    /// the pool changed.
    pub fn poll_resolutions(&mut self) -> bool {
        let mut changed = false;
        while let Some(resolution) = self.resolver.try_next() {
            changed |= self.apply_resolution(resolution);
        }
        changed
    }

    /// Wait for the next completion and apply it. Stays pending while no
    /// fetch is in flight, which suits a `tokio::select!` event loop.
    pub async fn next_resolution(&mut self) -> bool {
        match self.resolver.next().await {
            Some(resolution) => self.apply_resolution(resolution),
            None => false,
        }
    }

    /// Wait until no fetch is in flight.
    pub async fn settle(&mut self) {
        while self.resolver.fetching() {
            self.next_resolution().await;
        }
    }

    /// Cancel pending work. The controller keeps answering events but no
    /// fetch completion is applied afterwards.
    pub fn shutdown(&mut self) {
        self.resolver.shutdown();
        self.publish();
    }

    // ── Internals ────────────────────────────────────────────────────

    fn focus_gained(&mut self) {
        self.focus = true;
        self.publish();
        (self.callbacks.on_focus)();
    }

    fn focus_lost(&mut self) {
        self.focus = false;
        self.search.clear();
        self.resolve();
        self.publish();
        (self.callbacks.on_blur)();
    }

    fn apply_key_outcome(&mut self, outcome: KeyOutcome<T::Key>) -> EventResponse {
        let prevent_default = outcome.prevents_default();
        let relinquish_focus = match outcome {
            KeyOutcome::Moved => {
                self.publish();
                false
            }
            KeyOutcome::Confirm(key) => self.select(&key),
            KeyOutcome::Dismiss => true,
            KeyOutcome::Ignored => false,
        };
        EventResponse {
            prevent_default,
            relinquish_focus,
        }
    }

    /// Re-resolve the pool for the current search text.
    fn resolve(&mut self) {
        match self.resolver.resolve(&self.search) {
            ResolveOutcome::Ready => self.highlight.reset(),
            ResolveOutcome::Scheduled { seq } => trace!(seq, "awaiting option fetch"),
        }
    }

    fn apply_resolution(&mut self, resolution: Resolution<T>) -> bool {
        if !self.resolver.apply(resolution) {
            return false;
        }
        self.highlight.reset();
        self.publish();
        true
    }

    fn publish(&self) {
        let snapshot = snapshot::compose(Facets {
            pool: self.resolver.options(),
            value: &self.value,
            search: &self.search,
            fetching: self.resolver.fetching(),
            focus: self.focus,
            highlighted: self.highlight.index(),
            disabled: self.disabled,
            delimiter: &self.delimiter,
        });
        self.snapshot.send_replace(Arc::new(snapshot));
    }
}

impl<T: SelectItem> std::fmt::Debug for SelectController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectController")
            .field("multiple", &self.multiple)
            .field("disabled", &self.disabled)
            .field("value", &self.value.len())
            .field("search", &self.search)
            .field("focus", &self.focus)
            .field("fetching", &self.resolver.fetching())
            .field("highlighted", &self.highlight.index())
            .finish_non_exhaustive()
    }
}
