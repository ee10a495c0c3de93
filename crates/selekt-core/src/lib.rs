//! Headless state layer for searchable select / combobox widgets.
//!
//! The crate owns all behavior of a select control and none of its
//! rendering:
//!
//! - **[`SelectController`]**: Root of one widget instance. Holds the
//!   committed value, search text, and focus, receives host events as
//!   [`InputEvent`] / [`OptionEvent`] values, and publishes an immutable
//!   [`Snapshot`] after every transition (also observable through a
//!   `tokio::sync::watch` subscription).
//!
//! - **[`OptionResolver`]**: Produces the visible option pool from the
//!   search text, either by filtering the static source with a
//!   [`Matcher`] or by running a debounced async [`FetchFn`]. Fetches carry
//!   sequence numbers; only the latest one is ever applied.
//!
//! - **[`reducer`]**: Pure selection logic: single replacement, multi
//!   toggling, and default resolution.
//!
//! - **[`HighlightNavigator`]**: Keyboard cursor over the pool with
//!   wraparound and disabled-option skipping.
//!
//! - **[`snapshot`]**: Pure composition of the view-model, including
//!   option grouping and the display string.

pub mod config;
pub mod controller;
pub mod error;
pub mod highlight;
pub mod matcher;
pub mod model;
pub mod props;
pub mod reducer;
pub mod resolver;
pub mod snapshot;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ChangeCallback, FocusCallback, SelectConfig};
pub use controller::SelectController;
pub use error::FetchError;
pub use highlight::{HighlightNavigator, KeyOutcome};
pub use matcher::{FilterFn, Matcher};
pub use model::{OptionEntry, SelectItem, SelectOption, Selection, flatten_entries};
pub use props::{EventResponse, InputEvent, InputProps, Key, OptionEvent, OptionProps};
pub use resolver::{FetchFn, OptionResolver, Resolution, ResolveOutcome, fetch_fn};
pub use snapshot::{DEFAULT_DELIMITER, PoolEntry, Snapshot};
