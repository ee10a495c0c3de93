// ── Prop bundles and host events ──
//
// The presentation layer binds `InputProps` to its text/focus element and
// `OptionProps` to every rendered option, then forwards what happens there
// as `InputEvent` / `OptionEvent` values. Each dispatch answers with an
// `EventResponse` telling the host what to do with the native event.

use serde::Serialize;
use strum::{Display, EnumString};

/// A key as reported by the host element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Key {
    #[strum(serialize = "ArrowDown", serialize = "down")]
    ArrowDown,
    #[strum(serialize = "ArrowUp", serialize = "up")]
    ArrowUp,
    #[strum(serialize = "Enter", serialize = "return")]
    Enter,
    #[strum(serialize = "Escape", serialize = "esc")]
    Escape,
    #[strum(default)]
    Other(String),
}

/// Events originating from the input element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Focus,
    Blur,
    KeyDown(Key),
    KeyUp(Key),
    /// The input's text changed. Ignored unless search is enabled.
    Change(String),
}

/// Events originating from an option element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionEvent {
    PointerDown,
}

/// What the host should do after dispatching an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the element's native handling (scrolling, focus stealing).
    pub prevent_default: bool,
    /// Blur the input element; the host then dispatches `InputEvent::Blur`.
    pub relinquish_focus: bool,
}

impl EventResponse {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn prevented() -> Self {
        Self {
            prevent_default: true,
            relinquish_focus: false,
        }
    }

    pub(crate) fn with_blur(mut self, blur: bool) -> Self {
        self.relinquish_focus |= blur;
        self
    }
}

/// Attributes for the input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputProps {
    pub tab_index: i32,
    /// Read-only unless search is enabled.
    pub read_only: bool,
    pub disabled: bool,
    /// Whether `InputEvent::Change` is acted upon.
    pub accepts_text: bool,
}

/// Attributes for one option element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionProps<K> {
    /// Always -1: options are reached through the input, not by tabbing.
    pub tab_index: i32,
    pub value: K,
    pub disabled: bool,
    pub selected: bool,
    pub highlighted: bool,
}
