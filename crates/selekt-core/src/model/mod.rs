// ── Domain model ──
//
// Option projections and the selection shape shared by value, keys,
// and default candidates.

mod item;
mod selection;

pub use item::{OptionEntry, SelectItem, SelectOption, flatten_entries};
pub use selection::Selection;
