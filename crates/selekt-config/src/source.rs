// ── Option sources ──
//
// Hand-written option lists. Both formats hold an `options` array whose
// entries are either options or named groups of options; groups are
// flattened so every option carries its group name.

use std::path::Path;

use serde::{Deserialize, Serialize};

use selekt_core::{OptionEntry, SelectOption, flatten_entries};

use crate::ConfigError;

/// On-disk shape of an option source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionFile {
    #[serde(default)]
    pub options: Vec<OptionEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonSource {
    Bare(Vec<OptionEntry>),
    Wrapped(OptionFile),
}

/// Parse an option source. `format` is a file extension: `toml` or `json`.
/// JSON accepts a bare array as well as the `{"options": [...]}` form.
pub fn parse_options(raw: &str, format: &str) -> Result<Vec<SelectOption>, ConfigError> {
    let entries = match format {
        "toml" => toml::from_str::<OptionFile>(raw)?.options,
        "json" => match serde_json::from_str::<JsonSource>(raw)? {
            JsonSource::Bare(entries) => entries,
            JsonSource::Wrapped(file) => file.options,
        },
        other => {
            return Err(ConfigError::UnsupportedFormat {
                path: format!("<{other}>").into(),
            });
        }
    };
    Ok(flatten_entries(entries))
}

/// Load and flatten an option source, picking the format by extension.
pub fn load_options(path: &Path) -> Result<Vec<SelectOption>, ConfigError> {
    let format = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_ascii_lowercase)
        .filter(|ext| ext == "toml" || ext == "json")
        .ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_options(&raw, &format)
}
