//! Configuration for selekt controllers.
//!
//! Behavior settings layered from defaults, a TOML file, and `SELEKT_*`
//! environment variables, plus loading of hand-written option sources.
//! The CLI applies its own flag overrides on top of the loaded
//! [`Settings`].

mod error;
mod source;

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use selekt_core::{DEFAULT_DELIMITER, SelectConfig, SelectItem};

pub use error::ConfigError;
pub use source::{OptionFile, load_options, parse_options};

/// Prefix for environment overrides, e.g. `SELEKT_DEBOUNCE_MS=150`.
pub const ENV_PREFIX: &str = "SELEKT_";

// ── Settings ────────────────────────────────────────────────────────

/// Plain-data controller behavior. Async sources and callbacks are
/// attached in code, not configured here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub search: bool,
    pub multiple: bool,
    pub disabled: bool,
    pub close_on_select: bool,
    /// Fuzzy-rank the static source; `false` means substring matching.
    pub fuzzy_search: bool,
    /// Delay before an async fetch is issued.
    pub debounce_ms: u64,
    pub delimiter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search: false,
            multiple: false,
            disabled: false,
            close_on_select: true,
            fuzzy_search: true,
            debounce_ms: 0,
            delimiter: DEFAULT_DELIMITER.to_owned(),
        }
    }
}

impl Settings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Copy every setting onto a controller config, keeping whatever
    /// source, callbacks, or default value it already carries.
    pub fn apply<T: SelectItem>(&self, config: SelectConfig<T>) -> SelectConfig<T> {
        config
            .searchable(self.search)
            .multiple(self.multiple)
            .disabled(self.disabled)
            .close_on_select(self.close_on_select)
            .fuzzy_search(self.fuzzy_search)
            .debounce(self.debounce())
            .delimiter(self.delimiter.clone())
    }

    /// Fresh controller config over `options`.
    pub fn to_select_config<T: SelectItem>(&self, options: Vec<T>) -> SelectConfig<T> {
        self.apply(SelectConfig::new(options))
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the settings file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("rs", "selekt", "selekt").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("selekt");
    p
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load settings from defaults, a TOML file, and the environment.
///
/// With `explicit` set the file must exist; otherwise the platform path is
/// used when present and silently skipped when not.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => path.to_path_buf(),
        None => config_path(),
    };

    let settings: Settings = Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()?;
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;
    use selekt_core::SelectOption;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "")?;
            let settings = load_settings(Some(Path::new("config.toml"))).unwrap();
            assert_eq!(settings, Settings::default());
            Ok(())
        });
    }

    #[test]
    fn file_then_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "selekt.toml",
                r#"
                    multiple = true
                    debounce_ms = 250
                    delimiter = " / "
                "#,
            )?;
            jail.set_env("SELEKT_DEBOUNCE_MS", "40");
            jail.set_env("SELEKT_FUZZY_SEARCH", "false");

            let settings = load_settings(Some(Path::new("selekt.toml"))).unwrap();
            assert!(settings.multiple);
            assert!(!settings.fuzzy_search);
            assert_eq!(settings.debounce_ms, 40);
            assert_eq!(settings.delimiter, " / ");
            assert!(settings.close_on_select);
            Ok(())
        });
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load_settings(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn malformed_value_surfaces_figment_error() {
        Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "multiple = \"often\"")?;
            let err = load_settings(Some(Path::new("bad.toml"))).unwrap_err();
            assert!(matches!(err, ConfigError::Figment(_)));
            Ok(())
        });
    }

    #[test]
    fn apply_carries_every_setting() {
        let settings = Settings {
            search: true,
            multiple: true,
            disabled: false,
            close_on_select: false,
            fuzzy_search: false,
            debounce_ms: 75,
            delimiter: "; ".into(),
        };
        let config = settings.to_select_config(vec![SelectOption::new("a", "Alpha")]);
        assert!(config.search);
        assert!(config.multiple);
        assert!(!config.close_on_select);
        assert!(!config.fuzzy_search);
        assert_eq!(config.debounce, Duration::from_millis(75));
        assert_eq!(config.delimiter, "; ");
        assert_eq!(config.options.len(), 1);
    }

    #[test]
    fn config_path_ends_in_config_toml() {
        assert!(config_path().ends_with("config.toml"));
    }
}
