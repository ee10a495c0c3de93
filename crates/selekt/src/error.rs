//! CLI error types with miette diagnostics.
//!
//! Maps `ConfigError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use selekt_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────

    #[error("Settings file not found: {path}")]
    #[diagnostic(
        code(selekt::no_config),
        help(
            "Check the --config path, or drop the flag to use the default location.\n\
             Settings can also come from SELEKT_* environment variables."
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(selekt::config))]
    Config(ConfigError),

    // ── Option sources ───────────────────────────────────────────────

    #[error("Unsupported option source: {path}")]
    #[diagnostic(
        code(selekt::unsupported_source),
        help("Option sources must be .toml or .json files.")
    )]
    UnsupportedSource { path: String },

    #[error("No option with key '{key}'")]
    #[diagnostic(
        code(selekt::unknown_option),
        help("Run: selekt filter '' --options <FILE> --output plain to list keys")
    )]
    UnknownOption { key: String },

    // ── Scripts ──────────────────────────────────────────────────────

    #[error("Script line {line}: {reason}")]
    #[diagnostic(
        code(selekt::script),
        help(
            "Steps: focus, blur, type <text>, next, prev, enter, escape,\n\
             click <key>, default <k,..>, set <k,..>. Lines starting with # are skipped."
        )
    )]
    Script { line: usize, reason: String },

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(selekt::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(selekt::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoConfig { .. } | Self::UnsupportedSource { .. } | Self::Script { .. } => {
                exit_code::USAGE
            }
            Self::UnknownOption { .. } => exit_code::NOT_FOUND,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound { path } => CliError::NoConfig {
                path: path.display().to_string(),
            },
            ConfigError::UnsupportedFormat { path } => CliError::UnsupportedSource {
                path: path.display().to_string(),
            },
            other => CliError::Config(other),
        }
    }
}
