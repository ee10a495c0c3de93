//! Interaction scripts for `selekt replay`.
//!
//! One step per line. Blank lines and lines starting with `#` are skipped;
//! `type` keeps everything after the first space verbatim so queries may
//! contain spaces.

use std::str::FromStr;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Focus,
    Blur,
    /// Replace the input text.
    Type(String),
    Next,
    Prev,
    Enter,
    Escape,
    /// Pointer-down on the option with this key.
    Click(String),
    /// Apply a new default value.
    Default(Vec<String>),
    /// Force the value, skipping the reducer.
    Set(Vec<String>),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let step = match word.to_ascii_lowercase().as_str() {
            "focus" => Self::Focus,
            "blur" => Self::Blur,
            "type" => Self::Type(rest.to_owned()),
            "next" | "down" => Self::Next,
            "prev" | "up" => Self::Prev,
            "enter" => Self::Enter,
            "escape" | "esc" => Self::Escape,
            "click" => {
                let key = rest.trim();
                if key.is_empty() {
                    return Err("click needs an option key".into());
                }
                Self::Click(key.to_owned())
            }
            "default" => Self::Default(key_list(rest)),
            "set" => Self::Set(key_list(rest)),
            other => return Err(format!("unknown step '{other}'")),
        };

        let takes_argument = matches!(
            step,
            Self::Type(_) | Self::Click(_) | Self::Default(_) | Self::Set(_)
        );
        if !takes_argument && !rest.trim().is_empty() {
            return Err(format!("'{word}' takes no argument"));
        }
        Ok(step)
    }
}

fn key_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse a whole script, reporting the first bad line (1-based).
pub fn parse(script: &str) -> Result<Vec<Step>, CliError> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| {
            line.trim_start().parse().map_err(|reason| CliError::Script {
                line: index + 1,
                reason,
            })
        })
        .collect()
}
