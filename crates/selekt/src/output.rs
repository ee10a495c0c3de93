//! Renders option pools, snapshots and settings for `--output`.
//!
//! Tables go through `tabled`; `json`, `json-compact` and `yaml` serialize
//! the same values a renderer would receive. `plain` prints option keys,
//! one per line, so the output pipes cleanly into other tools.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a slice of records. `to_row` builds the table row for each
/// record and `key_of` gives its line in plain mode.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    key_of: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    Ok(match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false)?,
        OutputFormat::JsonCompact => render_json(data, true)?,
        OutputFormat::Yaml => render_yaml(data)?,
        OutputFormat::Plain => data.iter().map(&key_of).collect::<Vec<_>>().join("\n"),
    })
}

/// Render one value, such as a replay snapshot. In table mode `detail`
/// lays out its own sections.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail: impl Fn(&T) -> String,
    plain: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize + ?Sized,
{
    Ok(match format {
        OutputFormat::Table => detail(data),
        OutputFormat::Json => render_json(data, false)?,
        OutputFormat::JsonCompact => render_json(data, true)?,
        OutputFormat::Yaml => render_yaml(data)?,
        OutputFormat::Plain => plain(data),
    })
}

/// Write rendered output to stdout unless `--quiet` is set.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

pub(crate) fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(rendered)
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Tabled)]
    struct Row {
        key: String,
        label: String,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                key: "a".into(),
                label: "Alpha".into(),
            },
            Row {
                key: "b".into(),
                label: "Beta".into(),
            },
        ]
    }

    fn render(format: &OutputFormat) -> String {
        render_list(
            format,
            &rows(),
            |r| Row {
                key: r.key.clone(),
                label: r.label.clone(),
            },
            |r| r.key.clone(),
        )
        .unwrap()
    }

    #[test]
    fn plain_emits_one_key_per_line() {
        assert_eq!(render(&OutputFormat::Plain), "a\nb");
    }

    #[test]
    fn compact_json_is_single_line() {
        let out = render(&OutputFormat::JsonCompact);
        assert_eq!(
            out,
            r#"[{"key":"a","label":"Alpha"},{"key":"b","label":"Beta"}]"#
        );
    }

    #[test]
    fn table_has_headers_and_values() {
        let out = render(&OutputFormat::Table);
        assert!(out.contains("label"));
        assert!(out.contains("Beta"));
    }

    #[test]
    fn yaml_lists_items() {
        let out = render(&OutputFormat::Yaml);
        assert!(out.contains("- key: a"));
    }
}
