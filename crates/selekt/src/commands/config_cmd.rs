//! Config subcommand handlers.

use selekt_config::Settings;
use tabled::Tabled;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Setting")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn rows(settings: &Settings) -> Vec<SettingRow> {
    let row = |name, value: String| SettingRow { name, value };
    vec![
        row("search", settings.search.to_string()),
        row("multiple", settings.multiple.to_string()),
        row("disabled", settings.disabled.to_string()),
        row("close_on_select", settings.close_on_select.to_string()),
        row("fuzzy_search", settings.fuzzy_search.to_string()),
        row("debounce_ms", settings.debounce_ms.to_string()),
        row("delimiter", format!("{:?}", settings.delimiter)),
    ]
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let settings = config::resolve_settings(global)?;
            let out = output::render_single(
                &global.output,
                &settings,
                |s| output::render_table(&rows(s)),
                |s| {
                    rows(s)
                        .into_iter()
                        .map(|r| format!("{}={}", r.name, r.value))
                        .collect::<Vec<_>>()
                        .join("\n")
                },
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            let path = global.config.clone().unwrap_or_else(config::config_path);
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }
    }
}
