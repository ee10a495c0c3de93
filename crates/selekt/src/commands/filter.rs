//! `selekt filter`: resolve one query and print the pool.

use selekt_core::SelectController;

use crate::cli::{FilterArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::util::{self, OptionRow};

pub async fn handle(args: FilterArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let settings = config::resolve_settings(global)?;
    let select_config = config::select_config(&settings, &args.source)?;
    let mut controller = SelectController::new(select_config);

    controller.set_search(args.query);
    controller.settle().await;
    let snapshot = controller.snapshot();
    controller.shutdown();

    let out = if args.flat {
        output::render_list(
            &global.output,
            snapshot.pool(),
            |option| OptionRow::new(option, &snapshot),
            |option| option.value.clone(),
        )?
    } else {
        output::render_single(
            &global.output,
            &snapshot.options,
            |_| util::pool_table(&snapshot),
            |entries| util::entry_keys(entries).join("\n"),
        )?
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
