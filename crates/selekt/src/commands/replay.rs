//! `selekt replay`: drive the controller through a script of host events.
//!
//! Each step is dispatched the way a UI would dispatch it, including the
//! blur that follows an `EventResponse` asking to relinquish focus. Async
//! fetches settle between steps so every step sees a resolved pool.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;

use selekt_core::{
    EventResponse, InputEvent, Key, OptionEvent, SelectController, SelectOption, Selection,
    Snapshot,
};

use crate::cli::{GlobalOpts, ReplayArgs};
use crate::config;
use crate::error::CliError;
use crate::output;
use crate::script::{self, Step};

use super::util;

/// Everything a replay produced.
#[derive(Debug, Serialize)]
struct ReplayReport {
    steps: usize,
    /// Key selections reported to `on_change`, in order.
    changes: Vec<Selection<String>>,
    snapshot: Arc<Snapshot<SelectOption>>,
}

pub async fn handle(args: ReplayArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let steps = script::parse(&read_script(&args.script)?)?;
    let settings = config::resolve_settings(global)?;
    let select_config = config::select_config(&settings, &args.source)?;
    let catalog = select_config.options.clone();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let select_config = select_config.on_change(move |values, _options| {
        let _ = tx.send(values.clone());
    });
    let mut controller = SelectController::new(select_config);

    for (index, step) in steps.iter().enumerate() {
        apply_step(&mut controller, step, &catalog, settings.multiple)?;
        controller.settle().await;
        debug!(step = index + 1, ?step, "step applied");
    }
    controller.shutdown();

    let mut changes = Vec::new();
    while let Ok(change) = rx.try_recv() {
        changes.push(change);
    }
    let report = ReplayReport {
        steps: steps.len(),
        changes,
        snapshot: controller.snapshot(),
    };

    let out = output::render_single(
        &global.output,
        &report,
        |r| {
            format!(
                "Steps:     {}\nChanges:   {}\n{}",
                r.steps,
                r.changes.len(),
                util::snapshot_detail(&r.snapshot)
            )
        },
        |r| r.snapshot.display_value.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn read_script(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }
    Ok(std::fs::read_to_string(path)?)
}

fn apply_step(
    controller: &mut SelectController<SelectOption>,
    step: &Step,
    catalog: &[SelectOption],
    multiple: bool,
) -> Result<(), CliError> {
    let response = match step {
        Step::Focus => controller.handle_input(InputEvent::Focus),
        Step::Blur => controller.handle_input(InputEvent::Blur),
        Step::Type(text) => controller.handle_input(InputEvent::Change(text.clone())),
        Step::Next => controller.handle_input(InputEvent::KeyDown(Key::ArrowDown)),
        Step::Prev => controller.handle_input(InputEvent::KeyDown(Key::ArrowUp)),
        Step::Enter => controller.handle_input(InputEvent::KeyUp(Key::Enter)),
        Step::Escape => controller.handle_input(InputEvent::KeyUp(Key::Escape)),
        Step::Click(key) => controller.handle_option(key, OptionEvent::PointerDown),
        Step::Default(keys) => {
            controller.set_default(util::key_selection(keys, multiple));
            EventResponse::ignored()
        }
        Step::Set(keys) => {
            controller.set_value(util::resolve_options(keys, catalog, multiple)?);
            EventResponse::ignored()
        }
    };

    // An unfocused element has nothing to blur.
    if response.relinquish_focus && controller.is_focused() {
        controller.handle_input(InputEvent::Blur);
    }
    Ok(())
}
