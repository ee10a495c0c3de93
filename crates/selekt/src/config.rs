//! CLI-specific configuration wrappers.
//!
//! Delegates loading to `selekt-config` and layers `GlobalOpts` flag
//! overrides on top. Also builds the controller config for a source,
//! including the simulated async fetch used by `--latency-ms`.

use std::sync::Arc;
use std::time::Duration;

use selekt_config::Settings;
use selekt_core::{FetchError, Matcher, SelectConfig, SelectOption, fetch_fn};

use crate::cli::{GlobalOpts, SourceArgs};
use crate::error::CliError;

pub use selekt_config::config_path;

/// Load settings from file + env, then apply flag overrides.
pub fn resolve_settings(global: &GlobalOpts) -> Result<Settings, CliError> {
    let mut settings = selekt_config::load_settings(global.config.as_deref())?;

    if global.multiple {
        settings.multiple = true;
    }
    if global.search {
        settings.search = true;
    }
    if global.exact {
        settings.fuzzy_search = false;
    }
    if global.keep_open {
        settings.close_on_select = false;
    }
    if let Some(ref delimiter) = global.delimiter {
        settings.delimiter.clone_from(delimiter);
    }
    if let Some(ms) = global.debounce_ms {
        settings.debounce_ms = ms;
    }
    Ok(settings)
}

/// Load the option source and build a controller config over it.
pub fn select_config(
    settings: &Settings,
    source: &SourceArgs,
) -> Result<SelectConfig<SelectOption>, CliError> {
    let options = selekt_config::load_options(&source.options)?;
    tracing::debug!(path = %source.options.display(), count = options.len(), "option source loaded");

    let config = settings.to_select_config(options);
    Ok(match source.latency_ms {
        Some(latency) => {
            let matcher = config.matcher();
            let timeout = source.fetch_timeout_ms;
            config.with_fetch(simulated_fetch(matcher, latency, timeout))
        }
        None => config,
    })
}

/// A fetch that answers with the matcher's result after `latency_ms`,
/// failing with `FetchError::Timeout` past `timeout_ms`.
fn simulated_fetch(
    matcher: Matcher<SelectOption>,
    latency_ms: u64,
    timeout_ms: Option<u64>,
) -> selekt_core::FetchFn<SelectOption> {
    fetch_fn(move |query: String, source: Arc<[SelectOption]>| {
        let matcher = matcher.clone();
        async move {
            let work = async {
                tokio::time::sleep(Duration::from_millis(latency_ms)).await;
                Ok::<_, FetchError>(matcher.filter(&source, &query))
            };
            match timeout_ms {
                Some(ms) => tokio::time::timeout(Duration::from_millis(ms), work)
                    .await
                    .unwrap_or(Err(FetchError::Timeout { timeout_ms: ms })),
                None => work.await,
            }
        }
    })
}
