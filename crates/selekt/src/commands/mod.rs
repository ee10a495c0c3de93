//! Command dispatch: bridges CLI args -> controller runs -> output formatting.

pub mod config_cmd;
pub mod filter;
pub mod replay;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a command to the appropriate handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Filter(args) => filter::handle(args, global).await,
        Command::Replay(args) => replay::handle(args, global).await,
        Command::Config(args) => config_cmd::handle(args, global),
    }
}
