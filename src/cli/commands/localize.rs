use anyhow::Result;

use super::super::args::LocalizeCommand;
use super::{CommandResult, CommandSummary};
use crate::{
    config::Config,
    core::{self, LocalizeOptions},
};

pub fn localize(cmd: LocalizeCommand) -> Result<CommandResult> {
    let options = LocalizeOptions {
        source_directory: cmd.source_directory,
        target_file_path: cmd.target_file_path,
        verbose: !cmd.quiet,
    };

    let summary = core::localize(&options, &Config::default())?;

    Ok(CommandResult {
        summary: CommandSummary::Localize(summary),
    })
}
