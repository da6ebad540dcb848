//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `localize`: Extract localized text from C# and XAML sources into a PO catalog

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn quiet(&self) -> bool {
        match &self.command {
            Some(Command::Localize(cmd)) => cmd.quiet,
            None => false,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract localized text from a source directory
    Localize(LocalizeCommand),
}

#[derive(Debug, Args)]
pub struct LocalizeCommand {
    /// Path to the directory that contains all sources
    #[arg(value_name = "SOURCE_DIRECTORY")]
    pub source_directory: PathBuf,

    /// Path to the file that is generated
    #[arg(value_name = "TARGET_FILE_PATH")]
    pub target_file_path: PathBuf,

    /// Suppress verbose output
    #[arg(short, long)]
    pub quiet: bool,
}
