use crate::core::LocalizeSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Localize(LocalizeSummary),
}

/// Result of running a haf-tools command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
