use std::path::PathBuf;

use crate::{
    core::CheckOutcome,
    issues::{Verbosity, Warning},
};

/// Result of a `check` command.
#[derive(Debug)]
pub struct CheckResult {
    pub outcome: CheckOutcome,
    /// Warnings in emission order.
    pub warnings: Vec<Warning>,
    pub strict: bool,
    pub verbosity: Verbosity,
}

impl CheckResult {
    /// A run fails when the base locale is missing, or when strict mode is
    /// on and at least one warning was recorded.
    pub fn succeeded(&self) -> bool {
        match self.outcome {
            CheckOutcome::Fatal(_) => false,
            CheckOutcome::Completed => !(self.strict && !self.warnings.is_empty()),
        }
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False if the file already existed and was left untouched.
    pub created: bool,
}

/// Result of running transcheck commands
#[derive(Debug)]
pub enum CommandResult {
    Check(CheckResult),
    Init(InitSummary),
}

impl CommandResult {
    pub fn succeeded(&self) -> bool {
        match self {
            CommandResult::Check(result) => result.succeeded(),
            CommandResult::Init(summary) => summary.created,
        }
    }
}
