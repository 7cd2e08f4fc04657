//! List command implementation.
//!
//! The `step-sequencer list` command lists demos and their steps.

use std::io::Write;

use crate::cli::args::ListArgs;
use crate::demo::Demo;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        for demo in Demo::ALL {
            if self.args.names_only {
                writeln!(out, "{}", demo.name())?;
                continue;
            }

            let steps: Vec<&str> = demo.steps().iter().map(|s| s.as_str()).collect();
            writeln!(out, "{}", demo.name())?;
            writeln!(out, "    {}", steps.join(" → "))?;
        }

        Ok(CommandResult::success())
    }
}
