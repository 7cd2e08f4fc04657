//! Run command implementation.
//!
//! The `step-sequencer run` command runs one demo sequence and prints its
//! report. Exit code is 0 when the sequence completes and 2 when it halts.

use std::io::Write;

use tracing::debug;

use crate::cli::args::RunArgs;
use crate::demo::Demo;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// Exit code used when the sequence halted.
pub const HALTED_EXIT_CODE: i32 = 2;

/// The run command implementation.
pub struct RunCommand {
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(args: RunArgs) -> Self {
        Self { args }
    }
}

impl Command for RunCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let demo = Demo::from_name(&self.args.demo)?;
        debug!("Running demo '{}' from {}", demo.name(), self.args.initial);

        let report = demo.run(self.args.initial)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", json)?;
        } else {
            writeln!(out, "{}", report.summary_line())?;
        }

        if report.halted {
            Ok(CommandResult::failure(HALTED_EXIT_CODE))
        } else {
            Ok(CommandResult::success())
        }
    }
}
