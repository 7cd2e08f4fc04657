//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};

/// Run built-in step sequences and inspect how they halt.
#[derive(Debug, Parser)]
#[command(name = "step-sequencer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a demo sequence
    Run(RunArgs),

    /// List demo sequences and their steps
    List(ListArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Demo to run (arithmetic, order, counter, checked)
    pub demo: String,

    /// Initial accumulator value
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub initial: i64,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Print names only
    #[arg(long)]
    pub names_only: bool,
}
