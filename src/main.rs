//! ctm - a task manager CLI for contest-style C++ workflows
//!
//! ctm provides:
//! - Numbered task file scaffolding from naming templates
//! - Single-task generation with identical validation
//! - Merging of discovered task files into one annotated solution file

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod core;
mod error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
