//! Completions command implementation.
//!
//! Generates shell completion scripts to stdout.

use clap::CommandFactory;
use clap_complete::Shell;

use super::Result;
use crate::cli::Cli;

/// Executes the completions command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "hosp", &mut std::io::stdout());
    Ok(())
}
