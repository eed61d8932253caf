//! Command dispatch: routes parsed CLI commands to their handlers.
//!
//! Config and completions run without touching the network; everything else
//! gets a [`HospitalClient`] built from the resolved server URL.

use hospital_api_rs::client::HospitalClient;

use crate::cli::{Cli, Commands};
use crate::commands::{self, CommandContext, Result};

/// Executes the parsed command.
pub async fn execute(cli: &Cli, ctx: &CommandContext) -> Result<()> {
    // Commands that need no server connection.
    match &cli.command {
        Commands::Config { command } => {
            return commands::config::execute(ctx, command.as_ref());
        }
        Commands::Completions { shell } => {
            return commands::completions::execute(*shell);
        }
        _ => {}
    }

    let server = commands::config::resolve_server(cli)?;
    if ctx.verbose {
        eprintln!("server: {server}");
    }
    let client = HospitalClient::new(server);

    match &cli.command {
        Commands::Doctors { command } => commands::doctors::execute(ctx, &client, command).await,
        Commands::Patients { command } => commands::patients::execute(ctx, &client, command).await,
        Commands::Nurses { command } => commands::nurses::execute(ctx, &client, command).await,
        Commands::Departments { command } => {
            commands::departments::execute(ctx, &client, command).await
        }
        Commands::Appointments { command } => {
            commands::appointments::execute(ctx, &client, command).await
        }
        Commands::Config { .. } | Commands::Completions { .. } => unreachable!("handled above"),
    }
}
