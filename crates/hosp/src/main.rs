use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod output;
mod resolve;

use cli::Cli;
use commands::CommandContext;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let ctx = CommandContext::from_cli(&cli);

    match dispatch::execute(&cli, &ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
