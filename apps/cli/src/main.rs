mod cli;
mod config;
mod error;
mod main_lib;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::CliError;
use crate::main_lib::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so it can supply ETH2USD_* fallbacks
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::from_cli(cli)?;
    main_lib::run(&config).await?;
    Ok(())
}
