//! wordbidi CLI - reorder bidirectional text and words from the command line

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use wordbidi::config::Config;
use wordbidi::Result;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env()?;
    log::debug!("effective configuration: {config:?}");

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Vis(args) => commands::vis::run(args, &config),
        Commands::Words(args) => commands::words::run(args, &config),
        Commands::Map(args) => commands::map::run(args),
        Commands::Batch(args) => commands::batch::run(args, &config),
    }
}
