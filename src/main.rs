mod cli;
mod commands;
mod console;
use clap::Parser as _;
use cli::CliArgs;
use console::{Console, ConsoleSession};
use std::{error::Error, io, sync::Arc};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = gsb::config::load_config(args.config_file)?;
    let parser = commands::build_parser(&config)?;

    let session = ConsoleSession::new(Box::new(io::stdout()));
    let mut console = Console::new(session, Arc::new(parser));
    console.run(io::stdin().lock())?;
    Ok(())
}
