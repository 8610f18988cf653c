//! Lucky Vault - CLI
//!
//! Plays one game of Lucky Vault (Country Edition) on the terminal, using the
//! `data/` directory under the working directory.

use anyhow::{Context, Result};
use clap::Parser;
use lucky_vault::error::GameError;
use lucky_vault::game::{GamePaths, GameSession};
use lucky_vault::output::messages::diagnostic;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lucky_vault",
    about = "Guess the secret country. Type QUIT to exit.",
    version,
    author
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let category = err
                .downcast_ref::<GameError>()
                .map_or("Unexpected error", GameError::category);
            eprintln!("{}", diagnostic(category, &format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut session = GameSession::new(GamePaths::default(), rand::rng());

    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(stdin.lock(), stdout.lock())
        .context("game session ended abnormally")?;

    Ok(())
}
