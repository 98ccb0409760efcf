//! Tic-tac-toe move service entry point.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_server::cli::{Cli, Command};
use tictactoe_server::{AppState, REJECT_BODY, app};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host } => serve(host, port).await,
        Command::Play { board, seed } => play_once(&board, seed),
    }
}

/// Run the HTTP server until interrupted.
async fn serve(host: String, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(%host, port, "listening for move requests");
    axum::serve(listener, app(AppState::new())).await?;
    Ok(())
}

/// Answer a single board on stdout and exit.
fn play_once(board: &str, seed: Option<u64>) -> Result<()> {
    match tictactoe_engine::validate(board) {
        Ok(board) => {
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            println!("{}", tictactoe_engine::play(board, &mut rng));
            Ok(())
        }
        Err(reason) => {
            println!("{REJECT_BODY}");
            Err(anyhow::anyhow!(reason))
        }
    }
}
