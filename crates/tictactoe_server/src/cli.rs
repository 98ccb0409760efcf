//! Command-line interface for the tic-tac-toe server.

use clap::{Parser, Subcommand};

/// Tic-tac-toe move service
#[derive(Parser, Debug)]
#[command(name = "tictactoe_server")]
#[command(about = "HTTP service answering boards with o's next move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Answer a single board on stdout and exit
    Play {
        /// Current board as a 9-character string
        board: String,

        /// Fixed seed for reproducible move selection
        #[arg(long)]
        seed: Option<u64>,
    },
}
