//! HTTP surface for the tic-tac-toe move engine.
//!
//! One stateless endpoint: `GET /tictactoe?board=<9 chars>`. The board
//! string is validated, o's move is applied, and the updated board comes
//! back as a JSON-encoded string. Any board that fails validation gets a
//! 400 with a fixed text body; game state lives entirely in the query
//! parameter, so the server holds nothing between requests but its RNG.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use tictactoe_engine::{play, validate};
use tracing::{debug, info, instrument, warn};

/// Body returned with every 400 for a board that fails validation.
pub const REJECT_BODY: &str = "Invalid board state!";

/// Shared server state: the RNG behind move tie-breaks.
///
/// The RNG sits behind a mutex so concurrent requests draw from a single
/// stream; seed it and the whole sequence of served moves replays exactly.
#[derive(Debug, Clone)]
pub struct AppState {
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl AppState {
    /// Creates state with an RNG seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: Arc::new(Mutex::new(ChaCha8Rng::from_entropy())),
        }
    }

    /// Creates state with a fixed seed for reproducible move sequences.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Query parameters for the move endpoint.
#[derive(Debug, Deserialize)]
struct BoardQuery {
    /// Current board as a 9-character string.
    board: String,
}

/// Builds the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/tictactoe", get(next_move))
        .with_state(state)
}

/// Handles `GET /tictactoe?board=...`.
#[instrument(skip(state, query), fields(board = %query.board))]
async fn next_move(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<String>, (StatusCode, &'static str)> {
    let board = match validate(&query.board) {
        Ok(board) => board,
        Err(reason) => {
            warn!(%reason, "rejecting board");
            return Err((StatusCode::BAD_REQUEST, REJECT_BODY));
        }
    };
    debug!(grid = %board.grid(), "answering board");

    let played = {
        let mut rng = state.rng.lock().unwrap();
        play(board, &mut *rng)
    };

    info!(played = %played, "move served");
    Ok(Json(played))
}
