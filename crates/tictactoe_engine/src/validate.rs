//! Board-state validation gating the move engine.
//!
//! A board is safe to play when it parses cleanly, nobody has won yet, the
//! mark counts are reachable by alternating play, and at least one cell is
//! open. Everything here runs before any mutation, so a rejected request
//! never touches a board.

use crate::rules::winner;
use crate::types::{Board, ParseBoardError, Player};
use tracing::{debug, instrument};

/// Why a board string was rejected.
///
/// The HTTP boundary collapses all of these to a 400; the variants exist so
/// the reject reason can be logged server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidBoard {
    /// The string does not parse as nine board symbols.
    #[display("{_0}")]
    Malformed(ParseBoardError),
    /// One side already holds a completed line.
    #[display("game already won by {_0}")]
    AlreadyWon(Player),
    /// Mark counts unreachable by alternating play.
    #[display("turn imbalance: {x} x's vs {o} o's")]
    TurnImbalance {
        /// Number of x marks on the board.
        x: usize,
        /// Number of o marks on the board.
        o: usize,
    },
    /// No empty cell remains to move into.
    #[display("board is full")]
    Full,
}

impl std::error::Error for InvalidBoard {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidBoard::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseBoardError> for InvalidBoard {
    fn from(err: ParseBoardError) -> Self {
        InvalidBoard::Malformed(err)
    }
}

/// Checks that a board string is a legal, in-progress game state.
///
/// On success returns the parsed [`Board`], ready for the move engine.
/// Length and symbol checks run first, so the line scan and the count
/// arithmetic below never see a malformed board.
#[instrument]
pub fn validate(input: &str) -> Result<Board, InvalidBoard> {
    let board: Board = input.parse()?;

    if let Some(player) = winner(&board) {
        return Err(InvalidBoard::AlreadyWon(player));
    }

    let x = board.count(Player::X);
    let o = board.count(Player::O);
    if x.abs_diff(o) > 1 {
        return Err(InvalidBoard::TurnImbalance { x, o });
    }

    if board.is_full() {
        return Err(InvalidBoard::Full);
    }

    debug!(board = %board, "board accepted");
    Ok(board)
}

/// Whether a board string is safe to extend with a move.
#[instrument]
pub fn is_safe_to_play(input: &str) -> bool {
    validate(input).is_ok()
}
