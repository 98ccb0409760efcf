//! Pure tic-tac-toe board validation and move selection.
//!
//! Boards travel as 9-character strings in row-major order, lowercase `x`
//! and `o` with spaces for empty cells. [`validate`](validate()) gates
//! every request: it rejects malformed strings and states no alternating
//! game could reach. [`play`] then applies exactly one move for "o" using
//! a fixed heuristic (win, block, corner, center, edge) and hands the
//! board string back.
//!
//! Randomness is injected by the caller, which keeps the crate free of
//! global state and makes tie-breaks reproducible under test:
//!
//! ```
//! use rand::SeedableRng;
//! use tictactoe_engine::{play, validate};
//!
//! let board = validate(" xxo  o  ").expect("legal in-progress board");
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! // o completes the 1-4-7 column; no coin flip involved.
//! assert_eq!(play(board, &mut rng), "oxxo  o  ");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod rules;
mod types;
mod validate;

pub use engine::{CENTER, CORNERS, EDGES, play, select_move};
pub use rules::{LINES, winner, winning_cell};
pub use types::{Board, Cell, NUM_CELLS, ParseBoardError, Player};
pub use validate::{InvalidBoard, is_safe_to_play, validate};
