//! Win detection over the fixed line set.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// The 8 winning lines in canonical scan order: rows top to bottom, columns
/// left to right, then the two diagonals.
///
/// Win/block scans take the first qualifying line, so this order is
/// load-bearing for tie-breaks.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    // Columns
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    // Diagonals
    [3, 5, 7],
    [1, 5, 9],
];

/// Returns the player holding a completed line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Some(Cell::Occupied(player)) = board.get(a) {
            let mark = Cell::Occupied(player);
            if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                return Some(player);
            }
        }
    }
    None
}

/// Finds the empty cell that would complete a line for `player`.
///
/// Scans [`LINES`] in canonical order and returns the open cell of the
/// first line whose other two cells already hold the player's mark.
#[instrument(skip(board))]
pub fn winning_cell(board: &Board, player: Player) -> Option<usize> {
    let mark = Cell::Occupied(player);
    for line in LINES {
        let held = line.iter().filter(|&&pos| board.get(pos) == Some(mark)).count();
        if held == 2 {
            if let Some(&open) = line.iter().find(|&&pos| board.is_empty(pos)) {
                return Some(open);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&board("         ")), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("xxxo o   ")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("ox ox o  ")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(winner(&board("x ooxo  x")), Some(Player::X));
        assert_eq!(winner(&board("xxo o ox ")), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("xx o o   ")), None);
    }

    #[test]
    fn test_winning_cell_finds_open_slot() {
        // o holds 4 and 7; column (1,4,7) is open at 1.
        assert_eq!(winning_cell(&board(" xxo  o x"), Player::O), Some(1));
        // x holds 2 and 3; row (1,2,3) is open at 1.
        assert_eq!(winning_cell(&board(" xx   o x"), Player::X), Some(1));
    }

    #[test]
    fn test_winning_cell_ignores_blocked_lines() {
        // x holds 1 and 2 but o sits at 3; no other x pair is one short.
        assert_eq!(winning_cell(&board("xxo o    "), Player::X), None);
    }

    #[test]
    fn test_winning_cell_takes_first_line_in_canonical_order() {
        // o could finish row (1,2,3) at 3 or diagonal (1,5,9) at 9; the row
        // is scanned first.
        assert_eq!(winning_cell(&board("oo xo xx "), Player::O), Some(3));
    }

    #[test]
    fn test_winning_cell_none_without_pair() {
        // Neither side holds two cells of any one line.
        assert_eq!(winning_cell(&board("x o  x  o"), Player::X), None);
        assert_eq!(winning_cell(&board("x o  x  o"), Player::O), None);
    }
}
