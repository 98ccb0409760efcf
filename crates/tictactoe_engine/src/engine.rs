//! Move selection for the automated "o" player.
//!
//! The policy is a fixed priority list, not a search: win if possible,
//! block an imminent x win, otherwise prefer corners, then the center,
//! then edges. Ties among equally eligible corners or edges are broken
//! uniformly at random with the caller-supplied generator, so there is no
//! process-global randomness anywhere in the crate.

use crate::rules::winning_cell;
use crate::types::{Board, Cell, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, warn};

/// The four corner positions.
pub const CORNERS: [usize; 4] = [1, 3, 7, 9];

/// The four edge positions.
pub const EDGES: [usize; 4] = [2, 4, 6, 8];

/// The center position.
pub const CENTER: usize = 5;

/// Selects the position for o's next move, if any cell is open.
///
/// Rules in strict priority order; the first that yields a position wins:
/// complete an o line, block a completed-but-one x line, take a random
/// empty corner, take the center, take a random empty edge.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    if let Some(pos) = winning_cell(board, Player::O) {
        debug!(pos, "winning move available");
        return Some(pos);
    }
    if let Some(pos) = winning_cell(board, Player::X) {
        debug!(pos, "blocking x");
        return Some(pos);
    }
    if let Some(pos) = choose_open(board, &CORNERS, rng) {
        debug!(pos, "taking a corner");
        return Some(pos);
    }
    if board.is_empty(CENTER) {
        debug!(pos = CENTER, "taking the center");
        return Some(CENTER);
    }
    if let Some(pos) = choose_open(board, &EDGES, rng) {
        debug!(pos, "taking an edge");
        return Some(pos);
    }
    None
}

/// Picks uniformly at random among the empty positions of `group`.
fn choose_open<R: Rng + ?Sized>(board: &Board, group: &[usize], rng: &mut R) -> Option<usize> {
    let open: Vec<usize> = group
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    open.choose(rng).copied()
}

/// Applies o's next move to `board` and returns the wire string.
///
/// Precondition: the board passed [`validate`](crate::validate()), so at
/// least one cell is open and a move is always found. A full board is
/// returned unchanged rather than treated as an error; the condition is
/// unreachable behind the validator.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn play<R: Rng + ?Sized>(mut board: Board, rng: &mut R) -> String {
    match select_move(&board, rng) {
        // Selected positions come from the fixed line and group tables,
        // so the set cannot miss the board.
        Some(pos) => board.set(pos, Cell::Occupied(Player::O)).unwrap(),
        None => warn!("no empty cell to move into, returning board unchanged"),
    }
    board.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_wins_when_one_cell_short() {
        // o holds column (1,4,7) but for position 1.
        assert_eq!(select_move(&board(" xxo  o  "), &mut rng()), Some(1));
        assert_eq!(play(board(" xxo  o  "), &mut rng()), "oxxo  o  ");
    }

    #[test]
    fn test_win_beats_block() {
        // x would win at 3, o at 4; the win rule runs first.
        let b = board("xx  oo   ");
        assert_eq!(winning_cell(&b, Player::X), Some(3));
        assert_eq!(select_move(&b, &mut rng()), Some(4));
    }

    #[test]
    fn test_block_beats_corner() {
        // No o win anywhere; x threatens row (1,2,3) at 3 while corners
        // 7 and 9 sit open.
        assert_eq!(select_move(&board("xx  o    "), &mut rng()), Some(3));
    }

    #[test]
    fn test_prefers_open_corner() {
        let mut r = rng();
        let pos = select_move(&board("    x    "), &mut r).unwrap();
        assert!(CORNERS.contains(&pos));
    }

    #[test]
    fn test_corner_choice_is_seed_deterministic() {
        let first = play(board("    x    "), &mut rng());
        let second = play(board("    x    "), &mut rng());
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_open_corner_is_forced() {
        // Corners 1, 3, 7 taken without forming any threat; 9 remains.
        let b = board("xox   ox ");
        assert_eq!(select_move(&b, &mut rng()), Some(9));
    }

    #[test]
    fn test_takes_center_when_corners_gone() {
        // All corners occupied, every line mixed, center open.
        assert_eq!(select_move(&board("xox   oxo"), &mut rng()), Some(5));
    }

    #[test]
    fn test_takes_edge_when_corners_and_center_gone() {
        // Corners and center occupied, edges 4 and 6 open, no threats.
        let mut r = rng();
        let pos = select_move(&board("xox x oxo"), &mut r).unwrap();
        assert!(pos == 4 || pos == 6);
    }

    #[test]
    fn test_single_open_edge_is_forced() {
        // Corners and center taken, edges 2, 4, and 8 taken, no line at
        // stake for either side; 6 remains.
        let b = board("xoxxo oxo");
        assert_eq!(select_move(&b, &mut rng()), Some(6));
    }

    #[test]
    fn test_full_board_is_left_unchanged() {
        assert_eq!(play(board("oxoxooxox"), &mut rng()), "oxoxooxox");
    }

    #[test]
    fn test_play_changes_exactly_one_cell() {
        for s in ["         ", "x        ", " xxo  o  ", "xox   ox "] {
            let after = play(board(s), &mut rng());
            assert_eq!(after.len(), 9);
            let changed: Vec<usize> = s
                .chars()
                .zip(after.chars())
                .enumerate()
                .filter(|(_, (b, a))| b != a)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(changed.len(), 1, "exactly one cell changes for {s:?}");
            let idx = changed[0];
            assert_eq!(s.as_bytes()[idx], b' ');
            assert_eq!(after.as_bytes()[idx], b'o');
        }
    }
}
