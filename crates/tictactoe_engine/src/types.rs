//! Core domain types: players, cells, and the board with its wire format.

use std::fmt;
use std::str::FromStr;

/// Number of playable cells on the board.
pub const NUM_CELLS: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player X (the caller).
    X,
    /// Player O (the automated side).
    O,
}

impl Player {
    /// The lowercase wire symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Empty cell, a space on the wire.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Parses a wire symbol. Only lowercase marks and the space are accepted.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Cell::Empty),
            'x' => Some(Cell::Occupied(Player::X)),
            'o' => Some(Cell::Occupied(Player::O)),
            _ => None,
        }
    }

    /// The wire symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// Error parsing a board from its wire string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The string is not exactly nine characters.
    #[display("board string must be 9 characters, got {_0}")]
    WrongLength(usize),
    /// The string contains a character other than `x`, `o`, or space.
    #[display("invalid symbol {_0:?} in board string")]
    InvalidSymbol(char),
}

impl std::error::Error for ParseBoardError {}

/// 3x3 tic-tac-toe board.
///
/// Cells are addressed with 1-based positions 1..=9 in row-major order so
/// the winning-line definitions read like grid coordinates; slot 0 is an
/// unused sentinel, never read or written after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_CELLS + 1],
}

impl Board {
    /// Gets the cell at the given position (1..=9), if it is on the board.
    pub fn get(&self, pos: usize) -> Option<Cell> {
        if (1..=NUM_CELLS).contains(&pos) {
            Some(self.cells[pos])
        } else {
            None
        }
    }

    /// Sets the cell at the given position (1..=9).
    ///
    /// Positions off the board, the sentinel slot 0 included, are rejected.
    pub fn set(&mut self, pos: usize, cell: Cell) -> Result<(), &'static str> {
        if !(1..=NUM_CELLS).contains(&pos) {
            return Err("position out of bounds");
        }
        self.cells[pos] = cell;
        Ok(())
    }

    /// Checks whether the cell at a position is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Positions (1..=9) currently empty, in board order.
    pub fn empty_positions(&self) -> Vec<usize> {
        (1..=NUM_CELLS).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Number of cells occupied by the given player.
    pub fn count(&self, player: Player) -> usize {
        self.cells[1..]
            .iter()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells[1..].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Formats the board as a 3x3 grid for logs.
    pub fn grid(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                out.push(self.cells[row * 3 + col + 1].symbol());
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != NUM_CELLS {
            return Err(ParseBoardError::WrongLength(s.len()));
        }
        let mut cells = [Cell::Empty; NUM_CELLS + 1];
        for (i, c) in s.chars().enumerate() {
            cells[i + 1] = Cell::from_symbol(c).ok_or(ParseBoardError::InvalidSymbol(c))?;
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    /// Serializes positions 1..=9 back to the 9-character wire string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells[1..] {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}
