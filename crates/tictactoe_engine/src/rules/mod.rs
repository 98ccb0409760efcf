//! Board geometry rules: the fixed winning lines and scans over them.
//!
//! Rules are pure functions over a [`Board`](crate::Board), separated from
//! board storage so the validator and the move engine share one line set.

mod win;

pub use win::{LINES, winner, winning_cell};
