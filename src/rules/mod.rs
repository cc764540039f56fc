//! Game rules for k-in-a-row tic-tac-toe
//!
//! - [`line`]: the four candidate lines through a cell
//! - [`win`]: k-run detection, win/draw evaluation, and one-move lookahead

pub mod line;
pub mod win;

// Re-exports for convenient access
pub use line::{lines_through, Direction, Line};
pub use win::{check_line, check_win, winning_cells, GameResult};
