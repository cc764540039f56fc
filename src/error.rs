//! Error types for the tic-tac-toe engine

use thiserror::Error;

use crate::board::{Coord, Mark};

/// Errors returned by board and engine operations.
///
/// Every error is recoverable: a rejected call leaves the board and the
/// engine state exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("coordinate ({row}, {col}) is outside a {dimension}x{dimension} board")]
    InvalidCoordinate {
        row: usize,
        col: usize,
        dimension: usize,
    },

    #[error("cell index {index} is out of range (board has {cells} cells)")]
    InvalidIndex { index: usize, cells: usize },

    #[error("cell {coord} is already occupied by {mark}")]
    CellOccupied { coord: Coord, mark: Mark },

    #[error("game is over, restart to play again")]
    GameOver,

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("players can only choose X or O")]
    InvalidSymbol,

    #[error("choose X or O before making a move")]
    SymbolNotChosen,

    #[error("symbol already chosen for this game")]
    SymbolAlreadyChosen,
}

impl Error {
    /// True for the errors that reject a move target (bad coordinate or taken cell)
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            Error::InvalidCoordinate { .. } | Error::InvalidIndex { .. } | Error::CellOccupied { .. }
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
