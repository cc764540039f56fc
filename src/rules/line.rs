//! Candidate lines through a cell
//!
//! Every line is built in closed form (an origin plus an extent), so the
//! geometry can be tested without any board state.

use crate::board::Coord;

/// Line directions, in the order win detection visits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right
    Row,
    /// Top to bottom
    Column,
    /// Top-left to bottom-right (slope +1)
    Diagonal,
    /// Top-right to bottom-left (slope -1)
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Row,
        Direction::Column,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];
}

/// Maximal in-bounds run of cells along one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub direction: Direction,
    pub cells: Vec<Coord>,
}

impl Line {
    /// Build the line through `coord` on a `dimension`-sided board.
    ///
    /// `coord` must lie on the board.
    pub fn through(coord: Coord, direction: Direction, dimension: usize) -> Self {
        debug_assert!(coord.is_within(dimension));
        let Coord { row, col } = coord;

        let cells = match direction {
            Direction::Row => (0..dimension).map(|c| Coord::new(row, c)).collect(),
            Direction::Column => (0..dimension).map(|r| Coord::new(r, col)).collect(),
            Direction::Diagonal => {
                let shift = row.min(col);
                let origin = Coord::new(row - shift, col - shift);
                let len = dimension - origin.row.max(origin.col);
                (0..len)
                    .map(|i| Coord::new(origin.row + i, origin.col + i))
                    .collect()
            }
            Direction::AntiDiagonal => {
                // Cells on this line share row + col. The origin is the end
                // nearest the top or right edge.
                let sum = row + col;
                let (origin, len) = if sum < dimension {
                    (Coord::new(0, sum), sum + 1)
                } else {
                    (
                        Coord::new(sum - (dimension - 1), dimension - 1),
                        2 * dimension - 1 - sum,
                    )
                };
                (0..len)
                    .map(|i| Coord::new(origin.row + i, origin.col - i))
                    .collect()
            }
        };

        Self { direction, cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The four lines through `coord`: row, column, diagonal, anti-diagonal
pub fn lines_through(coord: Coord, dimension: usize) -> [Line; 4] {
    Direction::ALL.map(|direction| Line::through(coord, direction, dimension))
}
