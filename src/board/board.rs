//! Square board of marks

use std::fmt;

use super::{Coord, Mark};
use crate::error::{Error, Result};

/// Game board: `dimension x dimension` cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimension: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty board. Callers validate `dimension` via `GameConfig`.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![Mark::Empty; dimension * dimension],
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells (`dimension²`)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if no mark has been placed yet
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|m| m.is_empty())
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.is_within(self.dimension)
    }

    /// Row-major index to coordinate
    pub fn coord_of(&self, index: usize) -> Result<Coord> {
        if index >= self.cells.len() {
            return Err(Error::InvalidIndex {
                index,
                cells: self.cells.len(),
            });
        }
        Ok(Coord::from_index(index, self.dimension))
    }

    /// Coordinate to row-major index
    pub fn index_of(&self, coord: Coord) -> Result<usize> {
        if !self.contains(coord) {
            return Err(Error::InvalidCoordinate {
                row: coord.row,
                col: coord.col,
                dimension: self.dimension,
            });
        }
        Ok(coord.to_index(self.dimension))
    }

    /// Get mark at coordinate. Out-of-range coordinates read as `Empty`.
    #[inline]
    pub fn get(&self, coord: Coord) -> Mark {
        if !self.contains(coord) {
            return Mark::Empty;
        }
        self.cells[coord.to_index(self.dimension)]
    }

    /// Place a mark on an empty cell. Occupied cells are never overwritten.
    pub fn set(&mut self, coord: Coord, mark: Mark) -> Result<()> {
        let index = self.index_of(coord)?;
        let current = self.cells[index];
        if !current.is_empty() {
            return Err(Error::CellOccupied {
                coord,
                mark: current,
            });
        }
        self.cells[index] = mark;
        Ok(())
    }

    /// True iff no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Empty cells in row-major order
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.cells()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of non-empty cells
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// All cells with their coordinates, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Mark)> + '_ {
        let dimension = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &mark)| (Coord::from_index(index, dimension), mark))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.dimension.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for mark in row {
                write!(f, "{}", mark.symbol())?;
            }
        }
        Ok(())
    }
}
