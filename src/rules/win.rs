//! Win and draw detection for k-in-a-row
//!
//! A new winning segment must pass through the most recently placed mark,
//! so only the four lines through that cell are scanned.

use tracing::{instrument, trace};

use super::line::{lines_through, Line};
use crate::board::{Board, Coord, Mark};

/// Outcome of the game after a move
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameResult {
    #[default]
    InProgress,
    /// `segment` holds exactly `win_length` coordinates in line order
    Win { mark: Mark, segment: Vec<Coord> },
    Draw,
}

impl GameResult {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    #[inline]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Winning segment, if any
    pub fn segment(&self) -> Option<&[Coord]> {
        match self {
            GameResult::Win { segment, .. } => Some(segment),
            _ => None,
        }
    }
}

/// Find the first run of `win_length` identical non-empty marks on `line`.
///
/// The scan goes from the start of the line; a run longer than
/// `win_length` yields its first `win_length` cells.
pub fn check_line(line: &Line, board: &Board, win_length: usize) -> Option<Vec<Coord>> {
    if win_length == 0 || line.len() < win_length {
        return None;
    }

    let mut run = 0usize;
    let mut run_mark = Mark::Empty;

    for (i, &coord) in line.cells.iter().enumerate() {
        let mark = board.get(coord);
        if mark.is_empty() {
            run = 0;
        } else if mark == run_mark {
            run += 1;
        } else {
            run = 1;
        }
        run_mark = mark;

        if run == win_length {
            let start = i + 1 - win_length;
            return Some(line.cells[start..=i].to_vec());
        }
    }

    None
}

/// Evaluate the board after a mark was placed at `coord`.
///
/// Lines are checked in the order row, column, diagonal, anti-diagonal and
/// the first match wins. With no match, a full board is a draw.
#[instrument(skip(board), level = "trace")]
pub fn check_win(coord: Coord, board: &Board, win_length: usize) -> GameResult {
    if board.contains(coord) {
        for line in lines_through(coord, board.dimension()) {
            if let Some(segment) = check_line(&line, board, win_length) {
                let mark = board.get(segment[0]);
                trace!(direction = ?line.direction, ?segment, "winning segment");
                return GameResult::Win { mark, segment };
            }
        }
    }

    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// Empty cells where placing `mark` would win immediately, row-major.
pub fn winning_cells(board: &Board, mark: Mark, win_length: usize) -> Vec<Coord> {
    if mark.is_empty() {
        return Vec::new();
    }

    let mut probe = board.clone();
    board
        .empty_coords()
        .into_iter()
        .filter(|&coord| {
            probe.clone_from(board);
            probe.set(coord, mark).is_ok()
                && check_win(coord, &probe, win_length).winner() == Some(mark)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Direction;

    /// Build a board from rows of `X`, `O` and `.`
    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => continue,
                };
                board.set(Coord::new(r, c), mark).unwrap();
            }
        }
        board
    }

    fn coords(cells: &[(usize, usize)]) -> Vec<Coord> {
        cells.iter().map(|&c| Coord::from(c)).collect()
    }

    #[test]
    fn test_classic_top_row() {
        let board = board_from(&["XXX", "OO.", "..."]);
        assert_eq!(
            check_win(Coord::new(0, 2), &board, 3),
            GameResult::Win {
                mark: Mark::X,
                segment: coords(&[(0, 0), (0, 1), (0, 2)]),
            }
        );
    }

    #[test]
    fn test_column() {
        let board = board_from(&[".O.", "XO.", "XO."]);
        assert_eq!(
            check_win(Coord::new(1, 1), &board, 3),
            GameResult::Win {
                mark: Mark::O,
                segment: coords(&[(0, 1), (1, 1), (2, 1)]),
            }
        );
    }

    #[test]
    fn test_diagonal_sub_segment() {
        let board = board_from(&[".....", ".X...", "..X..", "...X.", "....."]);
        assert_eq!(
            check_win(Coord::new(3, 3), &board, 3),
            GameResult::Win {
                mark: Mark::X,
                segment: coords(&[(1, 1), (2, 2), (3, 3)]),
            }
        );
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_from(&["...O", "..O.", ".O..", "...."]);
        assert_eq!(
            check_win(Coord::new(2, 1), &board, 3),
            GameResult::Win {
                mark: Mark::O,
                segment: coords(&[(0, 3), (1, 2), (2, 1)]),
            }
        );
    }

    #[test]
    fn test_short_win_length_in_long_row() {
        let board = board_from(&[".....", ".....", "XXX.O", ".....", "....."]);
        assert_eq!(
            check_win(Coord::new(2, 2), &board, 3),
            GameResult::Win {
                mark: Mark::X,
                segment: coords(&[(2, 0), (2, 1), (2, 2)]),
            }
        );
    }

    #[test]
    fn test_long_run_yields_first_cells() {
        let board = board_from(&[".....", "XXXX.", ".....", ".....", "....."]);
        assert_eq!(
            check_win(Coord::new(1, 3), &board, 3).segment(),
            Some(&coords(&[(1, 0), (1, 1), (1, 2)])[..])
        );
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let board = board_from(&["XXOXX", ".....", ".....", ".....", "....."]);
        assert_eq!(check_win(Coord::new(0, 4), &board, 3), GameResult::InProgress);
    }

    #[test]
    fn test_draw() {
        // X O X
        // X O O
        // O X X
        let board = board_from(&["XOX", "XOO", "OXX"]);
        assert_eq!(check_win(Coord::new(2, 2), &board, 3), GameResult::Draw);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let board = board_from(&["XOX", "OXO", "OXX"]);
        assert_eq!(
            check_win(Coord::new(2, 2), &board, 3).winner(),
            Some(Mark::X)
        );
    }

    #[test]
    fn test_win_length_one() {
        let board = board_from(&["...", ".O.", "..."]);
        assert_eq!(
            check_win(Coord::new(1, 1), &board, 1),
            GameResult::Win {
                mark: Mark::O,
                segment: coords(&[(1, 1)]),
            }
        );
    }

    #[test]
    fn test_row_checked_before_column() {
        let board = board_from(&["XXX", "X..", "X.."]);
        assert_eq!(
            check_win(Coord::new(0, 0), &board, 3).segment(),
            Some(&coords(&[(0, 0), (0, 1), (0, 2)])[..])
        );
    }

    #[test]
    fn test_line_shorter_than_win_length() {
        let board = board_from(&["...X", "..X.", "....", "...."]);
        let line = Line::through(Coord::new(0, 3), Direction::Diagonal, 4);
        assert_eq!(check_line(&line, &board, 2), None);
        assert_eq!(check_win(Coord::new(1, 2), &board, 2).winner(), Some(Mark::X));
    }

    #[test]
    fn test_in_progress() {
        let board = board_from(&["X..", ".O.", "..."]);
        assert_eq!(check_win(Coord::new(1, 1), &board, 3), GameResult::InProgress);
        assert!(!GameResult::InProgress.is_terminal());
        assert!(GameResult::Draw.is_terminal());
    }

    #[test]
    fn test_winning_cells() {
        let board = board_from(&["XX.", "OO.", "..."]);
        assert_eq!(winning_cells(&board, Mark::X, 3), coords(&[(0, 2)]));
        assert_eq!(winning_cells(&board, Mark::O, 3), coords(&[(1, 2)]));
        assert!(winning_cells(&board, Mark::Empty, 3).is_empty());
    }

    #[test]
    fn test_winning_cells_none() {
        let board = board_from(&["X..", "...", "..O"]);
        assert!(winning_cells(&board, Mark::X, 3).is_empty());
    }
}
