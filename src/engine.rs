//! Move engine: turn handling and the computer opponent
//!
//! The engine owns the board and drives a game through three phases:
//!
//! 1. **Awaiting symbol choice**: the human picks X or O. X always moves
//!    first, so picking O makes the computer open immediately.
//! 2. **Human turn**: each human move is checked for a win or draw, then
//!    answered by exactly one computer move, which is checked in turn.
//! 3. **Terminal**: a win or draw was reached. Every mutating call fails
//!    with [`Error::GameOver`] until [`MoveEngine::restart`].
//!
//! The computer looks one move ahead: it takes an immediate win, otherwise
//! blocks an immediate human win, otherwise plays a random empty cell.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Coord, GameConfig, GameResult, Mark, MoveEngine};
//!
//! let config = GameConfig::new(3, 3, true).with_seed(42);
//! let mut engine = MoveEngine::new(config).unwrap();
//!
//! engine.choose_symbol(Mark::X).unwrap();
//! let report = engine.apply_human_move(Coord::new(1, 1)).unwrap();
//!
//! assert_eq!(report.human, Some(Coord::new(1, 1)));
//! assert!(report.computer.is_some());
//! assert_eq!(report.result, GameResult::InProgress);
//! ```

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Coord, Mark};
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::rules::{check_win, winning_cells, GameResult};

/// Mark that makes the opening move
pub const FIRST_MOVER: Mark = Mark::X;

/// Engine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSymbolChoice,
    HumanTurn,
    Terminal,
}

/// Why the computer picked its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Completes a winning segment for the computer
    Win,
    /// Occupies a cell where the human would win next move
    Block,
    /// Uniformly random empty cell
    Random,
}

/// A computer move with the reason it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    pub coord: Coord,
    pub kind: MoveKind,
}

/// Cells changed by one engine call and the resulting game state.
///
/// Lets a front-end repaint only what changed instead of the whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Cell the human marked, if any
    pub human: Option<Coord>,
    /// Cell the computer marked, if any
    pub computer: Option<Coord>,
    pub result: GameResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Players {
    human: Mark,
    computer: Mark,
}

/// Pick the computer's next cell.
///
/// With `lookahead` the computer takes a winning cell if one exists, then
/// blocks a cell where `mark.opponent()` would win. Ties are broken at
/// random. Returns `None` on a full board.
pub fn choose_computer_move<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    win_length: usize,
    lookahead: bool,
    rng: &mut R,
) -> Option<ComputerMove> {
    if lookahead {
        let wins = winning_cells(board, mark, win_length);
        if let Some(&coord) = wins.choose(rng) {
            return Some(ComputerMove { coord, kind: MoveKind::Win });
        }

        let threats = winning_cells(board, mark.opponent(), win_length);
        if let Some(&coord) = threats.choose(rng) {
            return Some(ComputerMove { coord, kind: MoveKind::Block });
        }
    }

    board
        .empty_coords()
        .choose(rng)
        .map(|&coord| ComputerMove { coord, kind: MoveKind::Random })
}

/// Game engine for one human against the computer.
///
/// Each session owns its own engine; it is not meant to be shared.
#[derive(Debug)]
pub struct MoveEngine {
    config: GameConfig,
    board: Board,
    phase: Phase,
    players: Option<Players>,
    result: GameResult,
    rng: StdRng,
}

impl MoveEngine {
    /// Start a new game.
    ///
    /// Fails with [`Error::InvalidConfig`] for a zero or oversized dimension.
    /// `win_length` is normalized (0 or too large means the board side).
    pub fn new(config: GameConfig) -> Result<Self> {
        let config = config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        info!(
            dimension = config.dimension,
            win_length = config.win_length,
            ai_enabled = config.ai_enabled,
            "new game"
        );

        Ok(Self {
            board: Board::new(config.dimension),
            config,
            phase: Phase::AwaitingSymbolChoice,
            players: None,
            result: GameResult::InProgress,
            rng,
        })
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Latest game result; `InProgress` until the game ends
    #[inline]
    pub fn result(&self) -> &GameResult {
        &self.result
    }

    /// Read-only board snapshot for rendering
    #[inline]
    pub fn current_board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Option<Mark> {
        self.players.map(|p| p.human)
    }

    pub fn computer_mark(&self) -> Option<Mark> {
        self.players.map(|p| p.computer)
    }

    /// Select the human's mark; the computer gets the other one.
    ///
    /// When the human picks the second mover, the computer's opening move is
    /// made before returning and reported in `MoveReport::computer`.
    #[instrument(skip(self))]
    pub fn choose_symbol(&mut self, mark: Mark) -> Result<MoveReport> {
        match self.phase {
            Phase::Terminal => return Err(Error::GameOver),
            Phase::HumanTurn => return Err(Error::SymbolAlreadyChosen),
            Phase::AwaitingSymbolChoice => {}
        }
        if mark.is_empty() {
            return Err(Error::InvalidSymbol);
        }

        let players = Players {
            human: mark,
            computer: mark.opponent(),
        };
        self.players = Some(players);
        self.phase = Phase::HumanTurn;
        info!(human = %players.human, computer = %players.computer, "symbols chosen");

        let mut report = MoveReport {
            human: None,
            computer: None,
            result: GameResult::InProgress,
        };

        if players.computer == FIRST_MOVER {
            report.computer = self.play_computer(players.computer)?;
            report.result = self.result.clone();
        }

        Ok(report)
    }

    /// Place the human's mark at `coord` and answer with a computer move.
    ///
    /// A rejected move (out of range or occupied cell) leaves the engine
    /// untouched.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, coord: Coord) -> Result<MoveReport> {
        let players = self.ensure_human_turn()?;

        if let Err(err) = self.board.set(coord, players.human) {
            warn!(%err, "move rejected");
            return Err(err);
        }
        debug!(mark = %players.human, %coord, "human move");

        let mut report = MoveReport {
            human: Some(coord),
            computer: None,
            result: self.evaluate(coord),
        };
        if report.result.is_terminal() {
            return Ok(report);
        }

        report.computer = self.play_computer(players.computer)?;
        report.result = self.result.clone();
        Ok(report)
    }

    /// Same as [`MoveEngine::apply_human_move`] with a row-major cell index
    pub fn apply_human_move_at(&mut self, index: usize) -> Result<MoveReport> {
        self.ensure_human_turn()?;
        let coord = self.board.coord_of(index)?;
        self.apply_human_move(coord)
    }

    /// Back to symbol choice with an empty board
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new(self.config.dimension);
        self.phase = Phase::AwaitingSymbolChoice;
        self.players = None;
        self.result = GameResult::InProgress;
        info!("game restarted");
    }

    fn ensure_human_turn(&self) -> Result<Players> {
        match (self.phase, self.players) {
            (Phase::Terminal, _) => Err(Error::GameOver),
            (Phase::HumanTurn, Some(players)) => Ok(players),
            _ => Err(Error::SymbolNotChosen),
        }
    }

    /// Make one computer move and evaluate it
    fn play_computer(&mut self, mark: Mark) -> Result<Option<Coord>> {
        let Some(choice) = choose_computer_move(
            &self.board,
            mark,
            self.config.win_length,
            self.config.ai_enabled,
            &mut self.rng,
        ) else {
            return Ok(None);
        };

        self.board.set(choice.coord, mark)?;
        debug!(%mark, coord = %choice.coord, kind = ?choice.kind, "computer move");
        self.evaluate(choice.coord);
        Ok(Some(choice.coord))
    }

    /// Check the board after a move at `coord` and record a terminal result
    fn evaluate(&mut self, coord: Coord) -> GameResult {
        let result = check_win(coord, &self.board, self.config.win_length);
        if result.is_terminal() {
            match &result {
                GameResult::Win { mark, segment } => {
                    info!(winner = %mark, ?segment, "game won")
                }
                _ => info!("game drawn"),
            }
            debug!("final board:\n{}", self.board);
            self.phase = Phase::Terminal;
        }
        self.result = result.clone();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(dimension: usize, win_length: usize, ai: bool) -> MoveEngine {
        MoveEngine::new(GameConfig::new(dimension, win_length, ai).with_seed(7)).unwrap()
    }

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    'X' => board.set(Coord::new(r, c), Mark::X).unwrap(),
                    'O' => board.set(Coord::new(r, c), Mark::O).unwrap(),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_engine_creation() {
        let engine = engine(3, 0, true);
        assert_eq!(engine.phase(), Phase::AwaitingSymbolChoice);
        assert_eq!(engine.config().win_length, 3);
        assert_eq!(engine.human_mark(), None);
        assert!(engine.current_board().is_board_empty());
    }

    #[test]
    fn test_invalid_config() {
        let err = MoveEngine::new(GameConfig::new(0, 0, true)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_choose_x_waits_for_human() {
        let mut engine = engine(3, 3, true);
        let report = engine.choose_symbol(Mark::X).unwrap();
        assert_eq!(report.computer, None);
        assert_eq!(engine.phase(), Phase::HumanTurn);
        assert_eq!(engine.human_mark(), Some(Mark::X));
        assert_eq!(engine.computer_mark(), Some(Mark::O));
        assert!(engine.current_board().is_board_empty());
    }

    #[test]
    fn test_choose_o_computer_opens() {
        let mut engine = engine(3, 3, true);
        let report = engine.choose_symbol(Mark::O).unwrap();
        let opening = report.computer.expect("computer should open");
        assert_eq!(engine.current_board().get(opening), Mark::X);
        assert_eq!(engine.current_board().mark_count(), 1);
        assert_eq!(report.result, GameResult::InProgress);
        assert_eq!(engine.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_choose_symbol_errors() {
        let mut engine = engine(3, 3, true);
        assert_eq!(engine.choose_symbol(Mark::Empty), Err(Error::InvalidSymbol));
        assert_eq!(engine.phase(), Phase::AwaitingSymbolChoice);

        engine.choose_symbol(Mark::X).unwrap();
        assert_eq!(engine.choose_symbol(Mark::O), Err(Error::SymbolAlreadyChosen));
    }

    #[test]
    fn test_move_before_symbol_choice() {
        let mut engine = engine(3, 3, true);
        assert_eq!(
            engine.apply_human_move(Coord::new(0, 0)),
            Err(Error::SymbolNotChosen)
        );
        assert!(engine.current_board().is_board_empty());
    }

    #[test]
    fn test_human_move_answered_once() {
        let mut engine = engine(5, 3, true);
        engine.choose_symbol(Mark::X).unwrap();
        let report = engine.apply_human_move(Coord::new(2, 2)).unwrap();
        let computer = report.computer.unwrap();

        let board = engine.current_board();
        assert_eq!(board.get(Coord::new(2, 2)), Mark::X);
        assert_eq!(board.get(computer), Mark::O);
        assert_eq!(board.mark_count(), 2);
    }

    #[test]
    fn test_occupied_cell_leaves_state_unchanged() {
        let mut engine = engine(3, 3, true);
        engine.choose_symbol(Mark::X).unwrap();
        let report = engine.apply_human_move(Coord::new(0, 0)).unwrap();
        let taken = report.computer.unwrap();

        let before = engine.current_board().clone();
        let err = engine.apply_human_move(taken).unwrap_err();
        assert!(matches!(err, Error::CellOccupied { .. }));
        assert!(err.is_invalid_move());
        assert_eq!(engine.current_board(), &before);
        assert_eq!(engine.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_out_of_range_move() {
        let mut engine = engine(3, 3, true);
        engine.choose_symbol(Mark::X).unwrap();
        let err = engine.apply_human_move(Coord::new(3, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate { .. }));
        let err = engine.apply_human_move_at(9).unwrap_err();
        assert_eq!(err, Error::InvalidIndex { index: 9, cells: 9 });
        assert!(engine.current_board().is_board_empty());
    }

    #[test]
    fn test_move_by_index() {
        let mut engine = engine(4, 3, false);
        engine.choose_symbol(Mark::X).unwrap();
        let report = engine.apply_human_move_at(6).unwrap();
        assert_eq!(report.human, Some(Coord::new(1, 2)));
        assert_eq!(engine.current_board().get(Coord::new(1, 2)), Mark::X);
    }

    #[test]
    fn test_win_length_one_first_move_wins() {
        let mut engine = engine(3, 1, true);
        engine.choose_symbol(Mark::X).unwrap();
        let report = engine.apply_human_move(Coord::new(1, 1)).unwrap();
        assert_eq!(
            report.result,
            GameResult::Win { mark: Mark::X, segment: vec![Coord::new(1, 1)] }
        );
        assert_eq!(report.computer, None);
        assert_eq!(engine.phase(), Phase::Terminal);
    }

    #[test]
    fn test_win_length_one_computer_opening_wins() {
        let mut engine = engine(3, 1, true);
        let report = engine.choose_symbol(Mark::O).unwrap();
        assert_eq!(report.result.winner(), Some(Mark::X));
        assert_eq!(engine.phase(), Phase::Terminal);
        assert_eq!(engine.choose_symbol(Mark::X), Err(Error::GameOver));
    }

    #[test]
    fn test_single_cell_board() {
        let mut engine = engine(1, 0, true);
        engine.choose_symbol(Mark::X).unwrap();
        let report = engine.apply_human_move(Coord::new(0, 0)).unwrap();
        assert_eq!(report.result.winner(), Some(Mark::X));
    }

    #[test]
    fn test_game_over_until_restart() {
        let mut engine = engine(2, 1, true);
        engine.choose_symbol(Mark::X).unwrap();
        engine.apply_human_move(Coord::new(0, 0)).unwrap();

        assert_eq!(engine.apply_human_move(Coord::new(1, 1)), Err(Error::GameOver));
        assert_eq!(engine.apply_human_move_at(3), Err(Error::GameOver));

        engine.restart();
        assert_eq!(engine.phase(), Phase::AwaitingSymbolChoice);
        assert_eq!(engine.result(), &GameResult::InProgress);
        assert_eq!(engine.human_mark(), None);
        assert!(engine.current_board().is_board_empty());

        engine.choose_symbol(Mark::O).unwrap();
        assert_eq!(engine.phase(), Phase::Terminal);
    }

    #[test]
    fn test_restart_mid_game() {
        let mut engine = engine(3, 3, true);
        engine.choose_symbol(Mark::X).unwrap();
        engine.apply_human_move(Coord::new(0, 0)).unwrap();
        engine.restart();
        assert!(engine.current_board().is_board_empty());
        assert_eq!(engine.phase(), Phase::AwaitingSymbolChoice);
    }

    #[test]
    fn test_computer_takes_win() {
        let board = board_from(&["OO.", "XX.", "X.."]);
        let mut rng = StdRng::seed_from_u64(1);
        let choice = choose_computer_move(&board, Mark::O, 3, true, &mut rng).unwrap();
        assert_eq!(choice, ComputerMove { coord: Coord::new(0, 2), kind: MoveKind::Win });
    }

    #[test]
    fn test_computer_blocks_threat() {
        let board = board_from(&["XX.", ".O.", "..."]);
        let mut rng = StdRng::seed_from_u64(1);
        let choice = choose_computer_move(&board, Mark::O, 3, true, &mut rng).unwrap();
        assert_eq!(choice, ComputerMove { coord: Coord::new(0, 2), kind: MoveKind::Block });
    }

    #[test]
    fn test_computer_without_lookahead_is_random() {
        let board = board_from(&["XX.", ".O.", "..."]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let choice = choose_computer_move(&board, Mark::O, 3, false, &mut rng).unwrap();
            assert_eq!(choice.kind, MoveKind::Random);
            assert!(board.get(choice.coord).is_empty());
        }
    }

    #[test]
    fn test_computer_on_full_board() {
        let board = board_from(&["XO", "OX"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(choose_computer_move(&board, Mark::O, 2, true, &mut rng), None);
    }

    #[test]
    fn test_engine_blocks_in_play() {
        // Human X threatens (0, 0) (0, 1) -> (0, 2); the computer must block
        let mut engine = engine(3, 3, true);
        engine.choose_symbol(Mark::X).unwrap();
        let first = engine.apply_human_move(Coord::new(0, 0)).unwrap();
        if first.computer == Some(Coord::new(0, 1)) || first.computer == Some(Coord::new(0, 2)) {
            return;
        }
        let report = engine.apply_human_move(Coord::new(0, 1)).unwrap();
        assert_eq!(report.computer, Some(Coord::new(0, 2)));
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let play = || {
            let mut engine = engine(5, 4, false);
            engine.choose_symbol(Mark::O).unwrap();
            engine.current_board().clone()
        };
        assert_eq!(play(), play());
    }
}
