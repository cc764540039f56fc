//! Presentation-side game state
//!
//! Wraps a [`MoveEngine`] and keeps what only the screen needs: the last
//! cells played and a status message. All rules live in the engine.

use tracing::debug;

use crate::{Board, Coord, GameConfig, GameResult, Mark, MoveEngine, MoveReport, Phase, Result};

/// How the finished game looks from the human's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWon,
    ComputerWon,
    Draw,
}

/// Main game state
pub struct GameState {
    engine: MoveEngine,
    pub last_human: Option<Coord>,
    pub last_computer: Option<Coord>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self {
            engine: MoveEngine::new(config)?,
            last_human: None,
            last_computer: None,
            message: None,
        })
    }

    pub fn board(&self) -> &Board {
        self.engine.current_board()
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn result(&self) -> &GameResult {
        self.engine.result()
    }

    pub fn human_mark(&self) -> Option<Mark> {
        self.engine.human_mark()
    }

    /// Board clicks are accepted only on the human's turn
    pub fn is_input_enabled(&self) -> bool {
        self.engine.phase() == Phase::HumanTurn
    }

    /// Symbol buttons are live only before the game starts
    pub fn can_choose_symbol(&self) -> bool {
        self.engine.phase() == Phase::AwaitingSymbolChoice
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.engine.result() {
            GameResult::InProgress => None,
            GameResult::Draw => Some(Outcome::Draw),
            GameResult::Win { mark, .. } if Some(*mark) == self.engine.human_mark() => {
                Some(Outcome::HumanWon)
            }
            GameResult::Win { .. } => Some(Outcome::ComputerWon),
        }
    }

    pub fn choose_symbol(&mut self, mark: Mark) {
        match self.engine.choose_symbol(mark) {
            Ok(report) => self.record(report),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Attempt a human move at the given cell
    pub fn try_move(&mut self, coord: Coord) {
        match self.engine.apply_human_move(coord) {
            Ok(report) => self.record(report),
            Err(err) => {
                debug!(%err, "move not applied");
                self.message = Some(err.to_string());
            }
        }
    }

    pub fn restart(&mut self) {
        self.engine.restart();
        self.last_human = None;
        self.last_computer = None;
        self.message = None;
    }

    fn record(&mut self, report: MoveReport) {
        self.last_human = report.human;
        self.last_computer = report.computer;
        self.message = None;
    }
}
