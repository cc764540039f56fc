//! Game configuration and command-line surface

use clap::Parser;

use crate::error::{Error, Result};

/// Largest supported board side
pub const MAX_DIMENSION: usize = 64;

/// Construction-time parameters of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board side length
    pub dimension: usize,
    /// Run length needed to win; 0 or anything above `dimension` means `dimension`
    pub win_length: usize,
    /// One-ply lookahead for the computer instead of pure random play
    pub ai_enabled: bool,
    /// Seed for the computer's random choices
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(dimension: usize, win_length: usize, ai_enabled: bool) -> Self {
        Self {
            dimension,
            win_length,
            ai_enabled,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective run length after applying the default
    #[inline]
    pub fn effective_win_length(&self) -> usize {
        if self.win_length == 0 || self.win_length > self.dimension {
            self.dimension
        } else {
            self.win_length
        }
    }

    /// Check the dimension and normalize `win_length`
    pub fn validate(self) -> Result<Self> {
        if self.dimension < 1 {
            return Err(Error::InvalidConfig {
                message: "dimension must be at least 1".to_string(),
            });
        }
        if self.dimension > MAX_DIMENSION {
            return Err(Error::InvalidConfig {
                message: format!("dimension must be at most {MAX_DIMENSION}, got {}", self.dimension),
            });
        }
        Ok(Self {
            win_length: self.effective_win_length(),
            ..self
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(3, 0, true)
    }
}

/// k-in-a-row tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Generalized k-in-a-row tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length
    #[arg(short, long, default_value_t = 3)]
    pub dimension: usize,

    /// Marks in a row needed to win (0 = board side length)
    #[arg(short = 'k', long, default_value_t = 0)]
    pub win_length: usize,

    /// Computer plays uniformly at random instead of looking one move ahead
    #[arg(long)]
    pub no_ai: bool,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<&Cli> for GameConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            dimension: cli.dimension,
            win_length: cli.win_length,
            ai_enabled: !cli.no_ai,
            seed: cli.seed,
        }
    }
}
