//! Generalized tic-tac-toe engine
//!
//! An `m x m` board where `k` marks in a row (horizontally, vertically or
//! along either diagonal) win. A human plays against a computer opponent
//! that looks one move ahead.
//!
//! # Architecture
//!
//! - [`board`]: board of marks and coordinate transforms
//! - [`rules`]: line construction and win/draw detection
//! - [`engine`]: turn handling and computer move selection
//! - [`config`]: game parameters and command-line flags
//! - [`error`]: error type shared by all of the above
//! - [`ui`]: native front-end built on the public engine API
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Coord, GameConfig, Mark, MoveEngine};
//!
//! // 5x5 board, four in a row wins
//! let mut engine = MoveEngine::new(GameConfig::new(5, 4, true)).unwrap();
//!
//! engine.choose_symbol(Mark::X).unwrap();
//! let report = engine.apply_human_move(Coord::new(2, 2)).unwrap();
//!
//! if let Some(reply) = report.computer {
//!     println!("Computer plays at {}", reply);
//! }
//! println!("{}", engine.current_board());
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Coord, Mark};
pub use config::{Cli, GameConfig, MAX_DIMENSION};
pub use engine::{ComputerMove, MoveEngine, MoveKind, MoveReport, Phase};
pub use error::{Error, Result};
pub use rules::GameResult;
