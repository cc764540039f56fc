//! GUI module for the tic-tac-toe game
//!
//! A native front-end using egui/eframe. It only talks to the engine through
//! its public API and maps engine coordinates to screen cells.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::TicTacToeApp;
pub use game_state::{GameState, Outcome};
