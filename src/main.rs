//! Tic-tac-toe GUI
//!
//! Play k-in-a-row tic-tac-toe against the computer.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use tictactoe::ui::{GameState, TicTacToeApp};
use tictactoe::{Cli, GameConfig};

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = match GameState::new(GameConfig::from(&cli)) {
        Ok(state) => state,
        Err(err) => Cli::command()
            .error(clap::error::ErrorKind::ValueValidation, err)
            .exit(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 700.0])
            .with_resizable(false)
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc, state)))),
    )
}
