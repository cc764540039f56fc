//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameState, Outcome};
use super::theme::*;
use crate::{Mark, Phase};

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    /// Result popup visibility; dismissed with its Cancel button
    show_result: bool,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
            show_result: false,
        }
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
    }

    /// Status line above the board
    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::top("status_bar")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let config = self.state.config();
                    ui.label(
                        RichText::new(format!(
                            "{0}x{0}, {1} in a row",
                            config.dimension, config.win_length
                        ))
                        .size(14.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (text, color) = match self.state.phase() {
                            Phase::AwaitingSymbolChoice => ("Choose X or O".to_string(), TEXT_SECONDARY),
                            Phase::HumanTurn => match self.state.human_mark() {
                                Some(mark) => (format!("Your turn ({mark})"), TEXT_PRIMARY),
                                None => (String::new(), TEXT_MUTED),
                            },
                            Phase::Terminal => ("Game over".to_string(), WIN_HIGHLIGHT),
                        };
                        ui.label(RichText::new(text).size(13.0).color(color));
                    });
                });

                if let Some(msg) = &self.state.message {
                    ui.label(RichText::new(format!("⚠ {msg}")).size(11.0).color(WARNING));
                }
            });
    }

    /// Restart button and symbol choice below the board
    fn render_controls(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("controls")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.vertical_centered_justified(|ui| {
                    let restart = egui::Button::new(RichText::new("Restart").size(22.0));
                    if ui.add_sized([ui.available_width(), 40.0], restart).clicked() {
                        self.state.restart();
                        self.show_result = false;
                    }
                });

                ui.add_space(12.0);

                Self::card_frame().show(ui, |ui| {
                    ui.columns(2, |columns| {
                        self.render_symbol_button(&mut columns[0], Mark::X, "Crosses");
                        self.render_symbol_button(&mut columns[1], Mark::O, "Noughts");
                    });
                });
            });
    }

    fn render_symbol_button(&mut self, ui: &mut egui::Ui, mark: Mark, label: &str) {
        let chosen = self.state.human_mark() == Some(mark);
        let color = if chosen { SELECTED_SYMBOL } else { TEXT_PRIMARY };
        let button = egui::Button::new(RichText::new(label).size(24.0).color(color));

        ui.add_enabled_ui(self.state.can_choose_symbol(), |ui| {
            if ui.add_sized([ui.available_width(), 50.0], button).clicked() {
                self.state.choose_symbol(mark);
                self.show_result = self.state.outcome().is_some();
            }
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let last_moves: Vec<_> = self
                .state
                .last_human
                .into_iter()
                .chain(self.state.last_computer)
                .collect();
            let winning_segment = self.state.result().segment().map(<[_]>::to_vec);

            let clicked = self.board_view.show(
                ui,
                self.state.board(),
                &last_moves,
                winning_segment.as_deref(),
                self.state.is_input_enabled(),
            );

            if let Some(coord) = clicked {
                self.state.try_move(coord);
                self.show_result = self.state.outcome().is_some();
            }
        });
    }

    /// Result popup shown once the game ends
    fn render_result_popup(&mut self, ctx: &Context) {
        let Some(outcome) = self.state.outcome() else {
            return;
        };
        if !self.show_result {
            return;
        }

        let (text, color) = match outcome {
            Outcome::HumanWon => ("You win!", RESULT_WIN),
            Outcome::ComputerWon => ("You lose", RESULT_LOSS),
            Outcome::Draw => ("Draw", RESULT_DRAW),
        };

        egui::Window::new("Result")
            .collapsible(false)
            .resizable(false)
            .fixed_size([256.0, 160.0])
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(16.0);
                    ui.label(RichText::new(text).size(30.0).strong().color(color));
                    ui.add_space(16.0);
                    if ui.add_sized([ui.available_width(), 40.0], egui::Button::new("Cancel")).clicked() {
                        self.show_result = false;
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (restart, pick_x, pick_o) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::X),
                i.key_pressed(egui::Key::O),
            )
        });

        if restart {
            self.state.restart();
            self.show_result = false;
        }
        if self.state.can_choose_symbol() {
            if pick_x {
                self.state.choose_symbol(Mark::X);
            } else if pick_o {
                self.state.choose_symbol(Mark::O);
            }
            self.show_result = self.state.outcome().is_some();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_status_bar(ctx);
        self.render_controls(ctx);
        self.render_board(ctx);
        self.render_result_popup(ctx);
    }
}
