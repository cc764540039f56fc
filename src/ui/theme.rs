//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 245, 240);
pub const CELL_BG: Color32 = Color32::WHITE;
pub const CELL_PLAYED_BG: Color32 = Color32::from_rgb(232, 232, 228);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 60, 60);

// Marks
pub const MARK_X: Color32 = Color32::from_rgb(25, 25, 30);
pub const MARK_O: Color32 = Color32::from_rgb(40, 70, 200);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(40, 200, 60);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

// Panel and text colors
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const CARD_BG: Color32 = Color32::from_rgb(42, 44, 48);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Result colors
pub const RESULT_WIN: Color32 = Color32::from_rgb(0, 255, 0);
pub const RESULT_LOSS: Color32 = Color32::from_rgb(255, 0, 0);
pub const RESULT_DRAW: Color32 = Color32::WHITE;
pub const SELECTED_SYMBOL: Color32 = Color32::from_rgb(0, 255, 0);
pub const WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 8.0;
pub const MARK_SIZE_RATIO: f32 = 0.32;
pub const MARK_STROKE_RATIO: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const WIN_STROKE_WIDTH: f32 = 4.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
