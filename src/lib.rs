pub mod app;
pub mod config;
pub mod game;
pub mod ui;

pub use config::{
    Settings, BOARD_H, BOARD_W, CELL_W, DEFAULT_DROP_MS, MIN_PANE_WIDTH, PLAY_H, PLAY_W,
    ROW_BONUS, SIDEBAR_W, SPAWN_X, SPAWN_Y,
};
pub use game::{Board, Cell, Command, DropTimer, Game, Outcome, Phase, Piece, Shape};
