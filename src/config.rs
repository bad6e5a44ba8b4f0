// Shared game UI/constants.
use clap::Parser;

pub const BOARD_W: usize = 10;
pub const BOARD_H: usize = 20;
pub const SPAWN_X: i32 = 3;
pub const SPAWN_Y: i32 = 0;
pub const ROW_BONUS: u64 = 100;
pub const DEFAULT_DROP_MS: u64 = 1000;
pub const CELL_W: usize = 2; // render each block as two characters wide
pub const PLAY_W: usize = BOARD_W * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_H + 2; // inner height plus ceiling/floor
pub const SIDEBAR_W: u16 = 24;
// Minimal pane width to fit the well, the sidebar and the cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + SIDEBAR_W + 2;

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall")]
#[command(about = "Falling-block puzzle game for the terminal")]
pub struct Settings {
    /// Seed for piece selection; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Milliseconds between automatic drops.
    #[arg(long, default_value_t = DEFAULT_DROP_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub drop_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            drop_ms: DEFAULT_DROP_MS,
        }
    }
}
