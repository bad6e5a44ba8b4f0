mod render;

pub use render::{cell_color, draw_game, status_label};
