pub mod board;
pub mod piece;
pub mod state;
pub mod timer;

pub use board::{Board, Cell};
pub use piece::{random_shape, Matrix, Piece, Shape, SHAPES};
pub use state::{Command, Game, Outcome, Phase};
pub use timer::DropTimer;
