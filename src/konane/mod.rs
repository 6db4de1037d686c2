mod board;
pub use board::*;

mod moves;
pub use moves::*;

mod game;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KonaneError {
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    #[error("board size must be between 4 and 16, got {0}")]
    InvalidBoardSize(u8),
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}
