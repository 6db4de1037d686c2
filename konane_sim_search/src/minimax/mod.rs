pub mod search;
pub mod types;

pub use crate::minimax::search::{move_score, position_value, MinimaxContext, MinimaxSearch};
pub use crate::minimax::types::*;
