#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![doc = include_str!("../README.md")]

/// Module containing collection datatypes used by this crate.
pub mod data_structures;

/// Traits and result types shared by every game tree search.
pub mod game_tree_search;

/// Konane board, moves and rules
pub mod konane;

pub mod types;

/// Re-exports the `smallvec` crate
pub use smallvec;

/// Re-exports the `rand` create
pub use rand;

/// Re-exports the `thiserror` crate
pub use thiserror;

pub mod prelude {
    pub use crate::game_tree_search::{
        Diagnostics, Eval, Game, GameTreeSearch, SearchCounter, SearchError, SearchResult, MAX_VALUE, MINIMAX_LOSS,
        MINIMAX_WIN, MIN_VALUE,
    };
    pub use crate::konane::{Board, Coord, Direction, KonaneError, Move};
    pub use crate::types::player_id::PlayerId;
}

#[cfg(test)]
mod tests;
