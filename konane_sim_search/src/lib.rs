#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

pub use konane_sim::game_tree_search::*;

/// Implementation for exhaustive minimax search
pub mod minimax;

/// Implementation for alpha-beta pruned search
pub mod alpha_beta;

#[cfg(test)]
mod tests;
