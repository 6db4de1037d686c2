use std::{fmt::Display, ops::Add, time::Duration};

mod game_trait;
pub use game_trait::*;

mod error;
pub use error::*;

use crate::types::player_id::PlayerId;

/// Statistics of one top-level decision. Every search creates a fresh counter and
/// returns it with its result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounter {
    /// Number of states visited through game state advancements. The root is not counted.
    pub states_visited: u64,
    /// Number of times a position was scored without expansion (terminal or depth cutoff).
    pub evals: u64,
    /// Number of times the pruning condition skipped at least one remaining sibling.
    pub cutoffs: u64,
    /// Smallest remaining depth among the visited states.
    pub shallowest_remaining: Option<u8>,
}

#[inline]
fn min_remaining(a: Option<u8>, b: Option<u8>) -> Option<u8> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

impl SearchCounter {
    pub const ZERO: SearchCounter = SearchCounter {
        states_visited: 0,
        evals: 0,
        cutoffs: 0,
        shallowest_remaining: None,
    };

    /// Record a visited state that has `remaining_depth` plies left below it.
    #[inline]
    pub fn visit(&mut self, remaining_depth: u8) {
        self.states_visited += 1;
        self.shallowest_remaining = min_remaining(self.shallowest_remaining, Some(remaining_depth));
    }

    #[inline]
    pub fn add_in_place(&mut self, c: &SearchCounter) {
        self.states_visited += c.states_visited;
        self.evals += c.evals;
        self.cutoffs += c.cutoffs;
        self.shallowest_remaining = min_remaining(self.shallowest_remaining, c.shallowest_remaining);
    }

    /// Deepest ply reached by a search configured with `depth`.
    #[inline]
    pub fn deepest_ply(&self, depth: u8) -> u8 {
        self.shallowest_remaining
            .map(|remaining| depth.saturating_sub(remaining))
            .unwrap_or(0)
    }

    pub fn summary(&self, dt_ns: u128) -> String {
        let dt_ms: f64 = 1e-6 * (dt_ns as f64);
        let rate: f64 = if dt_ns == 0 {
            0.0
        } else {
            (1e-6_f64 * 1e9_f64) * (self.states_visited as f64) / (dt_ns as f64)
        };
        format!("dt={dt_ms:.2}ms rate={rate:.4} Mstates/s")
    }
}

impl Add for SearchCounter {
    type Output = SearchCounter;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut a = self;
        a.add_in_place(&rhs);
        a
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult<G: Game> {
    /// `None` only when the root position has no legal move.
    pub best_move: Option<G::Action>,
    pub eval: Eval,
    pub counter: SearchCounter,
    /// Configured search depth.
    pub depth: u8,
    pub elapsed: Duration,
}

impl<G: Game> SearchResult<G> {
    #[inline]
    pub fn new(best_move: Option<G::Action>, eval: Eval, counter: SearchCounter, depth: u8, elapsed: Duration) -> Self {
        SearchResult {
            best_move,
            eval,
            counter,
            depth,
            elapsed,
        }
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            nodes_explored: self.counter.states_visited,
            evals: self.counter.evals,
            cutoffs: self.counter.cutoffs,
            elapsed_ms: 1e3 * self.elapsed.as_secs_f64(),
            deepest_ply: self.counter.deepest_ply(self.depth),
            eval: self.eval,
        }
    }
}

/// Structured report of one decision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Excludes the root.
    pub nodes_explored: u64,
    pub evals: u64,
    pub cutoffs: u64,
    pub elapsed_ms: f64,
    pub deepest_ply: u8,
    pub eval: Eval,
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total_ms = self.elapsed_ms.max(0.0).round() as u64;
        writeln!(f, "{} nodes explored", self.nodes_explored)?;
        writeln!(f, "{} seconds, {} ms elapsed", total_ms / 1000, total_ms % 1000)?;
        write!(f, "deepest depth reached: {}", self.deepest_ply)
    }
}

/// A strategy that picks moves for a position.
pub trait GameTreeSearch<G: Game> {
    /// Search `position`, maximizing for `maximize_player`.
    fn search(&mut self, position: &G, maximize_player: PlayerId) -> Result<SearchResult<G>, SearchError<G::Error>>;

    /// Choose a move for the side to move.
    fn choose_move(&mut self, position: &G) -> Result<G::Action, SearchError<G::Error>> {
        let result = self.search(position, position.to_move())?;
        result.best_move.ok_or(SearchError::NoLegalMoves {
            winner: position.winner(),
        })
    }
}
