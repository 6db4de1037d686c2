use std::fmt::Debug;

use crate::types::player_id::PlayerId;

/// Score of a position from a fixed player's point of view.
pub type Eval = f64;

/// Certain loss for the alpha-beta evaluator. Heuristic values never reach it.
pub const MIN_VALUE: Eval = -2.0;

/// Certain win for the alpha-beta evaluator. Heuristic values never reach it.
pub const MAX_VALUE: Eval = 2.0;

/// Terminal win score of the minimax evaluator.
pub const MINIMAX_WIN: Eval = 1.0;

/// Terminal loss score of the minimax evaluator.
pub const MINIMAX_LOSS: Eval = -1.0;

/// A two-player, perfect-information position as seen by the search.
///
/// The search never mutates a position it does not own: every branch clones
/// the parent and calls `advance` on the clone.
pub trait Game: Debug + Clone {
    type Action: Copy + Clone + Debug + PartialEq + Eq;

    /// Enumeration order is the tie-break order of every search and must be
    /// stable across calls on an unmodified position.
    type Actions: IntoIterator<Item = Self::Action>;

    type Error: std::error::Error + 'static;

    fn winner(&self) -> Option<PlayerId>;

    fn to_move(&self) -> PlayerId;

    fn actions(&self) -> Self::Actions;

    /// Fails if `action` is not one of `self.actions()`.
    fn advance(&mut self, action: Self::Action) -> Result<(), Self::Error>;

    /// Heuristic value in `[-1, 1]`, positive favors `player_id`. Called at every depth cutoff.
    fn eval(&self, player_id: PlayerId) -> Eval;
}
