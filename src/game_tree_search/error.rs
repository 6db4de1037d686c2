use crate::types::player_id::PlayerId;

/// Reasons a top-level search can fail.
#[derive(Debug, thiserror::Error)]
pub enum SearchError<E: std::error::Error + 'static> {
    /// The position rejected a move it had just enumerated. Always fatal to the search.
    #[error("search applied an illegal move")]
    IllegalMove(#[source] E),
    #[error("search depth must be at least 1")]
    ZeroDepth,
    #[error("no legal moves to choose from (winner: {winner:?})")]
    NoLegalMoves { winner: Option<PlayerId> },
}

impl<E: std::error::Error + 'static> SearchError<E> {
    #[inline]
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, SearchError::IllegalMove(..))
    }
}
