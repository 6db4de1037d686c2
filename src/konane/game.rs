use super::{Board, KonaneError, Move};
use crate::{
    data_structures::MoveList,
    game_tree_search::{Eval, Game},
    types::player_id::PlayerId,
};

impl Game for Board {
    type Action = Move;

    type Actions = MoveList;

    type Error = KonaneError;

    #[inline]
    fn winner(&self) -> Option<PlayerId> {
        self.winner_decided()
    }

    #[inline]
    fn to_move(&self) -> PlayerId {
        self.to_move_player()
    }

    #[inline]
    fn actions(&self) -> Self::Actions {
        self.legal_moves()
    }

    #[inline]
    fn advance(&mut self, action: Move) -> Result<(), Self::Error> {
        self.execute_move(action)
    }

    #[inline]
    fn eval(&self, player_id: PlayerId) -> Eval {
        self.mobility_value(player_id)
    }
}
