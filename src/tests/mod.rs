use crate::prelude::*;




pub mod prop_tests;

/// 4x4, Black to move. `a1-c1` keeps the game going; `c3-a3` leaves White without a jump.
pub fn one_capture_from_victory() -> Board {
    Board::from_rows(&["B W . .", ". . . .", ". W B .", ". . . ."], PlayerId::Black).unwrap()
}

impl Board {
    /// Panics: If any move is illegal.
    fn advance_multiple<T: IntoIterator<Item = Move>>(&mut self, moves: T) {
        for mv in moves {
            self.execute_move(mv).unwrap();
        }
    }
}

#[inline]
fn c(row: u8, col: u8) -> Coord {
    Coord::new(row, col)
}
