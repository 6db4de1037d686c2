use rand::{rngs::SmallRng, SeedableRng};

use super::*;

pub const CASES: u32 = 256;

pub fn arb_size() -> impl Strategy<Value = u8> {
    Board::MIN_SIZE..=8
}

prop_compose! {
    pub fn arb_reachable_board()(size in arb_size(), plies in 0u32..=60, seed in any::<u64>()) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(size).unwrap();
        if let Err(e) = board.random_playout(plies, &mut rng) {
            dbg!(&board);
            panic!("{e:?}");
        }
        board
    }
}

prop_compose! {
    pub fn arb_reachable_board_with_move()(board in arb_reachable_board(), n in any::<usize>()) -> (Board, Option<Move>) {
        let moves = board.legal_moves();
        let mv = if moves.is_empty() { None } else { Some(moves[n % moves.len()]) };
        (board, mv)
    }
}

pub fn arb_coord(size: u8) -> impl Strategy<Value = Coord> {
    (0..size, 0..size).prop_map(|(row, col)| Coord::new(row, col))
}
