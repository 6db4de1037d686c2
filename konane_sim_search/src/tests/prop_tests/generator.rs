use std::ops::RangeInclusive;

use konane_sim::rand::{rngs::SmallRng, SeedableRng};

use super::*;

pub const CASES: u32 = 48;

#[derive(Debug, Clone)]
pub struct ArbReachableBoard {
    pub sizes: RangeInclusive<u8>,
    pub plies: RangeInclusive<u32>,
}

impl Default for ArbReachableBoard {
    fn default() -> Self {
        Self {
            sizes: Board::MIN_SIZE..=6,
            plies: 0..=24,
        }
    }
}

impl ArbReachableBoard {
    pub fn arb(self) -> impl Strategy<Value = Board> {
        (self.sizes, self.plies, any::<u64>()).prop_map(|(size, plies, seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut board = Board::new(size).unwrap();
            if let Err(e) = board.random_playout(plies, &mut rng) {
                dbg!(&board);
                panic!("{e:?}");
            }
            board
        })
    }
}

pub fn arb_reachable_board() -> impl Strategy<Value = Board> {
    ArbReachableBoard::default().arb()
}

prop_compose! {
    pub fn arb_midgame_board()(board in ArbReachableBoard { plies: 2..=24, ..Default::default() }.arb()) -> Board {
        board
    }
}
