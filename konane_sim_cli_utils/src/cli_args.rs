use std::str::FromStr;
use structopt::StructOpt;

use instant::Instant;
use konane_sim::{
    game_tree_search::*,
    konane::{Board, KonaneError},
    rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng},
    types::PlayerId,
};
use konane_sim_search::{
    alpha_beta::{AlphaBetaConfig, AlphaBetaSearch},
    minimax::{MinimaxConfig, MinimaxSearch, Perspective, DEFAULT_DEPTH},
};

pub const DEFAULT_BOARD_SIZE: u8 = 6;

pub const DEFAULT_SEED: u64 = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Minimax,
    AlphaBeta,
    Random,
}

impl FromStr for SearchAlgorithm {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" => Ok(Self::Minimax),
            "alpha-beta" | "alphabeta" => Ok(Self::AlphaBeta),
            "random" => Ok(Self::Random),
            _ => Err("expected minimax|alpha-beta|random"),
        }
    }
}

#[derive(Debug, StructOpt, Clone, Default)]
pub struct SearchConfig {
    #[structopt(
        short = "A",
        long = "--algorithm",
        help = "minimax|alpha-beta|random: algorithm used for the game tree search."
    )]
    pub algorithm: Option<SearchAlgorithm>,

    #[structopt(short = "d", long = "--depth", help = "Search depth in plies")]
    pub search_depth: Option<u8>,

    #[structopt(
        long = "--opponent-perspective",
        help = "Minimax: score depth cutoffs from the opponent's point of view"
    )]
    pub opponent_perspective: bool,

    #[structopt(long = "--trace", help = "Alpha-beta: record the searched tree")]
    pub trace: bool,

    #[structopt(short = "D", long = "--debug", help = "Print debug info")]
    pub debug: bool,
}

#[derive(Debug, StructOpt, Clone)]
pub struct PositionOpts {
    #[structopt(short = "n", long = "--size", help = "Board size")]
    pub size: Option<u8>,

    #[structopt(short = "S", long = "--seed", help = "Random seed for the position")]
    pub seed: Option<u64>,

    #[structopt(
        short = "p",
        long = "--plies",
        help = "Random moves played from the initial position before searching"
    )]
    pub plies: Option<u32>,

    #[structopt(flatten)]
    pub search: SearchConfig,
}

pub enum GenericSearch {
    Minimax(MinimaxSearch),
    AlphaBeta(AlphaBetaSearch<Board>),
    Random(SmallRng),
}

fn random_search(position: &Board, rng: &mut SmallRng) -> SearchResult<Board> {
    let start_time = Instant::now();
    let selected = position.actions().choose(rng).copied();
    SearchResult::new(selected, Default::default(), SearchCounter::ZERO, 0, start_time.elapsed())
}

impl GameTreeSearch<Board> for GenericSearch {
    fn search(
        &mut self,
        position: &Board,
        maximize_player: PlayerId,
    ) -> Result<SearchResult<Board>, SearchError<KonaneError>> {
        match self {
            Self::Minimax(s) => s.search(position, maximize_player),
            Self::AlphaBeta(s) => s.search(position, maximize_player),
            Self::Random(rng) => Ok(random_search(position, rng)),
        }
    }
}

impl SearchConfig {
    pub fn depth(&self) -> u8 {
        self.search_depth.unwrap_or(DEFAULT_DEPTH)
    }

    pub fn minimax_config(&self) -> MinimaxConfig {
        MinimaxConfig {
            depth: self.depth(),
            cutoff_perspective: if self.opponent_perspective {
                Perspective::Opponent
            } else {
                Perspective::Agent
            },
            debug: self.debug,
        }
    }

    pub fn alpha_beta_config(&self) -> AlphaBetaConfig {
        AlphaBetaConfig {
            depth: self.depth(),
            record_trace: self.trace,
            debug: self.debug,
        }
    }

    pub fn make_search(&self, seed: Option<u64>) -> GenericSearch {
        match self.algorithm.unwrap_or(SearchAlgorithm::AlphaBeta) {
            SearchAlgorithm::Minimax => GenericSearch::Minimax(MinimaxSearch::new(self.minimax_config())),
            SearchAlgorithm::AlphaBeta => GenericSearch::AlphaBeta(AlphaBetaSearch::new(self.alpha_beta_config())),
            SearchAlgorithm::Random => GenericSearch::Random(match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            }),
        }
    }
}

impl PositionOpts {
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Initial board advanced by `plies` random moves drawn from `seed`.
    pub fn get_position(&self) -> Result<Board, KonaneError> {
        let mut board = Board::new(self.size.unwrap_or(DEFAULT_BOARD_SIZE))?;
        let mut rng = SmallRng::seed_from_u64(self.seed());
        board.random_playout(self.plies.unwrap_or(0), &mut rng)?;
        Ok(board)
    }

    pub fn make_search(&self) -> GenericSearch {
        self.search.make_search(Some(self.seed()))
    }
}
