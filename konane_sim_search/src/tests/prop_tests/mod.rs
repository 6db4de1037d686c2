mod generator;
use generator::*;

use proptest::prelude::*;

use konane_sim::konane::Board;

use super::equivalence::compare;
use crate::alpha_beta::{calculate_bounds, AlphaBetaConfig, AlphaBetaContext, AlphaBetaSearch, NodeKind};
use crate::minimax::{position_value, MinimaxConfig, MinimaxContext, MinimaxSearch, Perspective};
use crate::*;

pub mod search_props;
