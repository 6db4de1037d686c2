use konane_sim::prelude::*;
use konane_sim_cli_utils::cli_args::PositionOpts;
use konane_sim_search::{
    alpha_beta::{AlphaBetaSearch, RootDecision},
    minimax::MinimaxSearch,
};

use crate::BenchmarkError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareEntry {
    pub seed: u64,
    pub agree: bool,
    pub minimax: SearchCounter,
    pub alpha_beta: SearchCounter,
}

fn alpha_beta_as_minimax(eval: Eval) -> Eval {
    if eval >= MAX_VALUE {
        MINIMAX_WIN
    } else if eval <= MIN_VALUE {
        MINIMAX_LOSS
    } else {
        eval
    }
}

fn compare_position(opts: &PositionOpts) -> Result<CompareEntry, BenchmarkError> {
    let board = opts.get_position()?;
    let player = board.to_move();
    let mm = MinimaxSearch::new(opts.search.minimax_config()).search(&board, player)?;
    let mut ab_search = AlphaBetaSearch::new(opts.search.alpha_beta_config());
    let (ab, decision): (_, RootDecision<Move>) = ab_search.decide(&board, player)?;
    let agree = mm.best_move == ab.best_move && mm.eval == alpha_beta_as_minimax(ab.eval);
    if !agree || opts.search.debug {
        println!("{board}");
        for (mv, bounds) in &decision.entries {
            println!(" - {mv}: [{:.4}, {:.4}]", bounds.alpha, bounds.beta);
        }
        if let Some(trace) = ab_search.trace() {
            trace.print_tree(trace.root, 0, 2);
        }
    }
    Ok(CompareEntry {
        seed: opts.seed(),
        agree,
        minimax: mm.counter,
        alpha_beta: ab.counter,
    })
}

pub fn run_compare(opts: &PositionOpts, positions: u32) -> Result<(), BenchmarkError> {
    let mut disagreements = 0;
    let mut total_mm = SearchCounter::ZERO;
    let mut total_ab = SearchCounter::ZERO;
    for i in 0..positions {
        let opts_i = PositionOpts {
            seed: Some(opts.seed().wrapping_add(i as u64)),
            ..opts.clone()
        };
        let entry = compare_position(&opts_i)?;
        if !entry.agree {
            disagreements += 1;
        }
        total_mm.add_in_place(&entry.minimax);
        total_ab.add_in_place(&entry.alpha_beta);
        println!(
            "seed={:6} agree={} minimax={:8} alpha_beta={:8} cutoffs={:6}",
            entry.seed,
            entry.agree,
            entry.minimax.states_visited,
            entry.alpha_beta.states_visited,
            entry.alpha_beta.cutoffs
        );
    }

    let ratio = if total_mm.states_visited == 0 {
        1.0
    } else {
        total_ab.states_visited as f64 / total_mm.states_visited as f64
    };
    println!("Minimax:    {total_mm:?}");
    println!("Alpha-beta: {total_ab:?}");
    println!("Node ratio: {ratio:.4}");
    if disagreements > 0 {
        return Err(BenchmarkError::Disagreement(disagreements));
    }
    Ok(())
}
