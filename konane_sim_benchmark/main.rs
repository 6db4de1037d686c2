use structopt::StructOpt;

use konane_sim::{prelude::*, thiserror};
use konane_sim_cli_utils::cli_args::PositionOpts;

mod compare;
mod perft;

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Konane game tree search diagnostics")]
pub enum BenchmarkOpts {
    #[structopt(help = "Search one position and report the decision.")]
    Evaluate {
        #[structopt(long = "--json", help = "Print the report as JSON")]
        json: bool,
        #[structopt(flatten)]
        position: PositionOpts,
    },
    #[structopt(help = "Run minimax and alpha-beta on the same positions and compare.")]
    Compare {
        #[structopt(long = "--positions", help = "Number of seeds to compare, counting up from --seed")]
        positions: Option<u32>,
        #[structopt(flatten)]
        position: PositionOpts,
    },
    #[structopt(help = "Count the positions reachable within a number of plies.")]
    Perft {
        #[structopt(long = "--perft-depth")]
        depth: Option<u8>,
        #[structopt(flatten)]
        position: PositionOpts,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("invalid position: {0}")]
    Position(#[from] KonaneError),
    #[error("search failed: {0}")]
    Search(#[from] SearchError<KonaneError>),
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("minimax and alpha-beta disagree on {0} position(s)")]
    Disagreement(u32),
}

#[derive(Debug, serde::Serialize)]
pub struct EvaluateReport {
    pub to_move: PlayerId,
    pub best_move: Option<String>,
    pub diagnostics: Diagnostics,
}

fn evaluate(opts: &PositionOpts, json: bool) -> Result<(), BenchmarkError> {
    let board = opts.get_position()?;
    let mut search = opts.make_search();
    let to_move = board.to_move();
    let res = search.search(&board, to_move)?;
    let report = EvaluateReport {
        to_move,
        best_move: res.best_move.map(|mv| mv.to_string()),
        diagnostics: res.diagnostics(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{board}");
    match res.best_move {
        Some(mv) => println!("{to_move} plays {mv} (eval={:.4})", res.eval),
        None => println!("{to_move} has no move (eval={:.4})", res.eval),
    }
    println!("{}", report.diagnostics);
    println!("{}", res.counter.summary(res.elapsed.as_nanos()));
    Ok(())
}

fn main() -> Result<(), BenchmarkError> {
    let opts = BenchmarkOpts::from_args();
    match opts {
        BenchmarkOpts::Evaluate { json, position } => evaluate(&position, json),
        BenchmarkOpts::Compare { positions, position } => compare::run_compare(&position, positions.unwrap_or(20)),
        BenchmarkOpts::Perft { depth, position } => perft::run_perft(&position, depth.unwrap_or(4)),
    }
}
