use instant::Instant;
use konane_sim::prelude::*;
use konane_sim_cli_utils::cli_args::PositionOpts;

use crate::BenchmarkError;

fn perft_serial(board: &Board, depth: u8) -> Result<u64, KonaneError> {
    if depth == 0 {
        return Ok(0);
    }

    let moves = board.actions();
    let mut n = moves.len() as u64;
    if depth == 1 {
        return Ok(n);
    }
    for mv in moves {
        let mut board1 = board.clone();
        board1.advance(mv)?;
        n += perft_serial(&board1, depth - 1)?;
    }
    Ok(n)
}

pub fn run_perft(opts: &PositionOpts, depth: u8) -> Result<(), BenchmarkError> {
    let board = opts.get_position()?;
    let start_time = Instant::now();
    let n = perft_serial(&board, depth)?;
    let dt = start_time.elapsed();
    let dt_ms = (dt.as_nanos() as f64) * 1e-6;
    let rate = if dt_ms > 0.0 { 1e-3f64 * (n as f64) / dt_ms } else { 0.0 };
    println!("depth = {depth}, n_pos = {n}, dt = {dt_ms:.3} ms, rate = {rate:.3} Mmoves/s");
    Ok(())
}
