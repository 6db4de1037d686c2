use instant::Instant;

use konane_sim::types::PlayerId;

use super::{MinimaxConfig, Perspective};
use crate::{Eval, Game, GameTreeSearch, SearchCounter, SearchError, SearchResult, MINIMAX_LOSS, MINIMAX_WIN};

/// Per-decision state threaded through the recursion.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxContext {
    pub agent: PlayerId,
    pub cutoff_perspective: Perspective,
    pub counter: SearchCounter,
}

impl MinimaxContext {
    #[inline]
    pub fn new(agent: PlayerId, cutoff_perspective: Perspective) -> Self {
        Self {
            agent,
            cutoff_perspective,
            counter: SearchCounter::ZERO,
        }
    }

    #[inline]
    fn terminal_value(&self, winner: PlayerId) -> Eval {
        if winner == self.agent {
            MINIMAX_WIN
        } else {
            MINIMAX_LOSS
        }
    }

    #[inline]
    fn cutoff_value<G: Game>(&self, game: &G) -> Eval {
        game.eval(self.cutoff_perspective.player(self.agent))
    }
}

/// Score of playing `action` in `game` with `remaining_depth` plies left, counting the move itself.
///
/// Counts one visited state per call. The position is cloned before the move is applied.
pub fn move_score<G: Game>(
    game: &G,
    action: G::Action,
    remaining_depth: u8,
    ctx: &mut MinimaxContext,
) -> Result<Eval, G::Error> {
    let remaining_depth = remaining_depth.saturating_sub(1);
    ctx.counter.visit(remaining_depth);
    let mut game = game.clone();
    game.advance(action)?;
    position_value(&game, remaining_depth, ctx)
}

/// Minimax value of a position that has already been reached.
///
/// Terminal positions score `MINIMAX_WIN`/`MINIMAX_LOSS` before the depth limit
/// is looked at. At the limit the heuristic is taken from `ctx.cutoff_perspective`.
pub fn position_value<G: Game>(game: &G, remaining_depth: u8, ctx: &mut MinimaxContext) -> Result<Eval, G::Error> {
    if let Some(winner) = game.winner() {
        ctx.counter.evals += 1;
        return Ok(ctx.terminal_value(winner));
    }

    if remaining_depth == 0 {
        ctx.counter.evals += 1;
        return Ok(ctx.cutoff_value(game));
    }

    let mut range: Option<(Eval, Eval)> = None;
    for action in game.actions() {
        let score = move_score(game, action, remaining_depth, ctx)?;
        range = Some(match range {
            None => (score, score),
            Some((hi, lo)) => (hi.max(score), lo.min(score)),
        });
    }

    let Some((hi, lo)) = range else {
        // Stuck without a declared winner
        ctx.counter.evals += 1;
        return Ok(ctx.cutoff_value(game));
    };

    if game.to_move() == ctx.agent {
        Ok(hi)
    } else {
        Ok(lo)
    }
}

fn minimax_root<G: Game>(
    game: &G,
    maximize_player: PlayerId,
    config: MinimaxConfig,
) -> Result<SearchResult<G>, SearchError<G::Error>> {
    if config.depth == 0 {
        return Err(SearchError::ZeroDepth);
    }

    let start_time = Instant::now();
    let mut ctx = MinimaxContext::new(maximize_player, config.cutoff_perspective);

    if let Some(winner) = game.winner() {
        ctx.counter.evals += 1;
        let eval = ctx.terminal_value(winner);
        return Ok(SearchResult::new(
            None,
            eval,
            ctx.counter,
            config.depth,
            start_time.elapsed(),
        ));
    }

    let mut best: Option<(G::Action, Eval)> = None;
    for action in game.actions() {
        let score = move_score(game, action, config.depth, &mut ctx).map_err(SearchError::IllegalMove)?;
        if config.debug {
            println!(" - {action:?}: {score:.4}");
        }
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((action, score));
        }
    }

    let (best_move, eval) = match best {
        Some((action, score)) => (Some(action), score),
        None => (
            None,
            position_value(game, 0, &mut ctx).map_err(SearchError::IllegalMove)?,
        ),
    };

    let res = SearchResult::new(best_move, eval, ctx.counter, config.depth, start_time.elapsed());
    if config.debug {
        println!("{}", res.diagnostics());
    }
    Ok(res)
}

/// Strategy that scores every root move with exhaustive minimax.
#[derive(Debug, Default, Clone)]
pub struct MinimaxSearch {
    pub config: MinimaxConfig,
}

impl MinimaxSearch {
    pub fn new(config: MinimaxConfig) -> Self {
        Self { config }
    }
}

impl<G: Game> GameTreeSearch<G> for MinimaxSearch {
    fn search(&mut self, position: &G, maximize_player: PlayerId) -> Result<SearchResult<G>, SearchError<G::Error>> {
        minimax_root(position, maximize_player, self.config)
    }
}
