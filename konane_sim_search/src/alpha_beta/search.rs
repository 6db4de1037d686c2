use atree::Token;
use instant::Instant;

use konane_sim::types::PlayerId;

use super::{Bounds, NodeKind, RootDecision, SearchTrace};
use crate::minimax::DEFAULT_DEPTH;
use crate::{Game, GameTreeSearch, SearchCounter, SearchError, SearchResult, MAX_VALUE, MIN_VALUE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlphaBetaConfig {
    pub depth: u8,
    /// Keep every visited node of the last decision in an arena.
    pub record_trace: bool,
    pub debug: bool,
}

impl AlphaBetaConfig {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            record_trace: false,
            debug: false,
        }
    }
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

/// Per-decision state threaded through the recursion.
#[derive(Debug)]
pub struct AlphaBetaContext<A> {
    pub agent: PlayerId,
    pub counter: SearchCounter,
    pub trace: Option<SearchTrace<A>>,
}

impl<A> AlphaBetaContext<A> {
    pub fn new(agent: PlayerId) -> Self {
        Self {
            agent,
            counter: SearchCounter::ZERO,
            trace: None,
        }
    }

    pub fn with_trace(agent: PlayerId, remaining_depth: u8) -> Self {
        Self {
            trace: Some(SearchTrace::new(remaining_depth)),
            ..Self::new(agent)
        }
    }

    #[inline]
    fn terminal_bounds(&self, winner: PlayerId) -> Bounds {
        if winner == self.agent {
            Bounds::WIN
        } else {
            Bounds::LOSS
        }
    }

    #[inline]
    fn append_child(&mut self, parent: Option<Token>, action: A, remaining_depth: u8) -> Option<Token> {
        match (parent, self.trace.as_mut()) {
            (Some(parent), Some(trace)) => Some(trace.append(parent, action, remaining_depth)),
            _ => None,
        }
    }
}

/// Bounds of a position that has already been reached, given the bounds its parent held
/// when the position was entered. `parent` is `None` at the root, which is never cut short.
pub fn calculate_bounds<G: Game>(
    game: &G,
    remaining_depth: u8,
    parent: Option<Bounds>,
    ctx: &mut AlphaBetaContext<G::Action>,
) -> Result<Bounds, G::Error> {
    resolve(game, remaining_depth, parent, None, ctx, None)
}

fn resolve<G: Game>(
    game: &G,
    remaining_depth: u8,
    parent: Option<Bounds>,
    token: Option<Token>,
    ctx: &mut AlphaBetaContext<G::Action>,
    entries: Option<&mut Vec<(G::Action, Bounds)>>,
) -> Result<Bounds, G::Error> {
    let (bounds, kind) = expand(game, remaining_depth, parent, token, ctx, entries)?;
    if let (Some(token), Some(trace)) = (token, ctx.trace.as_mut()) {
        trace.resolve(token, kind, bounds);
    }
    Ok(bounds)
}

fn expand<G: Game>(
    game: &G,
    remaining_depth: u8,
    parent: Option<Bounds>,
    token: Option<Token>,
    ctx: &mut AlphaBetaContext<G::Action>,
    mut entries: Option<&mut Vec<(G::Action, Bounds)>>,
) -> Result<(Bounds, NodeKind), G::Error> {
    if let Some(winner) = game.winner() {
        ctx.counter.evals += 1;
        return Ok((ctx.terminal_bounds(winner), NodeKind::Terminal));
    }

    if remaining_depth == 0 {
        ctx.counter.evals += 1;
        return Ok((Bounds::exact(game.eval(ctx.agent)), NodeKind::Cutoff));
    }

    let maximizing = game.to_move() == ctx.agent;
    let child_depth = remaining_depth - 1;
    let mut bounds = Bounds::FULL;
    let mut max_beta = MIN_VALUE;
    let mut min_alpha = MAX_VALUE;
    let mut expanded = false;
    let mut pruned = false;

    let mut actions = game.actions().into_iter().peekable();
    while let Some(action) = actions.next() {
        let mut child = game.clone();
        child.advance(action)?;
        ctx.counter.visit(child_depth);
        let child_token = ctx.append_child(token, action, child_depth);
        let child_bounds = resolve(&child, child_depth, Some(bounds), child_token, ctx, None)?;
        if let Some(entries) = entries.as_mut() {
            entries.push((action, child_bounds));
        }
        expanded = true;
        max_beta = max_beta.max(child_bounds.beta);
        min_alpha = min_alpha.min(child_bounds.alpha);

        let fails = if maximizing {
            bounds.alpha = max_beta;
            parent.is_some_and(|p| p.beta <= MAX_VALUE && p.beta < bounds.alpha)
        } else {
            bounds.beta = min_alpha;
            parent.is_some_and(|p| p.alpha >= MIN_VALUE && p.alpha > bounds.beta)
        };
        if fails {
            if actions.peek().is_some() {
                ctx.counter.cutoffs += 1;
                pruned = true;
            }
            break;
        }
    }

    if !expanded {
        // Stuck without a declared winner
        ctx.counter.evals += 1;
        return Ok((Bounds::exact(game.eval(ctx.agent)), NodeKind::Cutoff));
    }

    if maximizing {
        bounds.beta = max_beta;
    } else {
        bounds.alpha = min_alpha;
    }
    Ok((bounds, NodeKind::Interior { maximizing, pruned }))
}

/// Strategy backed by the alpha-beta evaluator.
#[derive(Debug)]
pub struct AlphaBetaSearch<G: Game> {
    pub config: AlphaBetaConfig,
    last_trace: Option<SearchTrace<G::Action>>,
}

impl<G: Game> Default for AlphaBetaSearch<G> {
    fn default() -> Self {
        Self::new(AlphaBetaConfig::default())
    }
}

impl<G: Game> AlphaBetaSearch<G> {
    pub fn new(config: AlphaBetaConfig) -> Self {
        Self {
            config,
            last_trace: None,
        }
    }

    /// Trace of the most recent decision, if `record_trace` was set.
    pub fn trace(&self) -> Option<&SearchTrace<G::Action>> {
        self.last_trace.as_ref()
    }

    /// Search `position` and return the bounds of every root move along with the result.
    pub fn decide(
        &mut self,
        position: &G,
        maximize_player: PlayerId,
    ) -> Result<(SearchResult<G>, RootDecision<G::Action>), SearchError<G::Error>> {
        let config = self.config;
        if config.depth == 0 {
            return Err(SearchError::ZeroDepth);
        }

        self.last_trace = None;
        let start_time = Instant::now();
        let mut ctx = if config.record_trace {
            AlphaBetaContext::with_trace(maximize_player, config.depth)
        } else {
            AlphaBetaContext::new(maximize_player)
        };
        let root_token = ctx.trace.as_ref().map(|t| t.root);
        let mut decision = RootDecision::new(Bounds::FULL);
        let bounds = resolve(position, config.depth, None, root_token, &mut ctx, Some(&mut decision.entries))
            .map_err(SearchError::IllegalMove)?;
        decision.bounds = bounds;

        let (best_move, eval) = match decision.best() {
            Some((action, b)) => (Some(action), b.alpha),
            None => (None, bounds.alpha),
        };
        let res = SearchResult::new(best_move, eval, ctx.counter, config.depth, start_time.elapsed());
        if config.debug {
            for (action, b) in &decision.entries {
                println!(" - {action:?}: [{:.4}, {:.4}]", b.alpha, b.beta);
            }
            println!("{}", res.diagnostics());
        }
        self.last_trace = ctx.trace;
        Ok((res, decision))
    }
}

impl<G: Game> GameTreeSearch<G> for AlphaBetaSearch<G> {
    fn search(&mut self, position: &G, maximize_player: PlayerId) -> Result<SearchResult<G>, SearchError<G::Error>> {
        self.decide(position, maximize_player).map(|(res, _)| res)
    }
}
