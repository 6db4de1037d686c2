use super::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        max_local_rejects: 2 * CASES,
        max_global_rejects: 2 * CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn alpha_beta_agrees_with_minimax(board in arb_reachable_board(), depth in 1u8..=3) {
        let (mm, ab) = compare(&board, depth);
        if ab.counter.cutoffs > 0 {
            assert!(ab.counter.states_visited < mm.counter.states_visited);
        }
    }

    #[test]
    fn alpha_beta_never_evaluates_more_leaves(board in arb_midgame_board(), depth in 1u8..=3) {
        let (mm, ab) = compare(&board, depth);
        assert!(ab.counter.evals <= mm.counter.evals);
        assert!(ab.diagnostics().deepest_ply <= mm.diagnostics().deepest_ply);
    }

    #[test]
    fn every_traced_node_has_consistent_bounds(board in arb_reachable_board(), depth in 1u8..=3) {
        let mut search = AlphaBetaSearch::new(AlphaBetaConfig { record_trace: true, ..AlphaBetaConfig::new(depth) });
        let res = search.search(&board, board.to_move()).unwrap();
        let trace = search.trace().unwrap();
        assert_eq!(res.counter.states_visited as usize + 1, trace.node_count());
        trace.walk(trace.root, &mut |_, node| {
            assert_ne!(NodeKind::Unresolved, node.kind);
            assert!(node.bounds.is_consistent(), "{node:?}");
            if node.kind == NodeKind::Terminal {
                assert!(node.bounds.alpha == MAX_VALUE || node.bounds.alpha == MIN_VALUE);
            }
            if node.remaining_depth == 0 {
                assert!(node.bounds.is_exact());
            }
        });
        let root_children = trace.children(trace.root).len();
        assert_eq!(board.actions().len(), root_children);
    }

    #[test]
    fn repeated_search_is_identical(board in arb_reachable_board(), depth in 1u8..=3) {
        let mut mm = MinimaxSearch::new(MinimaxConfig::new(depth));
        let a = mm.search(&board, board.to_move()).unwrap();
        let b = mm.search(&board, board.to_move()).unwrap();
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.eval, b.eval);
        assert_eq!(a.counter, b.counter);

        let mut ab = AlphaBetaSearch::new(AlphaBetaConfig::new(depth));
        let (a, da) = ab.decide(&board, board.to_move()).unwrap();
        let (b, db) = ab.decide(&board, board.to_move()).unwrap();
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.eval, b.eval);
        assert_eq!(da, db);
    }

    #[test]
    fn depth_limit_scores_heuristic_without_expanding(board in arb_midgame_board()) {
        prop_assume!(board.winner().is_none());
        let player = board.to_move();
        let mut ctx = MinimaxContext::new(player, Perspective::Agent);
        assert_eq!(board.eval(player), position_value(&board, 0, &mut ctx).unwrap());
        assert_eq!(0, ctx.counter.states_visited);

        let mut ctx = AlphaBetaContext::new(player);
        let bounds = calculate_bounds(&board, 0, None, &mut ctx).unwrap();
        assert_eq!(board.eval(player), bounds.alpha);
        assert!(bounds.is_exact());
        assert_eq!(0, ctx.counter.states_visited);
    }

    #[test]
    fn won_positions_short_circuit(board in ArbReachableBoard { plies: 200..=200, ..Default::default() }.arb(), depth in 1u8..=4) {
        prop_assume!(board.winner().is_some());
        let winner = board.winner().unwrap();
        let mm = MinimaxSearch::new(MinimaxConfig::new(depth)).search(&board, winner).unwrap();
        assert_eq!(MINIMAX_WIN, mm.eval);
        assert_eq!(None, mm.best_move);
        assert_eq!(0, mm.counter.states_visited);

        let ab = AlphaBetaSearch::new(AlphaBetaConfig::new(depth)).search(&board, winner).unwrap();
        assert_eq!(MAX_VALUE, ab.eval);
        assert_eq!(0, ab.counter.states_visited);
    }

    #[test]
    fn chosen_move_is_legal(board in arb_reachable_board(), depth in 1u8..=2) {
        prop_assume!(board.winner().is_none());
        let mv = AlphaBetaSearch::new(AlphaBetaConfig::new(depth)).choose_move(&board).unwrap();
        assert!(board.legal_moves().contains(&mv));
        let mut board = board;
        assert!(board.advance(mv).is_ok());
    }
}
