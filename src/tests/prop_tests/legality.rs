use super::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        max_local_rejects: 2 * CASES,
        max_global_rejects: 2 * CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn every_enumerated_move_can_be_applied(board in arb_reachable_board()) {
        for mv in board.actions() {
            let mut board1 = board.clone();
            if let Err(e) = board1.advance(mv) {
                dbg!(&board);
                dbg!(&mv);
                dbg!(&e);
                panic!("Move is not performable.");
            }
            assert_eq!(board.turn() + 1, board1.turn());
        }
    }

    #[test]
    fn move_enumeration_is_stable(board in arb_reachable_board()) {
        assert_eq!(board.legal_moves(), board.clone().legal_moves());
        assert_eq!(board.legal_moves(), board.legal_moves());
    }

    #[test]
    fn moves_outside_enumeration_are_rejected((board, from, to) in arb_reachable_board().prop_flat_map(|b| {
        let size = b.size();
        (Just(b), arb_coord(size), arb_coord(size))
    })) {
        let mv = Move::Jump { from, to };
        let mut board1 = board.clone();
        assert_eq!(board.legal_moves().contains(&mv), board1.execute_move(mv).is_ok());
        if !board.legal_moves().contains(&mv) {
            assert_eq!(board, board1);
        }
    }

    #[test]
    fn jumps_never_gain_stones((board, mv) in arb_reachable_board_with_move()) {
        prop_assume!(mv.is_some());
        let mv = mv.unwrap();
        let mut board1 = board.clone();
        board1.execute_move(mv).unwrap();
        let player = board.to_move_player();
        let captured = mv.captures() as usize;
        assert_eq!(board.stone_count(player.opposite()) - captured, board1.stone_count(player.opposite()));
        match mv {
            Move::Remove(..) => assert_eq!(board.stone_count(player) - 1, board1.stone_count(player)),
            Move::Jump { .. } => assert_eq!(board.stone_count(player), board1.stone_count(player)),
        }
    }

    #[test]
    fn heuristic_is_strictly_inside_sentinels(board in arb_reachable_board()) {
        for player in PlayerId::VALUES {
            let v = board.eval(player);
            assert!(v > MINIMAX_LOSS && v < MINIMAX_WIN, "{v}");
            assert_eq!(v, -board.eval(player.opposite()));
        }
    }

    #[test]
    fn winner_iff_no_moves_after_opening(board in arb_reachable_board()) {
        if board.is_opening() {
            assert!(board.winner().is_none());
            assert!(!board.actions().is_empty());
        } else {
            assert_eq!(board.winner().is_some(), board.actions().is_empty());
            if let Some(winner) = board.winner() {
                assert_eq!(winner, board.to_move_player().opposite());
            }
        }
    }
}
