use super::*;

fn assert_playout_keeps_contract<G: Game>(states: &[G]) {
    for game in states {
        if let Err(e) = check_state(game) {
            dbg!(game);
            panic!("state breaks the game contract: {e}");
        }
        assert_eq!(game.moves().is_empty(), game.is_terminal());
        if let Some(player) = game.active_player() {
            assert!(game.players().contains(&player));
        }
    }
    for game in &states[..states.len() - 1] {
        assert!(!game.is_terminal(), "playout continued past a terminal state");
    }
}

fn assert_next_does_not_mutate<G: Game>(game: &G) {
    let before = game.clone();
    for mv in game.moves() {
        let next = game.next(&mv);
        assert_eq!(&before, game);
        assert_ne!(&next, game);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn silly_playouts_keep_contract(states in arb_playout(Silly::new(), 20)) {
        assert_playout_keeps_contract(&states);
    }

    #[test]
    fn tictactoe_playouts_keep_contract(states in arb_playout(TicTacToe::new(), 9)) {
        assert_playout_keeps_contract(&states);
        let last = &states[states.len() - 1];
        assert!(last.is_terminal());
        for (_, v) in last.results().iter() {
            assert!(v.fract() == 0.0 && v.abs() <= 2.0);
        }
    }

    #[test]
    fn toads_and_frogs_playouts_keep_contract(states in arb_playout(ToadsAndFrogs::new(3, 2), 100)) {
        assert_playout_keeps_contract(&states);
        let last = &states[states.len() - 1];
        assert!(last.is_terminal());
        let loser = last.active_player().expect("toads and frogs always has a player to move");
        assert_eq!(Some(-1.0), last.results().get(&loser));
    }

    #[test]
    fn cuanteti_playouts_keep_contract(states in arb_playout(Cuanteti::new(), 16)) {
        assert_playout_keeps_contract(&states);
        assert_eq!(17, states.len());
        let last = &states[16];
        let xs = last.results().get(&"Xs").expect("Xs have a result");
        assert_eq!(xs, last.score(b'X') as f64 - last.score(b'O') as f64);
    }

    #[test]
    fn tictactoe_next_does_not_mutate(game in arb_reachable(TicTacToe::new(), 9)) {
        assert_next_does_not_mutate(&game);
    }

    #[test]
    fn toads_and_frogs_next_does_not_mutate(game in arb_reachable(ToadsAndFrogs::new(4, 3), 40)) {
        assert_next_does_not_mutate(&game);
    }

    #[test]
    fn tictactoe_alternates_players(game in arb_reachable(TicTacToe::new(), 8)) {
        prop_assume!(!game.is_terminal());
        let xs = game.board().iter().filter(|b| **b == b'X').count();
        let os = game.board().iter().filter(|b| **b == b'O').count();
        let expected = if xs == os { "Xs" } else { "Os" };
        assert_eq!(Some(expected), game.active_player());
    }
}
