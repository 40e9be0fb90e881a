use super::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn for_player_is_zero_sum(players in arb_players(6), index in any::<prop::sample::Index>(), value in -100i32..=100) {
        let player = index.get(&players).clone();
        let results = Results::for_player(&player, &players, value as f64);
        assert_eq!(players.len(), results.len());
        assert!(results.is_zero_sum());
        for p in &players {
            let expected = if *p == player {
                value as f64 * (players.len() - 1) as f64
            } else {
                -value as f64
            };
            assert_eq!(Some(expected), results.get(p));
        }
    }

    #[test]
    fn from_pairs_keeps_last_value(players in arb_players(4), values in prop::collection::vec(-10i32..=10, 8)) {
        let pairs: Vec<_> = players
            .iter()
            .cycle()
            .zip(&values)
            .map(|(p, v)| (p.clone(), *v as f64))
            .collect();
        let results = Results::from_pairs(pairs.clone());
        assert_eq!(players.len(), results.len());
        for p in &players {
            let last = pairs.iter().rev().find(|(q, _)| q == p).map(|(_, v)| *v);
            assert_eq!(last, results.get(p));
        }
    }
}
