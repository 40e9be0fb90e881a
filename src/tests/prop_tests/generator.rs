use proptest::prelude::*;
use rand::seq::SliceRandom;

use crate::game_tree_search::Game;

/// Every state of a uniformly random playout from `initial`, stopping at a terminal state
/// or after `max_plies` plies.
pub fn arb_playout<G: Game + 'static>(initial: G, max_plies: usize) -> impl Strategy<Value = Vec<G>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut states = vec![initial.clone()];
        let mut game = initial.clone();
        for _ in 0..max_plies {
            let moves = game.moves();
            let Some(mv) = moves.choose(&mut rng) else {
                break;
            };
            game = game.next(mv);
            states.push(game.clone());
        }
        states
    })
}

/// A state reached by a random playout of up to `max_plies` plies.
pub fn arb_reachable<G: Game + 'static>(initial: G, max_plies: usize) -> impl Strategy<Value = G> {
    (0..=max_plies, arb_playout(initial, max_plies)).prop_map(|(n, states)| {
        let last = n.min(states.len() - 1);
        states[last].clone()
    })
}

pub fn arb_players(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("[a-z]{1,6}", 2..=max).prop_map(|s| s.into_iter().collect())
}
