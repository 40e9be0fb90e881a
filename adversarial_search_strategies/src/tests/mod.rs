use adversarial_search::games::*;
use adversarial_search::prelude::*;

use crate::{select_best, AlphaBetaAgent, MCTSAgent, MCTSConfig, MiniMaxAgent, MiniMaxConfig, RandomAgent};


pub mod mcts;





/// A game with a single decision: the mover picks its own outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OneShot(Option<char>);

impl std::fmt::Display for OneShot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OneShot[{:?}]", self.0)
    }
}

impl Game for OneShot {
    type Player = &'static str;
    type Move = char;

    fn players(&self) -> &[&'static str] {
        &["mover", "other"]
    }

    fn active_player(&self) -> Option<&'static str> {
        Some("mover")
    }

    fn moves(&self) -> MoveList<char> {
        match self.0 {
            None => MoveList::from_slice(&['-', '=', '+']),
            Some(_) => MoveList::new(),
        }
    }

    fn results(&self) -> Results<&'static str> {
        let value = match self.0 {
            None => return Results::empty(),
            Some('+') => 1.0,
            Some('-') => -1.0,
            Some(_) => 0.0,
        };
        Results::for_player(&"mover", self.players(), value)
    }

    fn next(&self, mv: &char) -> Self {
        OneShot(Some(*mv))
    }
}

/// Binds `agent` to the active player of `game` and asks it for a move.
pub fn decide<G: Game, A: Agent<G>>(agent: &mut A, game: &G) -> Option<G::Move> {
    let player = game.active_player().expect("game has an active player");
    agent.match_begins(player, game).expect("agent accepts the match");
    agent.select_move(game, None).expect("agent decides")
}

/// Total result of `a` over `rounds` matches against `b`, alternating who moves first.
pub fn play_rounds<G: Game, A: Agent<G>, B: Agent<G>>(game: &G, a: &mut A, b: &mut B, rounds: usize) -> f64 {
    let mut total = 0.0;
    for round in 0..rounds {
        let agents = if round % 2 == 0 {
            vec![&mut *a as &mut dyn Agent<G>, &mut *b]
        } else {
            vec![&mut *b as &mut dyn Agent<G>, &mut *a]
        };
        let (results, _) = run_match(game.clone(), agents).expect("match completes");
        let player = a.player().expect("agent was seated").clone();
        total += results.get(&player).expect("every player has a result");
    }
    total
}
