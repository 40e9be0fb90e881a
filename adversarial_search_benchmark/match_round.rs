use instant::{Duration, Instant};
use log::info;
use serde::Serialize;

use adversarial_search::prelude::*;
use adversarial_search_strategies::Strategy;

/// A strategy that adds up the work of every decision it makes during a match.
pub struct Tally<G: Game> {
    pub strategy: Strategy<G>,
    pub counter: SearchCounter,
}

impl<G: Game> Tally<G> {
    pub fn new(strategy: Strategy<G>) -> Self {
        Self {
            strategy,
            counter: SearchCounter::default(),
        }
    }
}

impl<G: Game> Agent<G> for Tally<G> {
    fn seat(&self) -> &Seat<G::Player> {
        self.strategy.seat()
    }

    fn seat_mut(&mut self) -> &mut Seat<G::Player> {
        self.strategy.seat_mut()
    }

    fn decision(&mut self, game: &G, candidates: &[G::Move]) -> Result<G::Move, Error> {
        let mv = self.strategy.decision(game, candidates)?;
        self.counter.add_in_place(&self.strategy.last_counter());
        Ok(mv)
    }

    fn match_begins(&mut self, player: G::Player, game: &G) -> Result<(), Error> {
        self.strategy.match_begins(player, game)
    }

    fn match_moves(&mut self, before: &G, mv: &G::Move, after: &G) -> Result<(), Error> {
        self.strategy.match_moves(before, mv, after)
    }

    fn match_ends(&mut self, game: &G) -> Result<(), Error> {
        self.strategy.match_ends(game)
    }
}

/// Outcome of one match from the point of view of the agent under test.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoundOutcome {
    pub score: f64,
    pub dt: Duration,
    pub counter: SearchCounter,
}

/// Plays one match between `agent` and `opponent`. With `flip` the opponent takes the
/// first seat.
pub fn match_round<G: Game>(
    game: G,
    agent: Strategy<G>,
    opponent: Strategy<G>,
    flip: bool,
) -> Result<RoundOutcome, Error> {
    let t0 = Instant::now();
    let mut agent = Tally::new(agent);
    let mut opponent = Tally::new(opponent);
    let agents = if flip {
        vec![&mut opponent as &mut dyn Agent<G>, &mut agent]
    } else {
        vec![&mut agent as &mut dyn Agent<G>, &mut opponent]
    };
    let (results, _) = run_match(game, agents)?;
    let player = agent.seat().require_player()?;
    // An unfinished match (no decision while moves remain) counts as a draw.
    let score = results.get(&player).unwrap_or_default();
    Ok(RoundOutcome {
        score,
        dt: t0.elapsed(),
        counter: agent.counter,
    })
}

/// Totals over all rounds of a `match` run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchSummary {
    pub game: String,
    pub agent: String,
    pub opponent: String,
    pub rounds: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub score: f64,
    pub counter: SearchCounter,
    pub elapsed_ms: u128,
}

impl MatchSummary {
    pub fn new(game: String, agent: String, opponent: String) -> Self {
        Self {
            game,
            agent,
            opponent,
            ..Default::default()
        }
    }

    pub fn add_round(&mut self, outcome: &RoundOutcome) {
        self.rounds += 1;
        if outcome.score > 0.0 {
            self.wins += 1;
        } else if outcome.score < 0.0 {
            self.losses += 1;
        } else {
            self.draws += 1;
        }
        self.score += outcome.score;
        self.counter.add_in_place(&outcome.counter);
        info!(
            "round {:3} ... {:+.1} dt={:6.2}ms states_visited={:8}",
            self.rounds,
            outcome.score,
            outcome.dt.as_secs_f64() * 1e3,
            outcome.counter.states_visited
        );
    }

    /// Mean result per round.
    pub fn mean_score(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.score / self.rounds as f64
        }
    }
}
