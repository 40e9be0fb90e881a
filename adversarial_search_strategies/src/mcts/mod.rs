use std::{fmt::Debug, sync::Arc};

use adversarial_search::rand::seq::SliceRandom;
use itertools::Itertools;
use log::{debug, trace};

use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MCTSConfig {
    /// Random playouts per candidate move.
    pub simulation_count: u32,
    /// Maximum playout length in plies, None to play until the game ends.
    pub playout_cutoff: Option<u32>,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            simulation_count: 3,
            playout_cutoff: None,
        }
    }
}

impl MCTSConfig {
    pub fn new(simulation_count: u32) -> Self {
        Self {
            simulation_count,
            ..Default::default()
        }
    }
}

/// Flat Monte-Carlo search: every candidate move is valued by the total result of
/// `simulation_count` uniformly random playouts from its successor.
#[derive(Clone)]
pub struct MCTSAgent<G: Game> {
    seat: Seat<G::Player>,
    config: MCTSConfig,
    rng: RngState,
    heuristic: Option<Heuristic<G>>,
    last_counter: SearchCounter,
}

impl<G: Game> MCTSAgent<G> {
    pub fn new(name: impl Into<String>, config: MCTSConfig, rng: impl Into<RngSource>) -> Self {
        Self {
            seat: Seat::new(name),
            config,
            rng: RngState::new(rng),
            heuristic: None,
            last_counter: SearchCounter::default(),
        }
    }

    /// Values playouts stopped by `playout_cutoff`. Without it such playouts count as 0.
    pub fn with_heuristic<F>(mut self, heuristic: F) -> Self
    where
        F: Fn(&G::Player, &G, u32) -> f64 + Send + Sync + 'static,
    {
        self.heuristic = Some(Arc::new(heuristic));
        self
    }

    #[inline]
    pub fn config(&self) -> MCTSConfig {
        self.config
    }

    #[inline]
    pub fn last_counter(&self) -> SearchCounter {
        self.last_counter
    }

    /// Plays uniformly random moves from `game` until it finishes (or the cutoff is hit)
    /// and returns the result for `player`.
    fn random_playout(
        &mut self,
        game: &G,
        player: &G::Player,
        counter: &mut SearchCounter,
    ) -> Result<f64, ContractViolation> {
        let mut game = game.clone();
        let mut plies = 0;
        loop {
            let results = game.results();
            if !results.is_empty() {
                counter.playouts += 1;
                counter.evals += 1;
                return results.get(player).ok_or_else(|| ContractViolation::MissingResult {
                    player: player.to_string(),
                });
            }
            if self.config.playout_cutoff.is_some_and(|cutoff| plies >= cutoff) {
                counter.evals += 1;
                return Ok(match &self.heuristic {
                    Some(heuristic) => heuristic(player, &game, plies + 1),
                    None => 0.0,
                });
            }
            let moves = game.moves();
            let Some(mv) = moves.choose(&mut self.rng) else {
                return Err(ContractViolation::NoMovesNorResults {
                    state: format!("{game:?}"),
                });
            };
            game = game.next(mv);
            plies += 1;
            counter.states_visited += 1;
        }
    }
}

impl<G: Game> Debug for MCTSAgent<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MCTSAgent")
            .field("seat", &self.seat)
            .field("config", &self.config)
            .field("heuristic", &self.heuristic.is_some())
            .field("last_counter", &self.last_counter)
            .finish()
    }
}

impl<G: Game> Agent<G> for MCTSAgent<G> {
    fn seat(&self) -> &Seat<G::Player> {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat<G::Player> {
        &mut self.seat
    }

    fn decision(&mut self, game: &G, candidates: &[G::Move]) -> Result<G::Move, Error> {
        let player = self.seat.require_player()?;
        let mut counter = SearchCounter::default();
        let mut nexts = candidates
            .iter()
            .map(|mv| (mv.clone(), game.next(mv), 0.0))
            .collect_vec();
        // Playouts are interleaved across candidates, one round at a time.
        for _ in 0..self.config.simulation_count {
            for (_, next, total) in nexts.iter_mut() {
                *total += self.random_playout(next, &player, &mut counter)?;
            }
        }
        let scored = nexts
            .into_iter()
            .map(|(mv, _, total)| {
                trace!("{}: {mv} -> {total:.4}", self.seat);
                (mv, total)
            })
            .collect_vec();
        self.last_counter = counter;
        debug!(
            "{}: simulations={} playouts={} states_visited={}",
            self.seat, self.config.simulation_count, counter.playouts, counter.states_visited
        );
        select_best(scored, &mut self.rng).ok_or_else(|| {
            ContractViolation::NoDecision {
                agent: self.seat.name.clone(),
            }
            .into()
        })
    }
}
