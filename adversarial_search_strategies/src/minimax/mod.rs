use std::{fmt::Debug, sync::Arc};

use adversarial_search::rand::Rng;
use log::{debug, trace};

use crate::*;

pub mod search;

/// Static evaluation of a non-terminal position from the point of view of a player.
/// Called with the player the search maximizes for, the position and its depth.
pub type Heuristic<G> = Arc<dyn Fn(&<G as Game>::Player, &G, u32) -> f64 + Send + Sync>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MiniMaxConfig {
    /// Positions at this depth (plies from the decision) are valued by the heuristic.
    pub horizon: u32,
}

impl Default for MiniMaxConfig {
    fn default() -> Self {
        Self { horizon: 3 }
    }
}

impl MiniMaxConfig {
    pub fn new(horizon: u32) -> Self {
        Self { horizon }
    }
}

/// Per-decision search state shared by the minimax variants.
pub struct SearchContext<'a, G: Game> {
    pub player: G::Player,
    pub horizon: u32,
    pub heuristic: Option<&'a Heuristic<G>>,
    pub rng: &'a mut RngState,
    pub counter: SearchCounter,
}

impl<'a, G: Game> SearchContext<'a, G> {
    pub fn new(
        player: G::Player,
        horizon: u32,
        heuristic: Option<&'a Heuristic<G>>,
        rng: &'a mut RngState,
    ) -> Self {
        Self {
            player,
            horizon,
            heuristic,
            rng,
            counter: SearchCounter::default(),
        }
    }

    /// Heuristic value of `game`. Without a heuristic, a uniform random value in `[-0.5, 0.5)`.
    pub fn heuristic_value(&mut self, game: &G, depth: u32) -> f64 {
        match self.heuristic {
            Some(heuristic) => heuristic(&self.player, game, depth),
            None => self.rng.gen::<f64>() - 0.5,
        }
    }

    /// The searching player's result if `game` is finished, the heuristic value if the
    /// horizon was reached, or `None` if the search must look further.
    pub fn terminal_value(&mut self, game: &G, depth: u32) -> Result<Option<f64>, ContractViolation> {
        let results = game.results();
        if !results.is_empty() {
            self.counter.evals += 1;
            return match results.get(&self.player) {
                Some(value) => Ok(Some(value)),
                None => Err(ContractViolation::MissingResult {
                    player: self.player.to_string(),
                }),
            };
        }
        if depth >= self.horizon {
            self.counter.evals += 1;
            return Ok(Some(self.heuristic_value(game, depth)));
        }
        Ok(None)
    }
}

/// Configuration and state common to [`MiniMaxAgent`] and [`AlphaBetaAgent`].
#[derive(Clone)]
struct SearchAgentCore<G: Game> {
    seat: Seat<G::Player>,
    config: MiniMaxConfig,
    rng: RngState,
    heuristic: Option<Heuristic<G>>,
    last_counter: SearchCounter,
}

impl<G: Game> SearchAgentCore<G> {
    fn new(name: impl Into<String>, config: MiniMaxConfig, rng: impl Into<RngSource>) -> Self {
        Self {
            seat: Seat::new(name),
            config,
            rng: RngState::new(rng),
            heuristic: None,
            last_counter: SearchCounter::default(),
        }
    }

    /// Values every candidate with `evaluate`, applied to its successor at depth 1, and
    /// picks one of the best.
    fn decide<F>(&mut self, game: &G, candidates: &[G::Move], mut evaluate: F) -> Result<G::Move, Error>
    where
        F: FnMut(&G, &mut SearchContext<G>) -> Result<f64, ContractViolation>,
    {
        let player = self.seat.require_player()?;
        let mut ctx = SearchContext::new(player, self.config.horizon, self.heuristic.as_ref(), &mut self.rng);
        let mut scored = Vec::with_capacity(candidates.len());
        for mv in candidates {
            let value = evaluate(&game.next(mv), &mut ctx)?;
            trace!("{}: {mv} -> {value:.4}", self.seat);
            scored.push((mv.clone(), value));
        }
        self.last_counter = ctx.counter;
        debug!(
            "{}: horizon={} states_visited={} evals={}",
            self.seat, self.config.horizon, self.last_counter.states_visited, self.last_counter.evals
        );
        select_best(scored, &mut self.rng).ok_or_else(|| {
            ContractViolation::NoDecision {
                agent: self.seat.name.clone(),
            }
            .into()
        })
    }
}

impl<G: Game> Debug for SearchAgentCore<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchAgent")
            .field("seat", &self.seat)
            .field("config", &self.config)
            .field("heuristic", &self.heuristic.is_some())
            .field("last_counter", &self.last_counter)
            .finish()
    }
}

macro_rules! search_agent {
    ($(#[$meta: meta])* $name: ident, |$game: ident, $ctx: ident| $evaluate: expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<G: Game>(SearchAgentCore<G>);

        impl<G: Game> $name<G> {
            pub fn new(name: impl Into<String>, config: MiniMaxConfig, rng: impl Into<RngSource>) -> Self {
                Self(SearchAgentCore::new(name, config, rng))
            }

            /// Replaces the default random heuristic.
            pub fn with_heuristic<F>(mut self, heuristic: F) -> Self
            where
                F: Fn(&G::Player, &G, u32) -> f64 + Send + Sync + 'static,
            {
                self.0.heuristic = Some(Arc::new(heuristic));
                self
            }

            #[inline]
            pub fn config(&self) -> MiniMaxConfig {
                self.0.config
            }

            /// Work done by the most recent decision.
            #[inline]
            pub fn last_counter(&self) -> SearchCounter {
                self.0.last_counter
            }
        }

        impl<G: Game> Agent<G> for $name<G> {
            fn seat(&self) -> &Seat<G::Player> {
                &self.0.seat
            }

            fn seat_mut(&mut self) -> &mut Seat<G::Player> {
                &mut self.0.seat
            }

            fn decision(&mut self, game: &G, candidates: &[G::Move]) -> Result<G::Move, Error> {
                self.0.decide(game, candidates, |$game, $ctx| $evaluate)
            }
        }
    };
}

search_agent!(
    /// Chooses the move with the best minimax value, searching every line up to the horizon.
    MiniMaxAgent,
    |game, ctx| search::minimax(game, 1, ctx)
);

search_agent!(
    /// Same decisions as [`MiniMaxAgent`] with a deterministic heuristic, with fewer
    /// positions visited thanks to alpha-beta pruning.
    AlphaBetaAgent,
    |game, ctx| search::alphabeta(game, 1, (f64::NEG_INFINITY, f64::INFINITY), ctx)
);
