use std::{
    fmt::Debug,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use log::{debug, info, warn};

use crate::{
    agent::Agent,
    error::{ContractViolation, Error, Result},
    game_tree_search::{check_state, Game, Results},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchState {
    NotStarted,
    InProgress,
    Finished,
}

/// One record produced by a running match.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent<G: Game> {
    /// Ply 0: every agent has been told the match begins.
    Started { game: G },
    /// A move was applied; `ply` counts from 1.
    Moved { ply: u32, mv: G::Move, game: G },
    /// The game is over (or the active agent gave up). Agents have been told the match ended.
    Finished { results: Results<G::Player>, game: G },
}

impl<G: Game> MatchEvent<G> {
    /// The ply number of the record, `None` for the terminal record.
    pub fn ply(&self) -> Option<u32> {
        match self {
            MatchEvent::Started { .. } => Some(0),
            MatchEvent::Moved { ply, .. } => Some(*ply),
            MatchEvent::Finished { .. } => None,
        }
    }

    pub fn game(&self) -> &G {
        match self {
            MatchEvent::Started { game } | MatchEvent::Moved { game, .. } | MatchEvent::Finished { game, .. } => game,
        }
    }
}

/// Agents bound to players for one match.
pub type Seating<'a, G> = Vec<(<G as Game>::Player, &'a mut dyn Agent<G>)>;

/// Match controller. Iterating yields `Started`, then one `Moved` per ply, then `Finished`.
///
/// The first error (contract violation, agent I/O failure or stop request) is yielded once,
/// after which the iterator is exhausted.
pub struct Match<'a, G: Game> {
    game: G,
    seats: Seating<'a, G>,
    state: MatchState,
    ply: u32,
    stop: Option<Arc<AtomicBool>>,
}

impl<'a, G: Game> Match<'a, G> {
    /// Assigns agents to the game's players in declared order.
    pub fn new(game: G, agents: Vec<&'a mut dyn Agent<G>>) -> Result<Self, ContractViolation> {
        let players = game.players();
        if agents.len() > players.len() {
            return Err(ContractViolation::TooManyAgents {
                agents: agents.len(),
                players: players.len(),
            });
        }
        let seats = players.iter().cloned().zip(agents).collect();
        Ok(Self::from_seating(game, seats))
    }

    /// Assigns agents by explicit player. Players without an agent are allowed until they
    /// become active; every seated player must be one the game declares.
    pub fn with_seats(game: G, seats: Seating<'a, G>) -> Result<Self, ContractViolation> {
        let players = game.players();
        for (i, (player, _)) in seats.iter().enumerate() {
            if !players.contains(player) {
                return Err(ContractViolation::UndeclaredPlayer {
                    player: player.to_string(),
                });
            }
            if seats[..i].iter().any(|(p, _)| p == player) {
                return Err(ContractViolation::DuplicatePlayer {
                    player: player.to_string(),
                });
            }
        }
        Ok(Self::from_seating(game, seats))
    }

    fn from_seating(game: G, seats: Seating<'a, G>) -> Self {
        Self {
            game,
            seats,
            state: MatchState::NotStarted,
            ply: 0,
            stop: None,
        }
    }

    /// Checks `signal` before each move request; once raised, the match yields
    /// `Error::Stopped`. A game that is already over still finishes normally.
    pub fn with_stop_signal(mut self, signal: Arc<AtomicBool>) -> Self {
        self.stop = Some(signal);
        self
    }

    #[inline]
    pub fn state(&self) -> MatchState {
        self.state
    }

    #[inline]
    pub fn game(&self) -> &G {
        &self.game
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    fn begin(&mut self) -> Result<MatchEvent<G>> {
        for (player, agent) in self.seats.iter_mut() {
            agent.match_begins(player.clone(), &self.game)?;
        }
        debug!("match begins: {:?}", self.game);
        Ok(MatchEvent::Started {
            game: self.game.clone(),
        })
    }

    fn finish(&mut self, results: Results<G::Player>) -> Result<MatchEvent<G>> {
        for (_, agent) in self.seats.iter_mut() {
            agent.match_ends(&self.game)?;
        }
        info!("match ends after {} plies: {results}", self.ply);
        Ok(MatchEvent::Finished {
            results,
            game: self.game.clone(),
        })
    }

    fn step(&mut self) -> Result<MatchEvent<G>> {
        check_state(&self.game)?;
        let results = self.game.results();
        if !results.is_empty() {
            return self.finish(results);
        }
        if self.stop.as_ref().is_some_and(|s| s.load(Ordering::SeqCst)) {
            return Err(Error::Stopped { ply: self.ply + 1 });
        }

        let player = self
            .game
            .active_player()
            .ok_or_else(|| ContractViolation::NoActivePlayer {
                state: format!("{:?}", self.game),
            })?;
        let Some((_, agent)) = self.seats.iter_mut().find(|(p, _)| *p == player) else {
            return Err(ContractViolation::UnboundPlayer {
                player: player.to_string(),
            }
            .into());
        };

        let Some(mv) = agent.select_move(&self.game, None)? else {
            if self.game.moves().is_empty() {
                return Err(ContractViolation::NoMovesNorResults {
                    state: format!("{:?}", self.game),
                }
                .into());
            }
            warn!("{:?} made no decision; ending the match unfinished", agent);
            return self.finish(Results::empty());
        };

        let next = self.game.next(&mv);
        for (_, agent) in self.seats.iter_mut() {
            agent.match_moves(&self.game, &mv, &next)?;
        }
        self.game = next;
        self.ply += 1;
        debug!("ply {}: {player} moves {mv}", self.ply);
        Ok(MatchEvent::Moved {
            ply: self.ply,
            mv,
            game: self.game.clone(),
        })
    }
}

impl<'a, G: Game> Iterator for Match<'a, G> {
    type Item = Result<MatchEvent<G>>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = match self.state {
            MatchState::Finished => return None,
            MatchState::NotStarted => {
                self.state = MatchState::InProgress;
                self.begin()
            }
            MatchState::InProgress => self.step(),
        };
        if matches!(event, Err(_) | Ok(MatchEvent::Finished { .. })) {
            self.state = MatchState::Finished;
        }
        Some(event)
    }
}

impl<'a, G: Game> std::iter::FusedIterator for Match<'a, G> {}

impl<'a, G: Game> Debug for Match<'a, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("game", &self.game)
            .field("seats", &self.seats)
            .field("state", &self.state)
            .field("ply", &self.ply)
            .finish()
    }
}

fn drain<G: Game>(mut m: Match<'_, G>) -> Result<(Results<G::Player>, G)> {
    for event in m.by_ref() {
        if let MatchEvent::Finished { results, game } = event? {
            return Ok((results, game));
        }
    }
    Err(Error::Unfinished)
}

/// Runs a full match with agents assigned in player order, returning the results and
/// the final game state.
pub fn run_match<G: Game>(game: G, agents: Vec<&mut dyn Agent<G>>) -> Result<(Results<G::Player>, G)> {
    drain(Match::new(game, agents)?)
}

/// Runs a full match with agents assigned by player.
pub fn run_match_with_seats<G: Game>(game: G, seats: Seating<'_, G>) -> Result<(Results<G::Player>, G)> {
    drain(Match::with_seats(game, seats)?)
}
