use std::fmt::{Debug, Display};

use crate::{
    error::{ContractViolation, Result},
    game_tree_search::Game,
};

mod file;
pub use file::*;

mod trace;
pub use trace::*;

/// An agent's name and the player it represents in the current match.
///
/// The binding is only changed by [`Agent::match_begins`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat<P> {
    pub name: String,
    pub player: Option<P>,
}

impl<P> Seat<P> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            player: None,
        }
    }
}

impl<P: Clone> Seat<P> {
    /// The bound player, or an error naming the agent if no match has begun.
    pub fn require_player(&self) -> Result<P, ContractViolation> {
        self.player.clone().ok_or_else(|| ContractViolation::UnboundAgent {
            agent: self.name.clone(),
        })
    }
}

impl<P: Display> Display for Seat<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.player {
            Some(player) => write!(f, "{}({player})", self.name),
            None => write!(f, "{}(None)", self.name),
        }
    }
}

/// A participant in matches of `G`.
///
/// Implementors provide [`Agent::decision`]; the match lifecycle callbacks have default
/// implementations that only keep the seat binding up to date.
pub trait Agent<G: Game> {
    fn seat(&self) -> &Seat<G::Player>;

    fn seat_mut(&mut self) -> &mut Seat<G::Player>;

    #[inline]
    fn name<'a>(&'a self) -> &'a str
    where
        G::Player: 'a,
    {
        &self.seat().name
    }

    #[inline]
    fn player(&self) -> Option<&G::Player> {
        self.seat().player.as_ref()
    }

    /// Chooses one of `candidates`, which is never empty.
    fn decision(&mut self, game: &G, candidates: &[G::Move]) -> Result<G::Move>;

    /// Chooses a move for `game`. Without explicit candidates, the game's own moves are
    /// used. Returns `Ok(None)` when there is nothing to choose from.
    fn select_move(&mut self, game: &G, candidates: Option<&[G::Move]>) -> Result<Option<G::Move>> {
        if let Some(candidates) = candidates {
            if candidates.is_empty() {
                return Ok(None);
            }
            return self.decision(game, candidates).map(Some);
        }
        let moves = game.moves();
        if moves.is_empty() {
            return Ok(None);
        }
        self.decision(game, &moves).map(Some)
    }

    /// Called once per match, before any decision, with the player this agent represents.
    fn match_begins(&mut self, player: G::Player, _game: &G) -> Result<()> {
        self.seat_mut().player = Some(player);
        Ok(())
    }

    /// Called on every participant after each ply.
    fn match_moves(&mut self, _before: &G, _mv: &G::Move, _after: &G) -> Result<()> {
        Ok(())
    }

    /// Called on every participant with the final state.
    fn match_ends(&mut self, _game: &G) -> Result<()> {
        Ok(())
    }
}

impl<G: Game> Debug for dyn Agent<G> + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.seat())
    }
}
