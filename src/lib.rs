#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
//! Generic engine for turn-based, perfect-information games.
//!
//! A game is described by implementing [`Game`](game_tree_search::Game) for an immutable
//! position type. Agents implementing [`Agent`](agent::Agent) choose moves, and the
//! [`Match`](match_controller::Match) controller drives a game to completion while
//! notifying every participating agent.
//!
//! The search strategies (random, minimax, alpha-beta, flat Monte Carlo) live in the
//! `adversarial_search_strategies` crate.

/// Game contract, results and search statistics.
pub mod game_tree_search;

/// Agent contract and the agents that do not search: text-stream and trace replay.
pub mod agent;

/// Error taxonomy shared by agents and the match controller.
pub mod error;

/// Match controller state machine.
pub mod match_controller;

/// Pseudorandom number generation
pub mod rng;

/// Reference games and board helpers.
pub mod games;

/// Re-exports the `smallvec` crate
pub use smallvec;

/// Re-exports the `rand` create
pub use rand;

/// Re-exports the `thiserror` crate
pub use thiserror;

pub mod prelude {
    pub use crate::agent::{Agent, FileAgent, Seat, TraceAgent};
    pub use crate::error::{ContractViolation, Error};
    pub use crate::game_tree_search::{check_state, Game, MoveList, Results, SearchCounter};
    pub use crate::match_controller::{run_match, run_match_with_seats, Match, MatchEvent, MatchState, Seating};
    pub use crate::rng::{RngSource, RngState};
}

#[cfg(test)]
mod tests;
