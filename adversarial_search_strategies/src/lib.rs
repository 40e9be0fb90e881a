#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
use adversarial_search::rand::Rng;

/// Uniformly random move selection
pub mod random;

/// Implementation for minimax search, with and without alpha-beta pruning
pub mod minimax;

/// Implementation for flat Monte-Carlo search
pub mod mcts;

pub mod generic;

pub use generic::Strategy;
pub use mcts::{MCTSAgent, MCTSConfig};
pub use minimax::{AlphaBetaAgent, Heuristic, MiniMaxAgent, MiniMaxConfig};
pub use random::RandomAgent;

pub(crate) use adversarial_search::prelude::*;

/// Picks one of the moves with the highest value, uniformly at random among ties.
/// NaN values are never selected. Returns `None` if no move has a comparable value.
pub fn select_best<M, R: Rng + ?Sized>(scored: Vec<(M, f64)>, rng: &mut R) -> Option<M> {
    let max = scored
        .iter()
        .map(|(_, v)| *v)
        .filter(|v| !v.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);
    let mut best: Vec<M> = scored.into_iter().filter(|(_, v)| *v == max).map(|(m, _)| m).collect();
    if best.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..best.len());
    Some(best.swap_remove(index))
}

#[cfg(test)]
mod tests;
