use std::ops::Add;

mod game_trait;
pub use game_trait::*;

mod results;
pub use results::*;

use crate::error::ContractViolation;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounter {
    /// Number of states visited: recursive evaluations in tree search, plies in playouts.
    pub states_visited: u64,
    /// Number of times a position was valued without further lookahead (terminal or horizon).
    pub evals: u64,
    /// Number of random playouts run to completion.
    pub playouts: u64,
}

impl SearchCounter {
    pub const ZERO: SearchCounter = SearchCounter {
        states_visited: 0,
        evals: 0,
        playouts: 0,
    };

    pub const EVAL: SearchCounter = SearchCounter {
        states_visited: 1,
        evals: 1,
        ..Self::ZERO
    };

    #[inline]
    pub fn add_in_place(&mut self, c: &SearchCounter) {
        self.states_visited += c.states_visited;
        self.evals += c.evals;
        self.playouts += c.playouts;
    }

    pub fn summary(&self, dt_ns: u128) -> String {
        let dt_ms: f64 = 1e-6 * (dt_ns as f64);
        let rate: f64 = if dt_ns == 0 {
            0.0
        } else {
            (1e-6_f64 * 1e9_f64) * (self.states_visited as f64) / (dt_ns as f64)
        };
        format!("dt={dt_ms:.2}ms rate={rate:.4} Mstates/s")
    }
}

impl Add for SearchCounter {
    type Output = SearchCounter;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut a = self;
        a.add_in_place(&rhs);
        a
    }
}

/// Checks the invariants every game state must satisfy: exactly one of moves or results is
/// non-empty, results are zero-sum, and non-terminal states have an active player.
pub fn check_state<G: Game>(game: &G) -> Result<(), ContractViolation> {
    let results = game.results();
    let has_moves = !game.moves().is_empty();
    match (has_moves, results.is_empty()) {
        (true, false) => Err(ContractViolation::MovesAndResults {
            state: format!("{game:?}"),
        }),
        (false, true) => Err(ContractViolation::NoMovesNorResults {
            state: format!("{game:?}"),
        }),
        (false, false) if !results.is_zero_sum() => Err(ContractViolation::NonZeroSum {
            state: format!("{game:?}"),
            sum: results.sum(),
        }),
        (true, true) if game.active_player().is_none() => Err(ContractViolation::NoActivePlayer {
            state: format!("{game:?}"),
        }),
        _ => Ok(()),
    }
}
