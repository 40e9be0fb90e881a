use crate::agent::{Agent, FileAgent, TraceAgent};
use crate::error::{ContractViolation, Error};
use crate::game_tree_search::*;
use crate::games::*;
use crate::match_controller::*;





pub mod prop_tests;

/// Plays `moves` in order from `game`.
///
/// Panics: If a move is not advertised by the state it is applied to.
pub fn play<G: Game>(game: G, moves: &[G::Move]) -> G {
    moves.iter().fold(game, |game, mv| {
        assert!(game.moves().contains(mv), "{mv} is not a valid move for {game:?}");
        game.next(mv)
    })
}

pub fn squares(squares: &[u8]) -> Vec<Square> {
    squares.iter().copied().map(Square).collect()
}
