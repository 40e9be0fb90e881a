use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use smallvec::SmallVec;

use super::Results;

/// Moves advertised by one game state, in the order the game wants them searched.
pub type MoveList<M> = SmallVec<[M; 16]>;

/// One immutable game position.
///
/// A state is either terminal (`results()` non-empty, `moves()` empty) or non-terminal
/// (`moves()` non-empty, `results()` empty, `active_player()` defined). States are
/// compared and hashed by value.
pub trait Game: Clone + Eq + Hash + Debug + Display {
    /// Role identifier, such as `"Xs"` or `"Os"`.
    type Player: Clone + Eq + Hash + Debug + Display;
    type Move: Clone + PartialEq + Debug + Display;

    /// The fixed, ordered set of players declared when the game was constructed.
    fn players(&self) -> &[Self::Player];

    /// The player enabled to move. May only be `None` on terminal states.
    fn active_player(&self) -> Option<Self::Player>;

    /// All valid moves for the active player. Empty iff the game has finished.
    fn moves(&self) -> MoveList<Self::Move>;

    /// Results of a finished game for every player. Empty iff the game is not finished.
    /// Draws are 0, victories positive and defeats negative; the values sum to zero.
    fn results(&self) -> Results<Self::Player>;

    /// Successor state after applying `mv`, which must be one of `moves()`.
    /// Must not mutate the receiver.
    fn next(&self, mv: &Self::Move) -> Self;

    #[inline]
    fn is_terminal(&self) -> bool {
        !self.results().is_empty()
    }
}
