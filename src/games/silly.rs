use std::fmt::{Display, Formatter};

use crate::game_tree_search::{Game, MoveList, Results};

use super::PlayerName;

/// A toy game for testing. Players `A` and `B` play, `A` first. On each turn the active
/// player decides to win (`+`), lose (`-`), draw (`=`), keep playing (its own name) or hand
/// the turn over (the other player's name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Silly {
    state: PlayerName,
    result: Option<i8>,
}

impl Silly {
    pub const PLAYERS: [PlayerName; 2] = ["A", "B"];
    pub const MOVES: [char; 5] = ['+', '=', '-', 'A', 'B'];

    pub fn new() -> Self {
        Self {
            state: "A",
            result: None,
        }
    }

    /// A position where `player` is about to move.
    pub fn with_turn(player: PlayerName) -> Self {
        Self {
            state: player,
            result: None,
        }
    }
}

impl Default for Silly {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Silly {
    type Player = PlayerName;
    type Move = char;

    fn players(&self) -> &[PlayerName] {
        &Self::PLAYERS
    }

    fn active_player(&self) -> Option<PlayerName> {
        Some(self.state)
    }

    fn moves(&self) -> MoveList<char> {
        match self.result {
            None => MoveList::from_slice(&Self::MOVES),
            Some(_) => MoveList::new(),
        }
    }

    fn results(&self) -> Results<PlayerName> {
        match self.result {
            None => Results::empty(),
            Some(value) => Results::for_player(&self.state, &Self::PLAYERS, value as f64),
        }
    }

    fn next(&self, mv: &char) -> Self {
        match *mv {
            '+' => Self {
                result: Some(1),
                ..*self
            },
            '=' => Self {
                result: Some(0),
                ..*self
            },
            '-' => Self {
                result: Some(-1),
                ..*self
            },
            'B' => Self::with_turn("B"),
            _ => Self::with_turn("A"),
        }
    }
}

impl Display for Silly {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Silly[{}]", self.state)
    }
}
