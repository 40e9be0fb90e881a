use std::fmt::{Display, Formatter};

use crate::game_tree_search::{Game, MoveList, Results};

use super::{
    board::{coord_id, print_board, BoardStyle},
    PlayerName,
};

const TOAD: u8 = b'T';
const FROG: u8 = b'F';
const EMPTY: u8 = b'_';

/// Position of the chip being moved, printed as `a1`, `a2`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chip(pub usize);

impl Display for Chip {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", coord_id(0, self.0))
    }
}

/// Toads and Frogs on a one-dimensional strip. Toads start on the left and move right, frogs
/// start on the right and move left. A chip slides into an adjacent empty square or jumps a
/// single opposing chip. The player to move with no legal move loses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToadsAndFrogs {
    board: Vec<u8>,
    enabled: u8,
}

impl ToadsAndFrogs {
    pub const PLAYERS: [PlayerName; 2] = ["Toads", "Frogs"];

    pub fn new(chips_per_player: usize, empty_spaces: usize) -> Self {
        let mut board = vec![TOAD; chips_per_player];
        board.extend(std::iter::repeat(EMPTY).take(empty_spaces));
        board.extend(std::iter::repeat(FROG).take(chips_per_player));
        Self { board, enabled: 0 }
    }

    /// Builds a position from a strip of `T`, `F` and `_` and the index of the player to move.
    pub fn from_board(board: &str, enabled: u8) -> Option<Self> {
        let board = board.as_bytes();
        if board.iter().any(|b| !matches!(*b, TOAD | FROG | EMPTY)) || enabled > 1 {
            return None;
        }
        Some(Self {
            board: board.to_vec(),
            enabled,
        })
    }

    pub fn board(&self) -> &[u8] {
        &self.board
    }

    fn can_move(&self, pos: usize) -> bool {
        if self.enabled == 0 {
            let rest = &self.board[pos..];
            rest.starts_with(b"T_") || rest.starts_with(b"TF_")
        } else {
            let head = &self.board[..=pos];
            head.ends_with(b"_F") || head.ends_with(b"_TF")
        }
    }
}

impl Default for ToadsAndFrogs {
    fn default() -> Self {
        Self::new(3, 2)
    }
}

impl Game for ToadsAndFrogs {
    type Player = PlayerName;
    type Move = Chip;

    fn players(&self) -> &[PlayerName] {
        &Self::PLAYERS
    }

    fn active_player(&self) -> Option<PlayerName> {
        Some(Self::PLAYERS[self.enabled as usize])
    }

    fn moves(&self) -> MoveList<Chip> {
        (0..self.board.len())
            .filter(|&pos| self.can_move(pos))
            .map(Chip)
            .collect()
    }

    fn results(&self) -> Results<PlayerName> {
        if (0..self.board.len()).any(|pos| self.can_move(pos)) {
            return Results::empty();
        }
        let enabled_player = Self::PLAYERS[self.enabled as usize];
        Results::for_player(&enabled_player, &Self::PLAYERS, -1.0)
    }

    fn next(&self, mv: &Chip) -> Self {
        let from = mv.0;
        let mut board = self.board.clone();
        let chip = board[from];
        board[from] = EMPTY;
        let to = if self.enabled == 0 {
            if board[from + 1] == EMPTY {
                from + 1
            } else {
                from + 2
            }
        } else if board[from - 1] == EMPTY {
            from - 1
        } else {
            from - 2
        };
        board[to] = chip;
        Self {
            board,
            enabled: (self.enabled + 1) % 2,
        }
    }
}

impl Display for ToadsAndFrogs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let cols = self.board.len();
        write!(f, "{}", print_board(&self.board, 1, cols, BoardStyle::PLAIN))
    }
}
