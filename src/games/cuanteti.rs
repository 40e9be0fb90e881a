use std::fmt::{Display, Formatter};

use crate::game_tree_search::{Game, MoveList, Results};

use super::{
    board::{board_lines, coord_id, print_board, BoardStyle},
    PlayerName,
};

const EMPTY: u8 = b'.';

/// A square of the 4x4 board, numbered row by row from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CuantetiSquare(pub u8);

impl Display for CuantetiSquare {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (column, row) = (self.0 / 4, self.0 % 4);
        write!(f, "{}", coord_id(column as usize, row as usize))
    }
}

/// Tic-tac-toe on a 4x4 board played until every square is filled. Each line of three or
/// more squares scores 1 for a player with three in a row, or `length - 2` if the player owns
/// the whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cuanteti {
    board: [u8; 16],
    enabled: u8,
}

impl Cuanteti {
    pub const PLAYERS: [PlayerName; 2] = ["Xs", "Os"];

    pub fn new() -> Self {
        Self {
            board: [EMPTY; 16],
            enabled: 0,
        }
    }

    pub fn from_board(board: &str, enabled: u8) -> Option<Self> {
        let board: [u8; 16] = board.as_bytes().try_into().ok()?;
        if board.iter().any(|b| !matches!(*b, b'X' | b'O' | EMPTY)) || enabled > 1 {
            return None;
        }
        Some(Self { board, enabled })
    }

    /// Points scored by the chip `mark` over every line of the board.
    pub fn score(&self, mark: u8) -> usize {
        let triple = [mark; 3];
        board_lines(&self.board, 4, 4)
            .into_iter()
            .filter(|ln| ln.len() > 2)
            .map(|ln| {
                if ln.iter().all(|b| *b == mark) {
                    ln.len() - 2
                } else if ln.windows(3).any(|w| w == triple) {
                    1
                } else {
                    0
                }
            })
            .sum()
    }
}

impl Default for Cuanteti {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Cuanteti {
    type Player = PlayerName;
    type Move = CuantetiSquare;

    fn players(&self) -> &[PlayerName] {
        &Self::PLAYERS
    }

    fn active_player(&self) -> Option<PlayerName> {
        Some(Self::PLAYERS[self.enabled as usize])
    }

    fn moves(&self) -> MoveList<CuantetiSquare> {
        (0..16u8)
            .filter(|&sq| self.board[sq as usize] == EMPTY)
            .map(CuantetiSquare)
            .collect()
    }

    fn results(&self) -> Results<PlayerName> {
        if self.board.contains(&EMPTY) {
            return Results::empty();
        }
        let result_xs = self.score(b'X') as f64 - self.score(b'O') as f64;
        Results::for_player(&"Xs", &Self::PLAYERS, result_xs)
    }

    fn next(&self, mv: &CuantetiSquare) -> Self {
        let mut board = self.board;
        board[mv.0 as usize] = Self::PLAYERS[self.enabled as usize].as_bytes()[0];
        Self {
            board,
            enabled: (self.enabled + 1) % 2,
        }
    }
}

impl Display for Cuanteti {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let board = self.board.map(|b| if b == EMPTY { b' ' } else { b });
        write!(f, "{}", print_board(&board, 4, 4, BoardStyle::GRID))
    }
}
