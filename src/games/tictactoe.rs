use std::fmt::{Display, Formatter};

use crate::game_tree_search::{Game, MoveList, Results};

use super::{
    board::{board_lines, coord_id, print_board, BoardStyle},
    PlayerName,
};

const EMPTY: u8 = b'.';

/// A square of the board, numbered row by row from 0. Printed as `a1`..`c3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(pub u8);

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (column, row) = (self.0 / 3, self.0 % 3);
        write!(f, "{}", coord_id(column as usize, row as usize))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    board: [u8; 9],
    enabled: u8,
}

impl TicTacToe {
    pub const PLAYERS: [PlayerName; 2] = ["Xs", "Os"];

    pub fn new() -> Self {
        Self {
            board: [EMPTY; 9],
            enabled: 0,
        }
    }

    /// Builds a position from 9 squares of `X`, `O` or `.` and the index of the player to move.
    pub fn from_board(board: &str, enabled: u8) -> Option<Self> {
        let board: [u8; 9] = board.as_bytes().try_into().ok()?;
        if board.iter().any(|b| !matches!(*b, b'X' | b'O' | EMPTY)) || enabled > 1 {
            return None;
        }
        Some(Self { board, enabled })
    }

    pub fn board(&self) -> &[u8; 9] {
        &self.board
    }

    fn complete_lines(&self) -> (usize, usize, bool) {
        let lines: Vec<_> = board_lines(&self.board, 3, 3)
            .into_iter()
            .filter(|ln| ln.len() == 3)
            .collect();
        let xs = lines.iter().filter(|ln| ln[..] == *b"XXX").count();
        let os = lines.iter().filter(|ln| ln[..] == *b"OOO").count();
        let open = lines.iter().any(|ln| ln.contains(&EMPTY));
        (xs, os, open)
    }

    /// A weak positional heuristic: the centre is worth most, corners more than edges.
    pub fn simple_heuristic(player: &PlayerName, game: &TicTacToe, _depth: u32) -> f64 {
        const SQUARE_FACTORS: [f64; 9] = [0.1, -0.1, 0.1, -0.1, 0.2, -0.1, 0.1, -0.1, 0.1];
        let board_value: f64 = game
            .board
            .iter()
            .zip(SQUARE_FACTORS)
            .map(|(s, p)| match s {
                b'X' => p,
                b'O' => -p,
                _ => 0.0,
            })
            .sum();
        if *player == "Xs" {
            board_value
        } else {
            -board_value
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TicTacToe {
    type Player = PlayerName;
    type Move = Square;

    fn players(&self) -> &[PlayerName] {
        &Self::PLAYERS
    }

    fn active_player(&self) -> Option<PlayerName> {
        Some(Self::PLAYERS[self.enabled as usize])
    }

    fn moves(&self) -> MoveList<Square> {
        if self.is_terminal() {
            return MoveList::new();
        }
        (0..9u8)
            .filter(|&sq| self.board[sq as usize] == EMPTY)
            .map(Square)
            .collect()
    }

    fn results(&self) -> Results<PlayerName> {
        let (xs, os, open) = self.complete_lines();
        let result_xs = xs as f64 - os as f64;
        if result_xs == 0.0 && open {
            return Results::empty();
        }
        Results::for_player(&"Xs", &Self::PLAYERS, result_xs)
    }

    fn next(&self, mv: &Square) -> Self {
        let mut board = self.board;
        board[mv.0 as usize] = Self::PLAYERS[self.enabled as usize].as_bytes()[0];
        Self {
            board,
            enabled: (self.enabled + 1) % 2,
        }
    }
}

impl Display for TicTacToe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let board = self.board.map(|b| if b == EMPTY { b' ' } else { b });
        write!(f, "{}", print_board(&board, 3, 3, BoardStyle::GRID))
    }
}
