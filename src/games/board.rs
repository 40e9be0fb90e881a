//! Helpers for games played on rectangular boards stored row by row, one byte per square.

const COLUMNS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// A coordinate in spreadsheet style: `coord_id(0, 0) == "a1"`, `coord_id(2, 6) == "c7"`.
/// Columns past `z` continue with `aa`, `ab`, ...
pub fn coord_id(column: usize, row: usize) -> String {
    let mut letters = Vec::new();
    let mut n = column + 1;
    while n > 0 {
        n -= 1;
        letters.push(COLUMNS[n % COLUMNS.len()] as char);
        n /= COLUMNS.len();
    }
    let column: String = letters.into_iter().rev().collect();
    format!("{column}{}", row + 1)
}

/// Separators used by [`print_board`].
#[derive(Debug, Default, Copy, Clone)]
pub struct BoardStyle<'a> {
    pub row_sep: &'a str,
    pub col_sep: &'a str,
    pub joint_sep: &'a str,
}

impl BoardStyle<'static> {
    pub const PLAIN: BoardStyle<'static> = BoardStyle {
        row_sep: "",
        col_sep: "",
        joint_sep: "",
    };

    pub const GRID: BoardStyle<'static> = BoardStyle {
        row_sep: "-",
        col_sep: "|",
        joint_sep: "+",
    };
}

/// Renders the board as a grid, one line per row.
pub fn print_board(board: &[u8], rows: usize, cols: usize, style: BoardStyle) -> String {
    let row_line = |row: usize| {
        let squares: Vec<String> = board[row * cols..(row + 1) * cols]
            .iter()
            .map(|b| (*b as char).to_string())
            .collect();
        format!("{}\n", squares.join(style.col_sep))
    };
    let separator = if style.row_sep.is_empty() {
        String::new()
    } else {
        format!("{}\n", vec![style.row_sep; cols].join(style.joint_sep))
    };
    (0..rows).map(row_line).collect::<Vec<_>>().join(&separator)
}

pub fn board_rows(board: &[u8], rows: usize, cols: usize) -> Vec<Vec<u8>> {
    (0..rows).map(|r| board[r * cols..(r + 1) * cols].to_vec()).collect()
}

pub fn board_columns(board: &[u8], rows: usize, cols: usize) -> Vec<Vec<u8>> {
    (0..cols)
        .map(|c| (0..rows).map(|r| board[r * cols + c]).collect())
        .collect()
}

/// Diagonals going up and to the right, i.e. squares with a constant `row + column`.
pub fn board_positive_diagonals(board: &[u8], rows: usize, cols: usize) -> Vec<Vec<u8>> {
    (0..rows + cols - 1)
        .map(|s| {
            (0..rows)
                .flat_map(|r| (0..cols).map(move |c| (r, c)))
                .filter(|(r, c)| r + c == s)
                .map(|(r, c)| board[r * cols + c])
                .collect()
        })
        .collect()
}

/// Diagonals going down and to the right, i.e. squares with a constant `column - row`.
pub fn board_negative_diagonals(board: &[u8], rows: usize, cols: usize) -> Vec<Vec<u8>> {
    let (rows_i, cols_i) = (rows as isize, cols as isize);
    (1 - rows_i..cols_i)
        .map(|s| {
            (0..rows_i)
                .flat_map(|r| (0..cols_i).map(move |c| (r, c)))
                .filter(|(r, c)| c - r == s)
                .map(|(r, c)| board[(r * cols_i + c) as usize])
                .collect()
        })
        .collect()
}

pub fn board_orthogonals(board: &[u8], rows: usize, cols: usize) -> Vec<Vec<u8>> {
    let mut lines = board_rows(board, rows, cols);
    lines.extend(board_columns(board, rows, cols));
    lines
}

pub fn board_diagonals(board: &[u8], rows: usize, cols: usize) -> Vec<Vec<u8>> {
    let mut lines = board_positive_diagonals(board, rows, cols);
    lines.extend(board_negative_diagonals(board, rows, cols));
    lines
}

/// All horizontal, vertical and diagonal lines of the board.
pub fn board_lines(board: &[u8], rows: usize, cols: usize) -> Vec<Vec<u8>> {
    let mut lines = board_orthogonals(board, rows, cols);
    lines.extend(board_diagonals(board, rows, cols));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(lines: Vec<Vec<u8>>) -> Vec<String> {
        lines.into_iter().map(|l| String::from_utf8_lossy(&l).into_owned()).collect()
    }

    #[test]
    fn test_coord_id() {
        assert_eq!("a1", coord_id(0, 0));
        assert_eq!("c7", coord_id(2, 6));
        assert_eq!("d8", coord_id(3, 7));
        for (i, col) in COLUMNS.iter().enumerate() {
            assert_eq!(format!("{}{}", *col as char, i + 1), coord_id(i, i));
        }
    }

    #[test]
    fn test_coord_id_past_z() {
        assert_eq!("z1", coord_id(25, 0));
        assert_eq!("aa1", coord_id(26, 0));
        assert_eq!("ab2", coord_id(27, 1));
        assert_eq!("zz1", coord_id(701, 0));
        assert_eq!("aaa1", coord_id(702, 0));
    }

    #[test]
    fn test_print_board() {
        let style = |row_sep, col_sep, joint_sep| BoardStyle {
            row_sep,
            col_sep,
            joint_sep,
        };
        assert_eq!("A\n", print_board(b"A", 1, 1, style("!", "!", "!")));
        assert_eq!("AB\nCD\n", print_board(b"ABCD", 2, 2, BoardStyle::PLAIN));
        assert_eq!("A|B\n--\nC|D\n", print_board(b"ABCD", 2, 2, style("-", "|", "")));
        assert_eq!("A|B\n-+-\nC|D\n", print_board(b"ABCD", 2, 2, BoardStyle::GRID));
        assert_eq!("A|B\nC|D\n", print_board(b"ABCD", 2, 2, style("", "|", "+")));
        assert_eq!("AB\nCD\nEF\n", print_board(b"ABCDEF", 3, 2, BoardStyle::PLAIN));
        assert_eq!("ABC\nDEF\n", print_board(b"ABCDEF", 2, 3, BoardStyle::PLAIN));
        assert_eq!(
            " | | \n-+-+-\n | | \n-+-+-\n | | \n",
            print_board(b"         ", 3, 3, BoardStyle::GRID)
        );
    }

    #[test]
    fn test_board_orthogonals() {
        assert_eq!(strings(board_rows(b"ABCDEF", 3, 2)), ["AB", "CD", "EF"]);
        assert_eq!(strings(board_columns(b"ABCDEF", 3, 2)), ["ACE", "BDF"]);
        assert_eq!(strings(board_rows(b"ABCDEF", 2, 3)), ["ABC", "DEF"]);
        assert_eq!(strings(board_columns(b"ABCDEF", 2, 3)), ["AD", "BE", "CF"]);
        assert_eq!(
            strings(board_orthogonals(b"ABCDEFGHI", 3, 3)),
            ["ABC", "DEF", "GHI", "ADG", "BEH", "CFI"]
        );
    }

    #[test]
    fn test_board_diagonals() {
        assert_eq!(
            strings(board_positive_diagonals(b"ABCDEFGHI", 3, 3)),
            ["A", "BD", "CEG", "FH", "I"]
        );
        assert_eq!(
            strings(board_negative_diagonals(b"ABCDEFGHI", 3, 3)),
            ["G", "DH", "AEI", "BF", "C"]
        );
        assert_eq!(strings(board_positive_diagonals(b"ABCDEF", 2, 3)), ["A", "BD", "CE", "F"]);
        assert_eq!(strings(board_negative_diagonals(b"ABCDEF", 2, 3)), ["D", "AE", "BF", "C"]);
        assert_eq!(board_lines(b"ABCDEFGHI", 3, 3).len(), 16);
    }
}
