//! Whole-board scan for four identical pieces in a row.
//!
//! Lines are examined family by family in a fixed order: columns, rows, `\`
//! diagonals from the left edge, `\` diagonals from the top edge, `/` diagonals
//! from the right edge, `/` diagonals from the top edge. The diagonal families
//! overlap on the corner-anchored lines; those lines are simply scanned twice.

use super::board::{Board, Cell, Symbol};

/// Number of consecutive pieces needed to win
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy)]
struct Step {
    d_row: isize,
    d_col: isize,
}

const DOWN: Step = Step { d_row: 1, d_col: 0 };
const RIGHT: Step = Step { d_row: 0, d_col: 1 };
const DOWN_RIGHT: Step = Step { d_row: 1, d_col: 1 };
const DOWN_LEFT: Step = Step { d_row: 1, d_col: -1 };

/// Return the symbol that has [`CONNECT`] pieces in a row anywhere on the
/// board, or `None` if no line qualifies.
pub fn find_winner(board: &Board) -> Option<Symbol> {
    let (width, height) = (board.width(), board.height());
    if width == 0 || height == 0 {
        return None;
    }
    let right_edge = width - 1;

    (0..width)
        .find_map(|col| scan_line(board, 0, col, DOWN))
        .or_else(|| (0..height).find_map(|row| scan_line(board, row, 0, RIGHT)))
        .or_else(|| (0..height).find_map(|row| scan_line(board, row, 0, DOWN_RIGHT)))
        .or_else(|| (0..width).find_map(|col| scan_line(board, 0, col, DOWN_RIGHT)))
        .or_else(|| (0..height).find_map(|row| scan_line(board, row, right_edge, DOWN_LEFT)))
        .or_else(|| (0..width).find_map(|col| scan_line(board, 0, col, DOWN_LEFT)))
}

/// Walk one line from `(row, col)` until it leaves the board, counting runs.
fn scan_line(board: &Board, mut row: usize, mut col: usize, step: Step) -> Option<Symbol> {
    let mut previous = Cell::Empty;
    let mut run = 1;

    loop {
        let current = board.cell(row, col);
        if current.is_empty() || current != previous {
            run = 1;
        } else {
            run += 1;
            if run >= CONNECT {
                return current.symbol();
            }
        }
        previous = current;

        (row, col) = advance(board, row, col, step)?;
    }
}

fn advance(board: &Board, row: usize, col: usize, step: Step) -> Option<(usize, usize)> {
    let row = row.checked_add_signed(step.d_row)?;
    let col = col.checked_add_signed(step.d_col)?;
    (row < board.height() && col < board.width()).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(find_winner(&Board::standard()), None);
        assert_eq!(find_winner(&Board::new(0, 0)), None);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::standard();
        for _ in 0..4 {
            board.add_piece(3, Cell::X).unwrap();
        }
        assert_eq!(find_winner(&board), Some(Symbol::X));
    }

    #[test]
    fn test_horizontal_win_bottom_row() {
        let mut board = Board::standard();
        for col in 0..4 {
            board.add_piece(col, Cell::X).unwrap();
        }
        assert_eq!(board.get(5, 0).unwrap(), Cell::X);
        assert_eq!(board.get(5, 3).unwrap(), Cell::X);
        assert_eq!(find_winner(&board), Some(Symbol::X));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            "X......",
            "XX.....",
            "XOX....",
            "OOXX...",
        ]);
        assert_eq!(find_winner(&board), Some(Symbol::X));
    }

    #[test]
    fn test_diagonal_down_right_from_top_row() {
        let board = Board::from_rows(&[
            "..O....",
            "..OO...",
            "..OXO..",
            "..XOXO.",
            "..XXOX.",
            "..OOOX.",
        ]);
        assert_eq!(find_winner(&board), Some(Symbol::O));
    }

    #[test]
    fn test_diagonal_down_left_from_right_edge() {
        let board = Board::from_rows(&[
            ".......",
            "......O",
            ".....OX",
            "....OXO",
            "...OXOX",
            "...OXXO",
        ]);
        assert_eq!(find_winner(&board), Some(Symbol::O));
    }

    #[test]
    fn test_diagonal_down_left_from_top_row() {
        let board = Board::from_rows(&[
            "...X...",
            "..XO...",
            ".XOX...",
            "XOOX...",
            "XOXX...",
            "OOXO...",
        ]);
        assert_eq!(find_winner(&board), Some(Symbol::X));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.add_piece(col, Cell::X).unwrap();
        }
        for _ in 0..3 {
            board.add_piece(6, Cell::O).unwrap();
        }
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_interrupted_run_is_not_a_win() {
        let mut board = Board::standard();
        for (col, cell) in [Cell::X, Cell::X, Cell::O, Cell::X, Cell::X].into_iter().enumerate() {
            board.add_piece(col, cell).unwrap();
        }
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_run_longer_than_four_wins() {
        let mut board = Board::standard();
        for col in 0..7 {
            board.add_piece(col, Cell::O).unwrap();
        }
        assert_eq!(find_winner(&board), Some(Symbol::O));
    }

    #[test]
    fn test_filled_board_without_lines_has_no_winner() {
        let mut board = Board::standard();
        for col in 0..7 {
            for row in (0..6).rev() {
                let cell = if ((col % 4) / 2 + row) % 2 == 0 { Cell::X } else { Cell::O };
                board.add_piece(col, cell).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_column_scan_reports_before_row_scan() {
        // O wins vertically in column 0, X horizontally on the bottom row
        let mut board = Board::new(5, 5);
        board.add_piece(0, Cell::X).unwrap();
        for _ in 0..4 {
            board.add_piece(0, Cell::O).unwrap();
        }
        for col in 1..5 {
            board.add_piece(col, Cell::X).unwrap();
        }
        assert_eq!(find_winner(&board), Some(Symbol::O));
    }
}
