use crate::game::{Board, Cell, GameOutcome};

/// Render the board as text, one line per row, top row first.
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity((board.width() * 2 + 1) * board.height());

    for row in 0..board.height() {
        for col in 0..board.width() {
            let symbol = match board.cell(row, col) {
                Cell::Empty => "* ",
                Cell::X => "X ",
                Cell::O => "O ",
            };
            out.push_str(symbol);
        }
        out.push('\n');
    }

    out
}

/// Final line announcing the result
pub fn render_outcome(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(symbol) => format!("Player {} won the game!", symbol),
        GameOutcome::Draw => "This match ended in a draw.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Symbol;

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(4, 2);
        assert_eq!(render_board(&board), "* * * * \n* * * * \n");
    }

    #[test]
    fn test_render_pieces() {
        let mut board = Board::new(4, 4);
        board.add_piece(0, Cell::X).unwrap();
        board.add_piece(0, Cell::O).unwrap();
        board.add_piece(3, Cell::O).unwrap();

        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "O * * * ");
        assert_eq!(lines[3], "X * * O ");
    }

    #[test]
    fn test_render_outcome() {
        assert_eq!(
            render_outcome(GameOutcome::Winner(Symbol::X)),
            "Player X won the game!"
        );
        assert_eq!(render_outcome(GameOutcome::Draw), "This match ended in a draw.");
    }
}
