use crate::error::GameError;

pub const STANDARD_WIDTH: usize = 7;
pub const STANDARD_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

/// The two values a piece can take. Unlike [`Cell`] it has no empty variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Cell {
    /// The symbol occupying this cell, if any
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Symbol::X),
            Cell::O => Some(Symbol::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl Symbol {
    pub fn to_cell(self) -> Cell {
        match self {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A `width` x `height` grid. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Create an empty 7x6 board
    pub fn standard() -> Self {
        Self::new(STANDARD_WIDTH, STANDARD_HEIGHT)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if row >= self.height || col >= self.width {
            return Err(self.out_of_range(row, col));
        }
        Ok(self.cells[row * self.width + col])
    }

    /// Bounds are checked by the caller.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Drop a piece in a column so it lands on the lowest empty cell.
    ///
    /// Returns `Ok(false)` without touching the board when the column is full.
    pub fn add_piece(&mut self, col: usize, cell: Cell) -> Result<bool, GameError> {
        if col >= self.width {
            return Err(self.out_of_range(0, col));
        }

        for row in (0..self.height).rev() {
            let idx = row * self.width + col;
            if self.cells[idx].is_empty() {
                self.cells[idx] = cell;
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Columns whose topmost cell is still empty, in ascending order
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| self.height > 0 && self.cell(0, col).is_empty())
            .collect()
    }

    /// Build a board from rows drawn top to bottom with `X`, `O` and `.`.
    /// Pieces are dropped column by column, so floating pieces are rejected.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        let mut board = Board::new(width, height);
        for col in 0..width {
            for row in (0..height).rev() {
                let cell = match grid[row][col] {
                    'X' => Cell::X,
                    'O' => Cell::O,
                    _ => break,
                };
                assert!(board.add_piece(col, cell).unwrap());
            }
        }
        for row in 0..height {
            for col in 0..width {
                let expected = grid[row][col] == 'X' || grid[row][col] == 'O';
                assert_eq!(!board.cell(row, col).is_empty(), expected, "floating piece");
            }
        }
        board
    }

    fn out_of_range(&self, row: usize, col: usize) -> GameError {
        GameError::IndexOutOfRange {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
