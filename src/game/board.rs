use super::PlayerId;
use crate::error::MoveError;

/// Length of a winning line.
pub const CONNECT: usize = 4;

/// Default grid height used by the front end.
pub const DEFAULT_HEIGHT: usize = 6;
/// Default grid width used by the front end.
pub const DEFAULT_WIDTH: usize = 7;

/// Largest height or width a game accepts.
pub const MAX_DIMENSION: usize = 64;

/// Row/column steps for horizontal, vertical, diagonal down-right and
/// diagonal down-left lines.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

/// A `height` x `width` grid stored row-major. Row 0 is the top, row
/// `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Lowest empty row in `col`, scanning from the bottom up
    pub fn find_drop_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull { column: col })
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<usize, MoveError> {
        let row = self.find_drop_row(col)?;
        self.set(row, col, Cell::Occupied(player));
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Scan every cell as the start of a line in each direction and return
    /// the first line of four owned entirely by `player`.
    pub fn winning_line(&self, player: PlayerId) -> Option<[(usize, usize); CONNECT]> {
        let target = Cell::Occupied(player);
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(line) = self.line_from(row, col, dr, dc) {
                        if line.iter().all(|&(r, c)| self.get(r, c) == target) {
                            return Some(line);
                        }
                    }
                }
            }
        }
        None
    }

    /// Check whether `player` owns any line of four
    pub fn check_win(&self, player: PlayerId) -> bool {
        self.winning_line(player).is_some()
    }

    /// The four coordinates starting at (row, col) stepping by (dr, dc), or
    /// `None` if any of them falls off the board.
    fn line_from(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Option<[(usize, usize); CONNECT]> {
        let mut line = [(0, 0); CONNECT];
        for (step, slot) in line.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * step as isize)?;
            let c = col.checked_add_signed(dc * step as isize)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *slot = (r, c);
        }
        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}
