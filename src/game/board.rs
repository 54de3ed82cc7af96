use std::fmt;

use super::player::PlayerId;
use crate::error::{GameError, MoveError};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Number of same-player pieces in a line needed to win.
pub const CONNECT: usize = 4;

/// Right, down, down-right, down-left. Row indices grow downward.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Validated board size. Both dimensions are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    height: usize,
    width: usize,
}

impl Dimensions {
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        if height == 0 || width == 0 {
            return Err(GameError::InvalidDimensions { height, width });
        }
        Ok(Dimensions { height, width })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The occupying player, if any
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    // Row-major, row 0 is the top
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(dims: Dimensions) -> Self {
        Board {
            dims,
            cells: vec![Cell::Empty; dims.cell_count()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `height - 1` is the bottom.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.dims.height && col < self.dims.width,
            "cell ({row}, {col}) outside {}x{} board",
            self.dims.height,
            self.dims.width
        );
        self.cells[row * self.dims.width + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let width = self.dims.width;
        self.cells[row * width + col] = cell;
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.dims.width {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Lowest empty row in `col`, or `None` when the column is full or
    /// outside the board.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.dims.width {
            return None;
        }
        (0..self.dims.height)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<usize, MoveError> {
        if col >= self.dims.width {
            return Err(MoveError::ColumnOutOfRange {
                column: col,
                width: self.dims.width,
            });
        }

        let row = self
            .landing_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.set(row, col, Cell::Occupied(player));
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.dims.width).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Check if the piece at (row, col) is part of a line of [`CONNECT`].
    ///
    /// Only lines through that cell are examined, so this is the check to run
    /// right after a piece lands.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let Some(player) = self.get(row, col).player() else {
            return false;
        };

        DIRECTIONS.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, dr, dc, player) + self.run_length(row, col, -dr, -dc, player)
                >= CONNECT
        })
    }

    /// Scan every cell as a line origin in every direction.
    pub fn has_four_in_a_row(&self, player: PlayerId) -> bool {
        let target = Cell::Occupied(player);
        (0..self.dims.height).any(|row| {
            (0..self.dims.width).any(|col| {
                DIRECTIONS.iter().any(|&(dr, dc)| {
                    (0..CONNECT).all(|k| {
                        self.offset(row, col, dr, dc, k)
                            .is_some_and(|(r, c)| self.get(r, c) == target)
                    })
                })
            })
        })
    }

    /// Consecutive `player` cells starting one step away from (row, col).
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, player: PlayerId) -> usize {
        let target = Cell::Occupied(player);
        (1..CONNECT)
            .map_while(|k| self.offset(row, col, dr, dc, k))
            .take_while(|&(r, c)| self.get(r, c) == target)
            .count()
    }

    fn offset(&self, row: usize, col: usize, dr: isize, dc: isize, k: usize) -> Option<(usize, usize)> {
        let k = k as isize;
        let r = row.checked_add_signed(dr * k)?;
        let c = col.checked_add_signed(dc * k)?;
        (r < self.dims.height && c < self.dims.width).then_some((r, c))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

/// Plain-text board: `.` for empty, `1`/`2` for pieces, column numbers below.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.height {
            let line: Vec<String> = (0..self.dims.width)
                .map(|col| match self.get(row, col) {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(id) => id.number().to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..self.dims.width).map(|col| (col % 10).to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}
