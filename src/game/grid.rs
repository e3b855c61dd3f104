use crate::config::GridConfig;
use crate::error::{GridError, MoveError};

use super::display::Snapshot;

/// Default width of a standard board.
pub const COLUMNS: usize = 7;
/// Default height of a standard board.
pub const ROWS: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    One,
    Two,
}

impl Cell {
    /// Numeric form used when rendering (0 = empty, 1/2 = player).
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::One => 1,
            Cell::Two => 2,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Number of cells in a `columns` x `rows` grid, `None` if it cannot be
/// allocated. The rendered rule line is three characters per column, so that
/// product must fit too.
pub(crate) fn cell_count(columns: usize, rows: usize) -> Option<usize> {
    columns.checked_mul(3)?;
    columns
        .checked_mul(rows)
        .filter(|&len| len <= isize::MAX as usize)
}

/// Fixed-size column/row matrix with gravity placement.
///
/// Row 0 is the visual top and row `rows - 1` the bottom; discs placed into a
/// column settle on the lowest empty row. The grid has no notion of players
/// or winning, it only stores cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    // Row-major, top row first.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridError> {
        Self::filled(columns, rows, Cell::Empty)
    }

    /// Create a grid with every cell set to `fill`.
    pub fn filled(columns: usize, rows: usize, fill: Cell) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::ZeroDimension { columns, rows });
        }
        let len = cell_count(columns, rows).ok_or(GridError::TooLarge { columns, rows })?;
        Ok(Grid {
            columns,
            rows,
            cells: vec![fill; len],
        })
    }

    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        Self::new(config.columns, config.rows)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, column: usize, row: usize) -> usize {
        row * self.columns + column
    }

    fn check_column(&self, column: usize) -> Result<(), MoveError> {
        if column >= self.columns {
            return Err(MoveError::InvalidColumn {
                column,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Bounds-checked lookup of a single cell.
    pub fn value_at(&self, column: usize, row: usize) -> Result<Cell, GridError> {
        self.get(column, row).ok_or(GridError::OutOfBounds {
            column,
            row,
            columns: self.columns,
            rows: self.rows,
        })
    }

    /// Like [`Grid::value_at`], returning `None` outside the grid.
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        if column < self.columns && row < self.rows {
            Some(self.cells[self.index(column, row)])
        } else {
            None
        }
    }

    /// Row the next disc dropped into `column` would land on.
    ///
    /// Scans upward from the bottom row; the first empty cell found is the
    /// landing row.
    pub fn lowest_open_row(&self, column: usize) -> Result<usize, MoveError> {
        self.check_column(column)?;
        (0..self.rows)
            .map(|offset| self.rows - 1 - offset)
            .find(|&row| self.cells[self.index(column, row)].is_empty())
            .ok_or(MoveError::ColumnFull { column })
    }

    /// Drop `cell` into `column`, returning the row where it landed.
    ///
    /// On error the grid is left untouched.
    pub fn place(&mut self, column: usize, cell: Cell) -> Result<usize, MoveError> {
        if cell.is_empty() {
            return Err(MoveError::EmptyDisc);
        }
        let row = self.lowest_open_row(column)?;
        let idx = self.index(column, row);
        self.cells[idx] = cell;
        Ok(row)
    }

    /// Check if a column is full. Columns outside the grid count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.lowest_open_row(column).is_err()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|column| self.is_column_full(column))
    }

    /// Columns that can still accept a disc, in ascending order.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Clear every cell. Dimensions are unchanged.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Consistent copy of every cell for display.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.columns, self.rows, self.cells.clone())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            columns: COLUMNS,
            rows: ROWS,
            cells: vec![Cell::Empty; COLUMNS * ROWS],
        }
    }
}
