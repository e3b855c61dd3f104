use tracing::{debug, info, instrument, trace};

use crate::config::AppConfig;
use crate::error::{GridError, MoveError};

use super::display::{BoardDisplay, TracingDisplay};
use super::grid::{Cell, Grid};
use super::player::Player;

/// Run length that wins the game.
pub const CONNECT: usize = 4;

/// The four lines a win can be made along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Left-right.
    Horizontal,
    /// Up-down.
    Vertical,
    /// Top-left to bottom-right (`\`).
    LeftOblique,
    /// Bottom-left to top-right (`/`).
    RightOblique,
}

impl Line {
    /// Evaluation order of the win checks.
    pub const ALL: [Line; 4] = [
        Line::Horizontal,
        Line::Vertical,
        Line::LeftOblique,
        Line::RightOblique,
    ];

    /// First scan direction as a (column, row) step. The second scan walks
    /// the opposite way.
    fn step(self) -> (isize, isize) {
        match self {
            Line::Horizontal => (-1, 0),
            Line::Vertical => (0, -1),
            Line::LeftOblique => (-1, -1),
            Line::RightOblique => (-1, 1),
        }
    }
}

/// Result of a single drop, distinguishing rejected moves from legal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Invalid(MoveError),
    Placed { row: usize },
    PlacedAndWon { row: usize, line: Line },
}

impl DropOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, DropOutcome::PlacedAndWon { .. })
    }

    /// Landing row, if the disc was placed.
    pub fn row(&self) -> Option<usize> {
        match *self {
            DropOutcome::Invalid(_) => None,
            DropOutcome::Placed { row } | DropOutcome::PlacedAndWon { row, .. } => Some(row),
        }
    }

    pub fn error(&self) -> Option<MoveError> {
        match *self {
            DropOutcome::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

/// Owns a grid, places discs for players and decides whether a drop wins.
///
/// The engine keeps no turn or game-over state: callers decide who moves and
/// when to stop after a win is reported. Every successful placement is
/// forwarded to the display as a [`Snapshot`](super::Snapshot).
#[derive(Debug)]
pub struct RuleEngine<D = TracingDisplay> {
    grid: Grid,
    display: D,
}

impl RuleEngine<TracingDisplay> {
    /// Engine that logs the board through `tracing` after each drop.
    pub fn new(grid: Grid) -> Self {
        Self::with_display(grid, TracingDisplay::default())
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, GridError> {
        let grid = Grid::from_config(&config.grid)?;
        Ok(Self::with_display(
            grid,
            TracingDisplay::new(config.display.clone()),
        ))
    }
}

impl Default for RuleEngine<TracingDisplay> {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}

impl<D: BoardDisplay> RuleEngine<D> {
    /// Take ownership of `grid` and clear it for a new game.
    pub fn with_display(mut grid: Grid, display: D) -> Self {
        grid.reset();
        RuleEngine { grid, display }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_parts(self) -> (Grid, D) {
        (self.grid, self.display)
    }

    /// Clear the grid for a new game.
    pub fn reset(&mut self) {
        debug!("resetting grid");
        self.grid.reset();
    }

    /// Drop a disc for `player`, returning `true` only if it wins.
    ///
    /// Rejected moves also return `false`; use [`RuleEngine::play`] to tell
    /// them apart.
    pub fn drop_disc(&mut self, column: usize, player: Player) -> bool {
        self.play(column, player).is_win()
    }

    /// Drop a disc for `player` and report what happened.
    #[instrument(skip(self), level = "debug")]
    pub fn play(&mut self, column: usize, player: Player) -> DropOutcome {
        let row = match self.grid.place(column, player.to_cell()) {
            Ok(row) => row,
            Err(e) => {
                debug!(error = %e, "move rejected");
                return DropOutcome::Invalid(e);
            }
        };
        debug!(row, "disc placed");

        self.display.show(&self.grid.snapshot());

        match self.check_win(column, row) {
            Some(line) => {
                info!(%player, column, row, ?line, "winning move");
                DropOutcome::PlacedAndWon { row, line }
            }
            None => DropOutcome::Placed { row },
        }
    }

    /// Line through the disc at (`column`, `row`) with at least [`CONNECT`]
    /// discs of its colour, if any. Empty or out-of-range cells never win.
    pub fn check_win(&self, column: usize, row: usize) -> Option<Line> {
        let cell = self.grid.get(column, row)?;
        if cell.is_empty() {
            return None;
        }
        Line::ALL
            .into_iter()
            .find(|&line| self.check_line(column, row, cell, line))
    }

    fn check_line(&self, column: usize, row: usize, cell: Cell, line: Line) -> bool {
        let (dc, dr) = line.step();
        let mut run = 1 + self.extend(column, row, cell, dc, dr);
        if run >= CONNECT {
            trace!(?line, run, "run complete after first scan");
            return true;
        }
        run += self.extend(column, row, cell, -dc, -dr);
        trace!(?line, run, "scanned both directions");
        run >= CONNECT
    }

    /// Number of consecutive `cell` discs stepping away from (`column`, `row`),
    /// not counting the starting cell.
    fn extend(&self, column: usize, row: usize, cell: Cell, dc: isize, dr: isize) -> usize {
        let mut count = 0;
        let (mut c, mut r) = (column, row);
        while let (Some(nc), Some(nr)) = (c.checked_add_signed(dc), r.checked_add_signed(dr)) {
            if self.grid.get(nc, nr) != Some(cell) {
                break;
            }
            count += 1;
            c = nc;
            r = nr;
        }
        count
    }
}
