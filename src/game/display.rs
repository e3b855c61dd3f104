//! Board snapshots and the display collaborators that receive them after
//! every successful placement.

use std::fmt;
use std::io::Write;

use crate::config::DisplayConfig;

use super::grid::Cell;

/// Read-only copy of every cell, taken right after a placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Snapshot {
    pub(crate) fn new(columns: usize, rows: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), columns * rows);
        Snapshot {
            columns,
            rows,
            cells,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        if column < self.columns && row < self.rows {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Rows in display order, top row first.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    /// Render as text: an optional rule line, then one line per row with
    /// every value followed by the delimiter.
    pub fn render(&self, config: &DisplayConfig) -> String {
        let mut out = String::new();
        if config.show_rule {
            out.push(' ');
            out.push_str(&"-".repeat(self.columns * 3));
            out.push_str(" \n");
        }
        for row in self.iter_rows() {
            for cell in row {
                out.push_str(&cell.value().to_string());
                out.push_str(&config.delimiter);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&DisplayConfig::default()))
    }
}

/// Receives the full board after each successful placement.
pub trait BoardDisplay {
    fn show(&mut self, snapshot: &Snapshot);
}

impl<D: BoardDisplay + ?Sized> BoardDisplay for Box<D> {
    fn show(&mut self, snapshot: &Snapshot) {
        (**self).show(snapshot);
    }
}

impl<D: BoardDisplay + ?Sized> BoardDisplay for &mut D {
    fn show(&mut self, snapshot: &Snapshot) {
        (**self).show(snapshot);
    }
}

/// Discards snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDisplay;

impl BoardDisplay for NoDisplay {
    fn show(&mut self, _snapshot: &Snapshot) {}
}

/// Emits the rendered board as a `tracing` debug event.
#[derive(Debug, Clone, Default)]
pub struct TracingDisplay {
    config: DisplayConfig,
}

impl TracingDisplay {
    pub fn new(config: DisplayConfig) -> Self {
        TracingDisplay { config }
    }
}

impl BoardDisplay for TracingDisplay {
    fn show(&mut self, snapshot: &Snapshot) {
        tracing::debug!(
            columns = snapshot.columns(),
            rows = snapshot.rows(),
            "board:\n{}",
            snapshot.render(&self.config)
        );
    }
}

/// Writes the rendered board to any `io::Write` sink.
///
/// Write failures are logged and otherwise ignored so that a broken output
/// never affects move evaluation.
#[derive(Debug)]
pub struct TextDisplay<W> {
    out: W,
    config: DisplayConfig,
}

impl<W: Write> TextDisplay<W> {
    pub fn new(out: W, config: DisplayConfig) -> Self {
        TextDisplay { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextDisplay<std::io::Stdout> {
    pub fn stdout(config: DisplayConfig) -> Self {
        Self::new(std::io::stdout(), config)
    }
}

impl<W: Write> BoardDisplay for TextDisplay<W> {
    fn show(&mut self, snapshot: &Snapshot) {
        let text = snapshot.render(&self.config);
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write board");
        }
    }
}
