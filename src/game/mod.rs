//! Core Connect Four rules: the gravity grid, players, the rule engine that
//! detects wins, and the display collaborators fed after every placement.

mod display;
mod engine;
mod grid;
mod player;

pub use display::{BoardDisplay, NoDisplay, Snapshot, TextDisplay, TracingDisplay};
pub use engine::{DropOutcome, Line, RuleEngine, CONNECT};
pub use grid::{Cell, Grid, COLUMNS, ROWS};
pub(crate) use grid::cell_count as grid_cell_count;
pub use player::{ParsePlayerError, Player};
