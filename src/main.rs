use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use connect_four_rules::config::AppConfig;
use connect_four_rules::game::{
    BoardDisplay, DropOutcome, Grid, NoDisplay, Player, RuleEngine, TextDisplay,
};

/// Replay a sequence of Connect Four moves and report the first win.
#[derive(Parser)]
#[command(name = "connect-four", about = "Replay Connect Four moves against the rules engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Do not print the board after each placement
    #[arg(long)]
    quiet: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Moves as PLAYER:COLUMN, e.g. `1:3 2:3 1:4`
    moves: Vec<Move>,
}

#[derive(Debug, Clone, Copy)]
struct Move {
    player: Player,
    column: usize,
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((player, column)) = s.split_once(':') else {
            bail!("move '{s}' must look like PLAYER:COLUMN");
        };
        let player = player.parse::<Player>()?;
        let column = column
            .trim()
            .parse::<usize>()
            .with_context(|| format!("invalid column in move '{s}'"))?;
        Ok(Move { player, column })
    }
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(columns) = cli.columns {
        config.grid.columns = columns;
    }
    if let Some(rows) = cli.rows {
        config.grid.rows = rows;
    }
    config.validate().context("validating configuration")?;

    let grid = Grid::from_config(&config.grid)?;
    let display: Box<dyn BoardDisplay> = if cli.quiet {
        Box::new(NoDisplay)
    } else {
        Box::new(TextDisplay::stdout(config.display.clone()))
    };
    let mut engine = RuleEngine::with_display(grid, display);

    info!(
        columns = config.grid.columns,
        rows = config.grid.rows,
        moves = cli.moves.len(),
        "replaying moves"
    );

    for (turn, mv) in cli.moves.iter().enumerate() {
        match engine.play(mv.column, mv.player) {
            DropOutcome::Invalid(e) => {
                warn!(turn = turn + 1, error = %e, "skipping invalid move");
                eprintln!("move {}: {} rejected: {e}", turn + 1, mv.player);
            }
            DropOutcome::Placed { .. } => {}
            DropOutcome::PlacedAndWon { row, line } => {
                println!(
                    "{} wins on move {} (column {}, row {}, {:?})",
                    mv.player,
                    turn + 1,
                    mv.column,
                    row,
                    line
                );
                return Ok(());
            }
        }
    }

    if engine.grid().is_full() {
        println!("board full, no winner");
    } else {
        println!("no winner after {} moves", cli.moves.len());
    }
    Ok(())
}
