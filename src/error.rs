use std::path::PathBuf;

/// Reasons a disc cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (grid has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cannot place an empty disc")]
    EmptyDisc,
}

/// Errors raised by grid construction and lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({column}, {row}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },

    #[error("grid dimensions must be positive (got {columns}x{rows})")]
    ZeroDimension { columns: usize, rows: usize },

    #[error("grid of {columns}x{rows} cells is too large")]
    TooLarge { columns: usize, rows: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn {
            column: 9,
            columns: 7,
        };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (grid has 7 columns)"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 2 }.to_string(),
            "column 2 is full"
        );
    }

    #[test]
    fn test_grid_error_display() {
        let err = GridError::OutOfBounds {
            column: 7,
            row: 0,
            columns: 7,
            rows: 6,
        };
        assert_eq!(err.to_string(), "cell (7, 0) is outside the 7x6 grid");
        assert_eq!(
            GridError::TooLarge { columns: 9, rows: 9 }.to_string(),
            "grid of 9x9 cells is too large"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("grid.columns must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: grid.columns must be > 0"
        );
    }
}
