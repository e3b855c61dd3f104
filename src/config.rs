use std::path::Path;

use crate::error::ConfigError;
use crate::game::{grid_cell_count, COLUMNS, ROWS};

/// Grid dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            columns: COLUMNS,
            rows: ROWS,
        }
    }
}

/// Text rendering of board snapshots.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Written after every cell value.
    pub delimiter: String,
    /// Print a rule line above the board.
    pub show_rule: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            delimiter: "\t".to_string(),
            show_rule: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.columns == 0 {
            return Err(ConfigError::Validation("grid.columns must be > 0".into()));
        }
        if self.grid.rows == 0 {
            return Err(ConfigError::Validation("grid.rows must be > 0".into()));
        }
        if grid_cell_count(self.grid.columns, self.grid.rows).is_none() {
            return Err(ConfigError::Validation(
                "grid.columns * grid.rows is too large".into(),
            ));
        }
        if self.display.delimiter.contains('\n') {
            return Err(ConfigError::Validation(
                "display.delimiter must not contain a newline".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.grid.columns, 7);
        assert_eq!(config.grid.rows, 6);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[grid]
columns = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.grid.columns, 9);
        assert_eq!(config.grid.rows, 6);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_columns() {
        let mut config = AppConfig::default();
        config.grid.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.grid.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_overflowing_grid() {
        let config: AppConfig =
            toml::from_str("[grid]\ncolumns = 4294967296\nrows = 4294967296\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validation_rejects_newline_delimiter() {
        let mut config = AppConfig::default();
        config.display.delimiter = "\n".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[grid]
columns = 5
rows = 4

[display]
delimiter = " "
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.grid, GridConfig { columns: 5, rows: 4 });
        assert_eq!(config.display.delimiter, " ");
        assert!(config.display.show_rule);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[grid]\nrows = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[grid\ncolumns = ").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
