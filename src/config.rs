// Configuration loading and parsing (board.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, TeamRecord, SLOT_COUNT};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("invalid team catalog: {source}")]
    CatalogError {
        #[from]
        source: CatalogError,
    },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// board.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire board.toml file.
#[derive(Debug, Clone, Deserialize)]
struct BoardFile {
    board: BoardSection,
    teams: Vec<TeamRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardSection {
    /// Board title shown in the status bar.
    pub name: String,
    /// Path to the SQLite database. When omitted, a per-user data
    /// directory is used (see `Config::resolve_db_path`).
    #[serde(default)]
    pub db_path: Option<String>,
}

/// The assembled, validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub board: BoardSection,
    pub teams: Vec<TeamRecord>,
}

impl Config {
    /// Build the team catalog from the configured team table.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        Ok(Catalog::new(self.teams.clone())?)
    }

    /// Resolve the database path: the configured `db_path` when present,
    /// otherwise `lottery.db` inside the per-user data directory (created
    /// on demand).
    pub fn resolve_db_path(&self) -> anyhow::Result<PathBuf> {
        use anyhow::Context;

        if let Some(ref path) = self.board.db_path {
            return Ok(PathBuf::from(path));
        }

        let dirs = directories::ProjectDirs::from("", "", "draft-lottery")
            .context("could not determine a per-user data directory")?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;
        Ok(data_dir.join("lottery.db"))
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/board.toml` relative to the
/// given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy
/// defaults. Prefer `load_config()` which handles default initialization
/// automatically.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let board_path = base_dir.join("config").join("board.toml");
    let board_text = read_file(&board_path)?;
    let board_file: BoardFile =
        toml::from_str(&board_text).map_err(|e| ConfigError::ParseError {
            path: board_path.clone(),
            source: e,
        })?;

    let config = Config {
        board: board_file.board,
        teams: board_file.teams,
    };

    validate(&config)?;

    Ok(config)
}

/// Ensure `config/board.toml` exists by copying it from `defaults/` when
/// missing. Returns the list of files that were copied.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut copied = Vec::new();

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };

        // Skip .example template files
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                // File already exists in config/, skip it
            }
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working
/// directory. Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.board.name.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "board.name".into(),
            message: "must not be empty".into(),
        });
    }

    if config.teams.len() != SLOT_COUNT {
        return Err(ConfigError::ValidationError {
            field: "teams".into(),
            message: format!(
                "exactly {SLOT_COUNT} teams required, got {}",
                config.teams.len()
            ),
        });
    }

    // Full id validation (uniqueness, non-empty) happens in Catalog::new;
    // run it here so a bad file fails at load time with a config error.
    Catalog::new(config.teams.clone())?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
