//! Load-or-default logic for the recipe config file.
//!
//! The file is read once per game launch. A missing, unreadable, malformed,
//! or invalid file never fails startup: [`load_or_default`] falls back to
//! the built-in default and writes that default back so the player has a
//! file to edit. Write-back failure is logged and swallowed; the in-memory
//! default still drives registration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::RecipeConfig;

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while reading or persisting the recipe config.
/// None of them escape [`load_or_default`]; they exist for logging and for
/// the [`save`] return value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {file}: {source}")]
    Read {
        file: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not well-formed JSON for the expected schema.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The file parsed but violates a validity rule.
    #[error("invalid recipe in {file}: {detail}")]
    Invalid { file: PathBuf, detail: String },

    /// The config could not be written.
    #[error("failed to write {file}: {detail}")]
    Write { file: PathBuf, detail: String },
}

// ===========================================================================
// Loading
// ===========================================================================

/// Load the recipe config from `path`, falling back to
/// [`RecipeConfig::default`] when the file is missing, unreadable,
/// malformed, or invalid. On fallback the default is persisted to `path`,
/// overwriting a corrupt file.
pub fn load_or_default(path: &Path) -> RecipeConfig {
    match try_load(path) {
        Ok(config) => config,
        Err(err) => {
            if is_missing_file(&err) {
                info!("no recipe config at {}, creating the default", path.display());
            } else {
                error!("failed to load recipe config: {err}");
            }
            let config = RecipeConfig::default();
            match save(path, &config) {
                Ok(()) => info!("recipe config saved to {}", path.display()),
                Err(err) => error!("failed to save recipe config: {err}"),
            }
            config
        }
    }
}

/// Read, parse, and validate the file at `path`.
fn try_load(path: &Path) -> Result<RecipeConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        file: path.to_path_buf(),
        source,
    })?;
    let config: RecipeConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        })?;
    validate(&config, path)?;
    Ok(config)
}

/// Positivity rules the schema cannot express: zero output or zero-count
/// ingredients would register a nonsense recipe.
fn validate(config: &RecipeConfig, file: &Path) -> Result<(), ConfigError> {
    if config.craft_amount == 0 {
        return Err(ConfigError::Invalid {
            file: file.to_path_buf(),
            detail: "craftAmount must be at least 1".to_string(),
        });
    }
    for ingredient in &config.ingredients {
        if ingredient.amount == 0 {
            return Err(ConfigError::Invalid {
                file: file.to_path_buf(),
                detail: format!("ingredient '{}' has amount 0", ingredient.tech_type),
            });
        }
    }
    Ok(())
}

fn is_missing_file(err: &ConfigError) -> bool {
    matches!(err, ConfigError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
}

// ===========================================================================
// Saving
// ===========================================================================

/// Write `config` to `path` as pretty-printed JSON, creating the parent
/// directory if needed.
pub fn save(path: &Path, config: &RecipeConfig) -> Result<(), ConfigError> {
    let write_err = |detail: String| ConfigError::Write {
        file: path.to_path_buf(),
        detail,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| write_err(e.to_string()))?;
    fs::write(path, json).map_err(|e| write_err(e.to_string()))
}

// ===========================================================================
// Tests
// ===========================================================================
