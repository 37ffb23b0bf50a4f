//! Load configuration from XDG `config.toml` and project `.env`, apply it to the process
//! environment with priority **existing env > .env > XDG**, then read typed
//! [`IntakeSettings`] from the result.

mod dotenv;
mod settings;
mod xdg_toml;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

pub use settings::{
    IntakeSettings, DEFAULT_ADDR, DEFAULT_BASE_URL, DEFAULT_HISTORY_TURNS, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Merges the two file sources: `.env` wins over XDG for the same key.
fn merge_sources(
    dotenv_map: HashMap<String, String>,
    xdg_map: HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = xdg_map;
    merged.extend(dotenv_map);
    merged
}

/// Sets every key of `values` that is not already present in the process environment.
fn apply_missing(values: HashMap<String, String>) -> HashSet<String> {
    let mut applied = HashSet::new();
    for (key, value) in values {
        if std::env::var_os(&key).is_some() {
            continue;
        }
        std::env::set_var(&key, value);
        applied.insert(key);
    }
    applied
}

/// Loads `.env` (from `override_dir` or the current directory) and
/// `$XDG_CONFIG_HOME/<app_name>/config.toml` `[env]`, then sets environment variables only
/// for keys that are **not** already set.
///
/// Returns the names of the variables that were applied.
pub fn load_and_apply(
    app_name: &str,
    override_dir: Option<&Path>,
) -> Result<HashSet<String>, LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead)?;
    Ok(apply_missing(merge_sources(dotenv_map, xdg_map)))
}
