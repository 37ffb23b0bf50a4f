//! Read the project `.env` into a key-value map (applied to the process env in lib).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// `.env` in `override_dir` if given, else in the current directory. `None` when absent.
fn dotenv_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = override_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())?;
    let path = dir.join(".env");
    path.is_file().then_some(path)
}

/// Loads `.env` into a map without touching the process environment.
///
/// Parsing (quotes, comments, `export` prefixes) is delegated to the `dotenv` crate; malformed
/// lines are skipped rather than failing the whole file. A missing file yields an empty map.
pub fn load_env_map(override_dir: Option<&Path>) -> std::io::Result<HashMap<String, String>> {
    let Some(path) = dotenv_path(override_dir) else {
        return Ok(HashMap::new());
    };
    let iter = dotenv::from_path_iter(&path).map_err(|e| match e {
        dotenv::Error::Io(io) => io,
        other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
    })?;
    Ok(iter
        .filter_map(Result::ok)
        .filter(|(k, _)| !k.is_empty())
        .collect())
}
