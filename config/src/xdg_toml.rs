//! Load the `[env]` table from `$XDG_CONFIG_HOME/<app>/config.toml`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::LoadError;

/// `$XDG_CONFIG_HOME` when set and non-empty, else the platform config dir.
fn config_home() -> Result<PathBuf, LoadError> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir().ok_or_else(|| LoadError::XdgPath("no config directory for this platform".into()))
}

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// Reads `<config_home>/<app_name>/config.toml`. Missing file or section yields an empty map.
pub(crate) fn load_env_map_in(
    config_home: &Path,
    app_name: &str,
) -> Result<HashMap<String, String>, LoadError> {
    let path = config_home.join(app_name).join("config.toml");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.env)
}

/// Returns env key-value pairs from the `[env]` section of the app's XDG config.
pub fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    load_env_map_in(&config_home()?, app_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_config(app: &str, body: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join(app);
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), body).unwrap();
        dir
    }

    #[test]
    fn missing_config_returns_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let map = load_env_map_in(dir.path(), "talentscout").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn env_table_is_read() {
        let dir = app_config(
            "talentscout",
            "[env]\nTALENTSCOUT_MODEL = \"llama-3.1-8b-instant\"\nOPENAI_API_KEY = \"gsk_x\"\n",
        );
        let map = load_env_map_in(dir.path(), "talentscout").unwrap();
        assert_eq!(
            map.get("TALENTSCOUT_MODEL").map(String::as_str),
            Some("llama-3.1-8b-instant")
        );
        assert_eq!(map.get("OPENAI_API_KEY").map(String::as_str), Some("gsk_x"));
    }

    #[test]
    fn config_without_env_section_returns_empty_map() {
        let dir = app_config("talentscout", "[other]\nkey = \"ignored\"\n");
        let map = load_env_map_in(dir.path(), "talentscout").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn invalid_toml_returns_xdg_parse_error() {
        let dir = app_config("talentscout", "not valid toml [[[\n");
        let result = load_env_map_in(dir.path(), "talentscout");
        assert!(matches!(result, Err(LoadError::XdgParse(_))));
    }
}
