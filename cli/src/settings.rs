use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use connect4::GameConfig;
use tracing::info;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV: &str = "CONNECT4_CONFIG";

/// The first command-line argument wins over the environment.
pub fn config_path(arg: Option<String>) -> Option<PathBuf> {
    arg.or_else(|| env::var(CONFIG_ENV).ok())
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

pub fn load(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: GameConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    config.validate()?;
    info!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(load(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn argument_beats_environment() {
        let path = config_path(Some("game.toml".to_string()));
        assert_eq!(path, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "height = 8\nsearch_depth = 3").unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.height, 8);
        assert_eq!(config.search_depth, 3);
        assert_eq!(config.width, 7);
    }

    #[test]
    fn invalid_values_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        fs::write(&path, "width = 2\n").unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("width"));

        fs::write(&path, "width = \"wide\"\n").unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));

        assert!(load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
