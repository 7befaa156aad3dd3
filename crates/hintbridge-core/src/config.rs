//! Configuration loading for analysis invocations
//!
//! Hosts can keep requested options and globals in a `hintbridge.toml` next
//! to the sources they analyze instead of building the maps in code.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::options::{GlobalMap, OptionMap};

pub const CONFIG_FILENAME: &str = "hintbridge.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML in '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// File-sourced request inputs. Option names are not validated here; the
/// resolver passes unknown keys straight through to the engine.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub options: OptionMap,
    pub globals: GlobalMap,
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

pub fn load_config_or_default(start_dir: &Path) -> Config {
    find_config_file(start_dir)
        .and_then(|path| load_config(&path).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionValue;
    use std::fs;

    fn create_temp_dir() -> tempfile::TempDir {
        tempfile::tempdir().expect("Failed to create temp dir")
    }

    #[test]
    fn load_config_from_file() {
        let dir = create_temp_dir();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &config_path,
            r#"
[options]
strict = false
maxlen = 80
esversion = "es5"

[globals]
jQuery = false
module = true
"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();

        assert_eq!(
            config.options.get("strict"),
            Some(&OptionValue::Bool(false))
        );
        assert_eq!(config.options.get("maxlen"), Some(&OptionValue::Int(80)));
        assert_eq!(
            config.options.get("esversion"),
            Some(&OptionValue::Str("es5".to_string()))
        );
        assert_eq!(config.globals.get("jQuery"), Some(&false));
        assert_eq!(config.globals.get("module"), Some(&true));
    }

    #[test]
    fn default_config_when_missing() {
        let dir = create_temp_dir();

        let config = load_config_or_default(dir.path());

        assert_eq!(config, Config::default());
        assert!(config.options.is_empty());
        assert!(config.globals.is_empty());
    }

    #[test]
    fn error_on_invalid_toml() {
        let dir = create_temp_dir();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "this is not valid { toml }").unwrap();

        let result = load_config(&config_path);

        assert!(result.is_err());
        match result.unwrap_err() {
            ConfigError::ParseError { path, message } => {
                assert_eq!(path, config_path);
                assert!(!message.is_empty());
            }
            _ => panic!("Expected ParseError"),
        }
    }

    #[test]
    fn find_config_file_in_parent_directory() {
        let parent = create_temp_dir();
        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();
        let config_path = parent.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "").unwrap();

        let found = find_config_file(&child);

        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn find_config_file_returns_none_when_not_found() {
        let dir = create_temp_dir();

        let found = find_config_file(dir.path());

        assert!(found.is_none());
    }

    #[test]
    fn partial_config_uses_defaults() {
        let dir = create_temp_dir();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "[options]\ncurly = true").unwrap();

        let config = load_config(&config_path).unwrap();

        assert_eq!(config.options.get("curly"), Some(&OptionValue::Bool(true)));
        assert!(config.globals.is_empty());
    }

    #[test]
    fn unknown_option_names_are_kept() {
        let dir = create_temp_dir();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "[options]\nnot_a_real_option = 3").unwrap();

        let config = load_config(&config_path).unwrap();

        assert_eq!(
            config.options.get("not_a_real_option"),
            Some(&OptionValue::Int(3))
        );
    }
}
