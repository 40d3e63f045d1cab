use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, RosaryError};
use crate::types::rosary_data::MysteryType;

pub const DEFAULT_CONFIG_FILE: &str = "rosary.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig { width: 1200.0, height: 800.0 }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Overrides the weekday recommendation when set.
    pub default_mystery: Option<MysteryType>,
    pub log_level: String,
    pub window: WindowConfig,
    /// File the settings came from; `None` when running on defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_mystery: None,
            log_level: "info".to_string(),
            window: WindowConfig::default(),
            source: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self> {
        let mut config = toml::from_str::<Config>(contents).map_err(|source| RosaryError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.source = Some(origin.to_path_buf());
        Ok(config)
    }

    /// The set the rosary opens on: configured, or today's.
    pub fn starting_mystery(&self) -> MysteryType {
        self.default_mystery.unwrap_or_else(crate::catalog::recommended_today)
    }
}

/// Reads the config file. A missing file is not an error: defaults are used
/// and `source` stays `None`. Runs before the logger exists, so it does not log.
pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    match fs::read_to_string(file_path) {
        Ok(contents) => Config::from_toml_str(&contents, file_path),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(source) => Err(RosaryError::Io { path: file_path.to_path_buf(), source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("", Path::new("rosary.toml")).unwrap();
        assert_eq!(config.default_mystery, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.source, Some(PathBuf::from("rosary.toml")));
    }

    #[test]
    fn reads_mystery_override_and_window() {
        let toml = r#"
            default_mystery = "Luminosos"
            log_level = "debug"

            [window]
            width = 900.0
        "#;
        let config = Config::from_toml_str(toml, Path::new("rosary.toml")).unwrap();
        assert_eq!(config.default_mystery, Some(MysteryType::Luminous));
        assert_eq!(config.starting_mystery(), MysteryType::Luminous);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.window.height, 800.0);
    }

    #[test]
    fn unknown_mystery_is_a_parse_error() {
        let err = Config::from_toml_str("default_mystery = \"festive\"", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, RosaryError::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = PathBuf::from("definitely/not/here/rosary.toml");
        assert_eq!(load_config_from_file(&path).unwrap(), Config::default());
    }
}
