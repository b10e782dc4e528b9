use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::error::Result;
use crate::state::UiTheme;
use crate::typewriter::WelcomeMessage;

pub const CONFIG_DIR_NAME: &str = "folio";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub profile: ProfileConfig,
    pub github: GithubConfig,
    pub welcome: WelcomeConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProfileConfig {
    pub prompt: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            prompt: "guest@vikash:~$".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GithubConfig {
    pub account: String,
    pub repo_limit: u8,
    pub api_base: String,
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            account: "rajvikash18113".to_string(),
            repo_limit: 3,
            api_base: "https://api.github.com".to_string(),
            user_agent: concat!("folio/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WelcomeConfig {
    pub enabled: bool,
    pub messages: Vec<WelcomeMessage>,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            messages: crate::typewriter::default_welcome(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct UiConfig {
    pub theme: UiTheme,
    pub rain: bool,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads an explicit file, or the per-user default if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(FolioError::ConfigPath(path.to_path_buf()));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    log::debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text).map_err(|source| FolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}
