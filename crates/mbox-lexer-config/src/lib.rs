use mbox_lexer_engine::{FoldLevel, LexerOptions, Style};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {key} in {config_path}: {reason}")]
    InvalidValue {
        config_path: PathBuf,
        key: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fold: FoldConfig,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldConfig {
    /// Level of boundary lines. Message contents sit one level deeper.
    pub base_level: u32,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            base_level: FoldLevel::BASE,
        }
    }
}

/// Terminal colors keyed by style name (`message_from`, `custom_header`, ...).
/// Styles without an entry use the terminal's default color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: BTreeMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = [
            (Style::MessageFrom, "magenta"),
            (Style::MessageFromValue, "dark_magenta"),
            (Style::CustomHeader, "blue"),
            (Style::CustomHeaderValue, "cyan"),
        ]
        .into_iter()
        .map(|(style, color)| (style.name().to_string(), color.to_string()))
        .collect();
        Self { colors }
    }
}

impl Theme {
    pub fn color(&self, style: Style) -> Option<&str> {
        self.colors.get(style.name()).map(String::as_str)
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate(config_path)?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mbox-lexer");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and `$VARS` in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    pub fn lexer_options(&self) -> LexerOptions {
        LexerOptions {
            fold_base: self.fold.base_level,
        }
    }

    fn validate(&self, config_path: &Path) -> Result<(), ConfigError> {
        let invalid = |key: &str, reason: String| ConfigError::InvalidValue {
            config_path: config_path.to_path_buf(),
            key: key.to_string(),
            reason,
        };

        // base + 1 must still fit the level bits
        if self.fold.base_level >= FoldLevel::NUMBER_MASK {
            return Err(invalid(
                "fold.base_level",
                format!("must be below {:#x}", FoldLevel::NUMBER_MASK),
            ));
        }

        if let Some(name) = self
            .theme
            .colors
            .keys()
            .find(|name| !Style::ALL.iter().any(|s| s.name() == name.as_str()))
        {
            return Err(invalid(
                &format!("theme.colors.{name}"),
                "unknown style name".to_string(),
            ));
        }

        Ok(())
    }
}
