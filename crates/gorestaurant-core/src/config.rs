use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
///
/// Loaded from the config file; the binary layers CLI args and env vars on top.
/// Priority: CLI > Env > File > Defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub orders: OrderConfig,
}

impl Config {
    /// Load config from default location, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::parse(&contents)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(contents: &str) -> crate::Result<Self> {
        toml::from_str(contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save config to disk
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the config file path
    /// Uses XDG on Linux/macOS, AppData on Windows
    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("gorestaurant");

        Ok(config_dir.join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend root, e.g. a json-server instance
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// How prices are rendered. Defaults follow pt-BR / BRL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyConfig {
    /// ISO 4217 code
    #[serde(default = "default_currency_code")]
    pub code: String,

    /// Overrides the currency's own symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    #[serde(default = "default_group_separator")]
    pub group_separator: char,
}

fn default_currency_code() -> String {
    "BRL".to_string()
}

fn default_decimal_separator() -> char {
    ','
}

fn default_group_separator() -> char {
    '.'
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: default_currency_code(),
            symbol: None,
            decimal_separator: default_decimal_separator(),
            group_separator: default_group_separator(),
        }
    }
}

/// Who picks the id of a new order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderIdStrategy {
    /// Count existing orders and use count + 1. Not safe with concurrent
    /// submissions; needed for backends that don't assign ids.
    #[default]
    Sequential,
    /// Omit the id and let the backend assign one
    ServerAssigned,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderConfig {
    #[serde(default)]
    pub id_strategy: OrderIdStrategy,
}
