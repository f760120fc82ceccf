//! Configuration management for hnreader.
//!
//! Configuration is read from `~/.config/hnreader/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_FEED_URL: &str = "https://api.hnpwa.com/v0/news/1.json";
pub const DEFAULT_ITEM_URL: &str = "https://api.hnpwa.com/v0/item/@id.json";

/// Placeholder in `item_url` that is replaced with the item id.
pub const ITEM_ID_PLACEHOLDER: &str = "@id";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub view: ViewConfig,
    pub output: OutputConfig,
}

/// Where the listing and item resources live.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub feed_url: String,
    pub item_url: String,
    pub user_agent: String,
    /// Request timeout in seconds. Requests wait indefinitely when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            item_url: DEFAULT_ITEM_URL.to_string(),
            user_agent: concat!("hnreader/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
        }
    }
}

/// Pagination and comment layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewConfig {
    pub page_size: u32,
    /// The "next" link never points past this page.
    pub last_page: u32,
    pub comment_indent_px: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            last_page: 3,
            comment_indent_px: 40,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default file the rendered document is written to.
    pub path: Option<PathBuf>,
    /// Custom HTML shell. It must contain `<div id="root"></div>`.
    pub shell: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/hnreader/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("hnreader").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# hnreader configuration

[api]
# Listing resource: a JSON array of stories
feed_url = "https://api.hnpwa.com/v0/news/1.json"

# Item resource; "@id" is replaced with the story id
item_url = "https://api.hnpwa.com/v0/item/@id.json"

# Request timeout in seconds (requests wait indefinitely when unset)
# timeout_secs = 30

[view]
# Stories per page
page_size = 10

# Highest page the "Next" link points to
last_page = 3

# Indentation per comment nesting level, in pixels
comment_indent_px = 40

[output]
# File the rendered document is written to when --output is not given
# path = "/tmp/hnreader.html"

# Custom HTML shell; must contain <div id="root"></div>
# shell = "/path/to/index.html"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
