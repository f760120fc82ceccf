use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::Page;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Page {page} is out of range for a feed of {len} items")]
    PageOutOfRange { page: Page, len: usize },

    #[error("Template error: {0}")]
    Template(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ReaderError>;
