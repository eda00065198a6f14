use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {message}")]
    Api { message: String },

    #[error("Catalog at {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Catalog payload is not a JSON array (found {found})")]
    UnexpectedShape { found: &'static str },
}

pub type Result<T> = std::result::Result<T, ScraperError>;
