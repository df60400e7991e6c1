use thiserror::Error;

pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid lookup URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Lookup base URL cannot carry a path: {0}")]
    BaseUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Response too large: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Malformed autocomplete response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No cover image found for {0}")]
    CoverNotFound(String),
}
