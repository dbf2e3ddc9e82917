use reqwest::StatusCode;
use thiserror::Error;

/// Why a listing fetch failed. Callers treat every variant the same way;
/// the split only exists so logs say what went wrong.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("Malformed listing: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Malformed listing: timestamp {0} out of range")]
    Timestamp(f64),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum FrontpageError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load posts: {0}")]
    Load(String),

    #[error("JSON output error: {0}")]
    Json(serde_json::Error),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Background fetch task failed: {0}")]
    Task(String),
}

impl FrontpageError {
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, FrontpageError::Fetch(_))
    }
}

impl From<reqwest::Error> for FrontpageError {
    fn from(e: reqwest::Error) -> Self {
        FrontpageError::Fetch(FetchError::Transport(e))
    }
}

pub type Result<T> = std::result::Result<T, FrontpageError>;
