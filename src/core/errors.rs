use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordstackError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Failed to fetch word list: {0}")]
    Fetch(String),

    #[error("Failed to report judgement: {0}")]
    Report(String),

    #[error("Invalid server url: {0}")]
    InvalidServerUrl(String),

    #[error("WordstackError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for WordstackError {
    fn from(error: std::io::Error) -> Self {
        WordstackError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for WordstackError {
    fn from(error: reqwest::Error) -> Self {
        WordstackError::Reqwest(Box::new(error))
    }
}
