use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnekdotError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {0} from {1}")]
    HttpStatus(u16, String),

    #[error("AnekdotError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for AnekdotError {
    fn from(error: std::io::Error) -> Self {
        AnekdotError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for AnekdotError {
    fn from(error: reqwest::Error) -> Self {
        AnekdotError::Reqwest(Box::new(error))
    }
}
