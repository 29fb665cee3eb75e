use thiserror::Error;

#[derive(Error, Debug)]
pub enum GamePulseError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} responded with HTTP {status}")]
    UpstreamStatus { provider: String, status: u16 },

    #[error("{provider} returned an error: {message}")]
    Upstream { provider: String, message: String },

    // Parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl From<url::ParseError> for GamePulseError {
    fn from(err: url::ParseError) -> Self {
        GamePulseError::InvalidUrl(err.to_string())
    }
}

pub type GamePulseResult<T> = Result<T, GamePulseError>;
