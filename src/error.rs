use thiserror::Error;

#[derive(Error, Debug)]
pub enum LcdError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("GET {path} returned {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },
    #[error("invalid address: {0}")]
    Validation(String),
    #[error("unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("response from {path} is missing `{field}`")]
    MissingField { path: String, field: &'static str },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl LcdError {
    /// True for failures of the outbound call itself, as opposed to bad input
    /// or an unexpected response body.
    pub fn is_request_error(&self) -> bool {
        matches!(self, LcdError::Transport(_) | LcdError::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, LcdError>;
