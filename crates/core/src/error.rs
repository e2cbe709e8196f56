#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),
    #[error("upstream request timed out: {0}")]
    Timeout(reqwest::Error),
    #[error("upstream request failed: {0}")]
    Transport(reqwest::Error),
    #[error("failed to parse upstream payload: {0}")]
    InvalidPayload(serde_json::Error),
}

impl NewsError {
    /// Classifies a `reqwest` failure raised while sending a request or reading its body.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NewsError::Timeout(err)
        } else {
            NewsError::Transport(err)
        }
    }
}

pub type NewsResult<T> = std::result::Result<T, NewsError>;
