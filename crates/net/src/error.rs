use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside 200..=299.
    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            FetchError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
