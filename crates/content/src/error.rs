use thiserror::Error;

/// Navigation on a playlist that has nothing in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("playlist is empty")]
    Empty,
}

/// Failure talking to a content provider.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("video discovery needs an api key (set YT_API_KEY)")]
    MissingApiKey,
}
