use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Reqwest client error: {0}")]
    Client(#[from] reqwest::Error),

    /// The body is kept so callers can extract the error detail of the API.
    #[error("Response failed with status: {status}")]
    StatusCode { status: StatusCode, body: String },

    #[error(transparent)]
    Http(#[from] http::Error),

    #[error("Operation timed out")]
    Timeout,
}

impl Error {
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::StatusCode { status, .. } => Some(*status),
            Self::Client(err) => err.status(),
            Self::Http(_) | Self::Timeout => None,
        }
    }
}
