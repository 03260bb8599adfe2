use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("auth endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid base URL {0:?}")]
    InvalidUrl(String),
}

impl AuthError {
    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) => None,
        }
    }
}
