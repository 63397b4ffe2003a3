//! Error handling for the sales API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The response body did not match the expected shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

/// Coarse failure class shown to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum ErrorKind {
    /// The request could not complete.
    #[strum(to_string = "NetworkError")]
    Network,
    /// The body did not deserialize into the expected shape.
    #[strum(to_string = "FormatError")]
    Format,
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Decode(_) => ErrorKind::Format,
            ApiError::Reqwest(e) if e.is_decode() => ErrorKind::Format,
            ApiError::Reqwest(_) | ApiError::Http { .. } => ErrorKind::Network,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}
