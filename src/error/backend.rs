use reqwest::StatusCode;
use thiserror::Error;

/// Failure to obtain an answer from the question-answering backend.
///
/// The variants exist for server-side logging only. Users see the same apology
/// regardless of which one occurred.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The request or response body did not complete before the client timeout.
    #[error("Backend request timed out")]
    Timeout,

    /// Connection refused, DNS failure, TLS failure, or similar.
    #[error("Failed to reach backend: {0}")]
    Transport(#[source] reqwest::Error),

    /// Backend answered with a non-success status code.
    #[error("Backend responded with status {0}")]
    Status(StatusCode),

    /// Body was not JSON or did not contain an `answer` string.
    #[error("Failed to decode backend response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl BackendError {
    /// Classifies a reqwest error raised while sending the request.
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }

    /// Classifies a reqwest error raised while reading or decoding the body.
    pub fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Decode(err)
        }
    }
}
