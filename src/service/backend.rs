//! Client for the question-answering backend.
//!
//! The backend is a single HTTP endpoint that takes the question in the query
//! string and answers with a JSON object holding an `answer` string. Sources
//! are embedded in that string by the backend and are not inspected here.

use dioxus_logger::tracing;
use serde::Deserialize;
use serenity::all::MessageId;
use url::Url;

use crate::error::backend::BackendError;

#[derive(Debug, Deserialize)]
struct AnswerPayload {
    answer: String,
}

/// Issues one GET per question against the configured backend URL.
///
/// Cloning is cheap; the inner `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Creates a new BackendClient.
    ///
    /// # Arguments
    /// - `http` - HTTP client, expected to carry the request timeout
    /// - `base_url` - Backend endpoint the question is sent to
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Asks the backend a question.
    ///
    /// Sends `query=<question>` and, when a correlation id is given,
    /// `request_id=<id>` so backend logs can be tied to the Discord message.
    /// There is no retry; a single failure is final.
    ///
    /// # Arguments
    /// - `question` - Question text, forwarded unchanged
    /// - `request_id` - Id of the acknowledgment message, if known
    ///
    /// # Returns
    /// - `Ok(String)` - The backend's `answer` field, untrimmed
    /// - `Err(BackendError::Timeout)` - Client timeout elapsed
    /// - `Err(BackendError::Transport)` - Backend unreachable
    /// - `Err(BackendError::Status)` - Non-success status code
    /// - `Err(BackendError::Decode)` - Body is not JSON or has no `answer` string
    pub async fn fetch_answer(
        &self,
        question: &str,
        request_id: Option<MessageId>,
    ) -> Result<String, BackendError> {
        let mut params = vec![("query", question.to_string())];
        if let Some(request_id) = request_id {
            params.push(("request_id", request_id.to_string()));
        }

        let response = self
            .http
            .get(self.base_url.clone())
            .query(&params)
            .send()
            .await
            .map_err(BackendError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let payload: AnswerPayload = response.json().await.map_err(BackendError::from_body)?;

        tracing::debug!(
            "Backend answered {} characters for request {:?}",
            payload.answer.len(),
            request_id
        );

        Ok(payload.answer)
    }
}
