use std::time::Duration;

use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

use crate::context::TestContext;

/// What the mock backend answers with.
enum BackendResponse {
    /// 200 with `{"answer": <text>}`
    Answer(String),
    /// 200 with an arbitrary JSON body
    Json(serde_json::Value),
    /// 200 with a raw, possibly non-JSON body
    Raw(String),
    /// Empty body with the given status
    Status(u16),
}

/// Builder for creating test contexts backed by a mock question-answering backend.
///
/// Configure the single response the backend gives to every GET, then call
/// `build()` to start the server.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_answer("A course on full-stack deep learning.")
///     .build()
///     .await;
///
/// let url = test.backend_url();
/// ```
pub struct TestBuilder {
    response: BackendResponse,
    delay: Option<Duration>,
}

impl TestBuilder {
    /// Creates a new test builder whose backend answers with an empty answer.
    pub fn new() -> Self {
        Self {
            response: BackendResponse::Answer(String::new()),
            delay: None,
        }
    }

    /// Backend responds 200 with `{"answer": <answer>}`.
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.response = BackendResponse::Answer(answer.into());
        self
    }

    /// Backend responds 200 with the given JSON body.
    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.response = BackendResponse::Json(body);
        self
    }

    /// Backend responds 200 with the given raw body.
    pub fn with_raw_body(mut self, body: impl Into<String>) -> Self {
        self.response = BackendResponse::Raw(body.into());
        self
    }

    /// Backend responds with the given status and an empty body.
    pub fn with_status(mut self, status: u16) -> Self {
        self.response = BackendResponse::Status(status);
        self
    }

    /// Backend waits this long before responding.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Starts the mock backend and mounts the configured response.
    ///
    /// # Returns
    /// - `TestContext` - Context owning the running mock server
    pub async fn build(self) -> TestContext {
        let server = MockServer::start().await;

        let mut template = match self.response {
            BackendResponse::Answer(answer) => {
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "answer": answer }))
            }
            BackendResponse::Json(body) => ResponseTemplate::new(200).set_body_json(body),
            BackendResponse::Raw(body) => ResponseTemplate::new(200).set_body_string(body),
            BackendResponse::Status(status) => ResponseTemplate::new(status),
        };

        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        Mock::given(method("GET"))
            .respond_with(template)
            .mount(&server)
            .await;

        TestContext::new(server)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
