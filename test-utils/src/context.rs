use std::collections::HashMap;
use std::net::TcpListener;

use wiremock::MockServer;

/// Test context owning a running mock backend.
///
/// The server shuts down when the context is dropped, so keep it alive for the
/// whole test.
pub struct TestContext {
    pub server: MockServer,
}

impl TestContext {
    pub fn new(server: MockServer) -> Self {
        Self { server }
    }

    /// Base URL of the mock backend, with a trailing slash.
    pub fn backend_url(&self) -> String {
        format!("{}/", self.server.uri())
    }

    /// Number of requests the backend has received so far.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    /// Query parameters of every request received, in arrival order.
    pub async fn received_queries(&self) -> Vec<HashMap<String, String>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                request
                    .url
                    .query_pairs()
                    .map(|(key, value)| (key.into_owned(), value.into_owned()))
                    .collect()
            })
            .collect()
    }
}

/// URL on localhost where nothing is listening, for connection-refused tests.
///
/// Binds an ephemeral port and releases it immediately.
pub fn unreachable_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind ephemeral port");
    let port = listener
        .local_addr()
        .expect("failed to read ephemeral port")
        .port();
    drop(listener);

    format!("http://127.0.0.1:{}/", port)
}
