use std::time::Duration;

use serenity::all::MessageId;
use test_utils::builder::TestBuilder;

use crate::service::backend::BackendClient;


/// Builds a backend client for the mock server with a short timeout.
fn backend_client(base_url: url::Url, timeout: Duration) -> BackendClient {
    let http = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap();

    BackendClient::new(http, base_url)
}

const ACK_MESSAGE_ID: u64 = 555_000_111;

fn ack_message_id() -> MessageId {
    MessageId::new(ACK_MESSAGE_ID)
}
