#![cfg(feature = "rewrite")] // Gate tests on the rewrite feature
use cognitive_load::rewrite::API_KEY_VAR;
use cognitive_load::{RewriteClient, RewriteError, TargetLevel, TextProcessor};
use httpmock::{Method::POST, MockServer};
use rstest::*;
use serial_test::serial;
use std::env;

const MODEL: &str = "test-model";
const PATH: &str = "/v1beta/models/test-model:generateContent";

#[fixture]
fn mock_server() -> MockServer {
    MockServer::start()
}

#[fixture]
fn client(mock_server: MockServer) -> (RewriteClient, MockServer) {
    let endpoint = format!("{}/v1beta", mock_server.base_url());
    (RewriteClient::new(&endpoint, MODEL, "secret"), mock_server)
}

fn candidate(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
    })
}

#[rstest]
fn returns_first_candidate_text(client: (RewriteClient, MockServer)) {
    let (client, server) = client;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(PATH)
            .header("x-goog-api-key", "secret")
            .header("content-type", "application/json")
            .body_contains("for a Beginner reader")
            .body_contains("Photosynthesis converts light.");
        then.status(200).json_body(candidate("Plants use light to make food."));
    });
    let rewritten = client
        .with_level(TargetLevel::Beginner)
        .process("Photosynthesis converts light.")
        .unwrap_or_else(|e| panic!("rewrite error: {e:?}"));
    assert_eq!(rewritten, "Plants use light to make food.");
    mock.assert();
}

#[derive(Clone, Copy)]
enum ExpectedError {
    Request { retryable: bool },
    Empty,
    InvalidResponse,
}

#[rstest]
#[case(503, None, ExpectedError::Request { retryable: true })]
#[case(429, None, ExpectedError::Request { retryable: true })]
#[case(400, None, ExpectedError::Request { retryable: false })]
#[case(200, Some(serde_json::json!({ "candidates": [] })), ExpectedError::InvalidResponse)]
#[case(200, Some(serde_json::json!({ "oops": true })), ExpectedError::InvalidResponse)]
#[case(200, Some(candidate("   ")), ExpectedError::Empty)]
fn maps_failures(
    #[case] http_status: u16,
    #[case] response_json: Option<serde_json::Value>,
    #[case] expected_error: ExpectedError,
    client: (RewriteClient, MockServer),
) {
    let (client, server) = client;
    server.mock(|when, then| {
        when.method(POST).path(PATH);
        match response_json {
            Some(json) => {
                then.status(http_status)
                    .header("content-type", "application/json")
                    .json_body(json);
            }
            None => {
                then.status(http_status);
            }
        }
    });
    let Err(err) = client.process("Some dense paragraph.") else {
        panic!("expected error")
    };
    match expected_error {
        ExpectedError::Request { retryable } => {
            assert!(matches!(err, RewriteError::Request(_)), "got {err:?}");
            assert_eq!(err.is_retryable(), retryable);
        }
        ExpectedError::Empty => assert_eq!(err, RewriteError::Empty),
        ExpectedError::InvalidResponse => assert_eq!(err, RewriteError::InvalidResponse),
    }
}

#[rstest]
fn rejects_blank_input(client: (RewriteClient, MockServer)) {
    let (client, _server) = client;
    assert_eq!(client.process(" \n "), Err(RewriteError::Empty));
}

#[rstest]
#[serial]
fn blank_credential_is_missing() {
    // Safety: env mutation is serialised by `serial`.
    unsafe { env::set_var(API_KEY_VAR, "  ") };
    let result = RewriteClient::from_env(MODEL);
    // Safety: env mutation is serialised by `serial`.
    unsafe { env::remove_var(API_KEY_VAR) };
    assert!(matches!(result, Err(RewriteError::MissingCredential)));
}

#[rstest]
#[serial]
fn credential_from_environment_builds_a_client() {
    // Safety: env mutation is serialised by `serial`.
    unsafe { env::set_var(API_KEY_VAR, "from-env") };
    let result = RewriteClient::from_env(MODEL);
    // Safety: env mutation is serialised by `serial`.
    unsafe { env::remove_var(API_KEY_VAR) };
    let client = result.unwrap_or_else(|e| panic!("unexpected error: {e}"));
    assert_eq!(client.level(), TargetLevel::Intermediate);
}
