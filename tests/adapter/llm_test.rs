//! Tests for the Anthropic generator against a stub Messages API

use std::thread::{self, JoinHandle};

use nbkit::Error;
use nbkit::adapters::AnthropicGenerator;
use nbkit::core::ports::CodeGenerator;
use serde_json::Value;

/// What the stub server saw
struct Received {
    body: String,
    api_key: String,
    version: String,
}

/// Serve exactly one request with `status` and `body`
fn stub_server(status: u16, body: &'static str) -> (String, JoinHandle<Received>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();

    let handle = thread::spawn(move || {
        let mut request = server.recv().unwrap();

        let mut received = String::new();
        request.as_reader().read_to_string(&mut received).unwrap();
        let header = |name: &str| {
            request
                .headers()
                .iter()
                .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
                .map(|h| h.value.to_string())
                .unwrap_or_default()
        };
        let api_key = header("x-api-key");
        let version = header("anthropic-version");

        let response = tiny_http::Response::from_string(body)
            .with_status_code(status)
            .with_header("Content-Type: application/json".parse::<tiny_http::Header>().unwrap());
        request.respond(response).unwrap();

        Received {
            body: received,
            api_key,
            version,
        }
    });

    (format!("http://{addr}/v1/messages"), handle)
}

#[test]
fn test_generate_returns_model_text() {
    let (endpoint, server) = stub_server(
        200,
        r#"{"id": "msg_1", "type": "message", "role": "assistant",
            "content": [{"type": "text", "text": "```python\nprint('hi')\n```"}]}"#,
    );
    let generator = AnthropicGenerator::new(endpoint, "test-model", 256, "sk-test").unwrap();

    let text = generator.generate("Write a script that says hi").unwrap();
    assert_eq!(text, "```python\nprint('hi')\n```");

    let received = server.join().unwrap();
    assert_eq!(received.api_key, "sk-test");
    assert_eq!(received.version, "2023-06-01");

    let body: Value = serde_json::from_str(&received.body).unwrap();
    assert_eq!(body["model"], "test-model");
    assert_eq!(body["max_tokens"], 256);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "Write a script that says hi");
}

#[test]
fn test_http_error_is_reported() {
    let (endpoint, server) = stub_server(
        401,
        r#"{"type": "error", "error": {"type": "authentication_error", "message": "invalid x-api-key"}}"#,
    );
    let generator = AnthropicGenerator::new(endpoint, "test-model", 256, "bad-key").unwrap();

    let err = generator.generate("anything").unwrap_err();
    server.join().unwrap();

    match err {
        Error::Llm(message) => {
            assert!(message.contains("401"));
            assert!(message.contains("invalid x-api-key"));
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_content_is_error() {
    let (endpoint, server) = stub_server(200, r#"{"content": []}"#);
    let generator = AnthropicGenerator::new(endpoint, "test-model", 256, "sk-test").unwrap();

    let err = generator.generate("anything").unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, Error::Llm(_)));
}

#[test]
fn test_unreachable_endpoint_is_http_error() {
    let generator =
        AnthropicGenerator::new("http://127.0.0.1:1/v1/messages", "test-model", 256, "sk-test").unwrap();
    assert!(matches!(generator.generate("anything"), Err(Error::Http(_))));
}
