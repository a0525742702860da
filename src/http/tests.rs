//! Tests for the HTTP module

use super::*;
use crate::config::HttpSettings;
use crate::endpoint::Credentials;
use crate::error::Error;
use base64::Engine;
use bytes::Bytes;
use futures::stream;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn basic(user: &str, pass: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{pass}"));
    format!("Basic {encoded}")
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert!(config.verify_tls);
    assert!(config.user_agent.starts_with("icecat-reader/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .verify_tls(false)
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert!(!config.verify_tls);
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_http_client_config_from_settings() {
    let settings = HttpSettings {
        timeout_secs: 7,
        verify_tls: false,
        ..Default::default()
    };
    let config = HttpClientConfig::from(&settings);
    assert_eq!(config.timeout, Duration::from_secs(7));
    assert!(!config.verify_tls);
}

#[tokio::test]
async fn test_fetch_streams_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/export/files.index.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<files/>"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let url = format!("{}/export/files.index.xml", mock_server.uri());
    let stream = client.fetch(&url, None).await.unwrap();
    let body = collect_body(stream, 1024).await.unwrap();

    assert_eq!(body, b"<files/>");
}

#[tokio::test]
async fn test_fetch_sends_basic_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secured"))
        .and(header("Authorization", basic("shop", "secret").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let credentials = Credentials::new("shop", "secret");
    let url = format!("{}/secured", mock_server.uri());

    let stream = client.fetch(&url, Some(&credentials)).await.unwrap();
    assert_eq!(collect_body(stream, 16).await.unwrap(), b"ok");
}

#[tokio::test]
async fn test_explicit_credentials_replace_embedded_ones() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secured"))
        .and(header("Authorization", basic("real", "pw").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let address = mock_server.address();
    let url = format!("http://stale:old@{address}/secured");

    let result = client.fetch(&url, Some(&Credentials::new("real", "pw"))).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_encoded_embedded_credentials_are_stripped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secured"))
        .and(header("Authorization", basic("shop", "pa#ss/word").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let address = mock_server.address();
    let url = format!("http://shop:pa%23ss%2Fword@{address}/secured");

    let credentials = Credentials::new("shop", "pa#ss/word");
    let stream = client.fetch(&url, Some(&credentials)).await.unwrap();
    assert_eq!(collect_body(stream, 16).await.unwrap(), b"ok");
}

#[tokio::test]
async fn test_fetch_maps_status_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let result = client.fetch(&mock_server.uri(), None).await;

    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unauthorized");
        }
        Err(e) => panic!("Expected HttpStatus, got {e:?}"),
        Ok(_) => panic!("Expected HttpStatus, got a body"),
    }
}

#[tokio::test]
async fn test_fetch_does_not_retry_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client.fetch(&mock_server.uri(), None).await.err().unwrap();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_fetch_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(100))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.fetch(&mock_server.uri(), None).await.err().unwrap();
    assert!(matches!(err, Error::Timeout { timeout_ms: 100 }));
}

#[tokio::test]
async fn test_fetch_invalid_url() {
    let client = HttpClient::new().unwrap();
    let err = client.fetch("not a url", None).await.err().unwrap();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_collect_body_enforces_limit() {
    let chunks: Vec<std::io::Result<Bytes>> = vec![
        Ok(Bytes::from_static(b"12345")),
        Ok(Bytes::from_static(b"67890")),
    ];
    let stream: ByteStream = Box::pin(stream::iter(chunks));

    let err = collect_body(stream, 8).await.unwrap_err();
    assert!(matches!(err, Error::ResponseTooLarge { limit: 8 }));
}
