//! Tests for the HTTP client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{HttpClient, RequestBody};
use crate::domain::entities::config::Config;
use crate::shared::constants::COOKIES_KEY;
use crate::shared::error::XebulaError;
use crate::shared::types::{Header, HttpMethod, ResponseCookie};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Account {
    id: String,
    balance: u64,
}

fn account() -> Account {
    Account {
        id: "acc-1".to_string(),
        balance: 500,
    }
}

fn client() -> HttpClient {
    HttpClient::new().expect("build http client")
}

#[tokio::test]
async fn test_get_decodes_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts/acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "acc-1", "balance": 500})))
        .mount(&server)
        .await;

    let url = format!("{}/v1/accounts/acc-1", server.uri());
    let account_out: Account = client().get(&url, &[]).await.unwrap();

    assert_eq!(account_out, account());
}

#[tokio::test]
async fn test_execute_dispatches_each_verb() {
    let server = MockServer::start().await;

    for verb in ["GET", "POST", "PUT", "PATCH", "DELETE"] {
        Mock::given(method(verb))
            .and(path("/v1/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"verb": verb})))
            .mount(&server)
            .await;
    }

    let url = format!("{}/v1/items", server.uri());
    for verb in HttpMethod::all() {
        let out: serde_json::Value = client().execute(&url, verb, None, &[]).await.unwrap();
        assert_eq!(out["verb"], verb.as_str());
    }
}

#[tokio::test]
async fn test_post_json_body_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"id": "acc-1", "balance": 500})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "acc-1", "balance": 500})))
        .mount(&server)
        .await;

    let url = format!("{}/v1/accounts", server.uri());
    let body = RequestBody::json(&account()).unwrap();
    let created: Account = client().post(&url, Some(body), &[]).await.unwrap();

    assert_eq!(created, account());
}

#[tokio::test]
async fn test_raw_body_sent_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/notes"))
        .and(header("content-type", "text/plain"))
        .and(body_string("hello xebula"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let url = format!("{}/v1/notes", server.uri());
    let out: serde_json::Value = client()
        .put(&url, Some(RequestBody::raw("hello xebula")), &[])
        .await
        .unwrap();

    assert_eq!(out["ok"], true);
}

#[tokio::test]
async fn test_get_drops_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let url = format!("{}/v1/items", server.uri());
    let body = RequestBody::json(&account()).unwrap();
    let _: serde_json::Value = client().execute(&url, HttpMethod::Get, Some(body), &[]).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_headers_and_basic_auth_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .and(header("X-Request-Id", "req-42"))
        .and(basic_auth("user", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": "user"})))
        .mount(&server)
        .await;

    let mut client = client();
    client.set_basic_auth("user", "secret");

    let url = format!("{}/v1/me", server.uri());
    let out: serde_json::Value = client
        .get(&url, &[Header::new("X-Request-Id", "req-42")])
        .await
        .unwrap();

    assert_eq!(out["user"], "user");
}

#[tokio::test]
async fn test_no_auth_header_without_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let url = format!("{}/v1/public", server.uri());
    let _: serde_json::Value = client().get(&url, &[]).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_non_200_becomes_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/accounts/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("account not found"))
        .mount(&server)
        .await;

    let url = format!("{}/v1/accounts/missing", server.uri());
    let result: Result<serde_json::Value, XebulaError> = client().delete(&url, None, &[]).await;

    let err = result.unwrap_err();
    let http = err.as_http().expect("expected an http error");
    assert_eq!(http.status, 404);
    assert_eq!(http.description, "account not found");
    assert_eq!(http.method, "DELETE");
    assert_eq!(http.url, url);
    assert_eq!(
        err.to_string(),
        format!("DELETE {} returned [404]: account not found", url)
    );
}

#[tokio::test]
async fn test_other_2xx_is_still_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "acc-1"})))
        .mount(&server)
        .await;

    let url = format!("{}/v1/accounts", server.uri());
    let result: Result<serde_json::Value, XebulaError> = client().post(&url, None, &[]).await;

    assert_eq!(result.unwrap_err().as_http().map(|e| e.status), Some(201));
}

#[tokio::test]
async fn test_cookies_are_injected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/session"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc123; Path=/; HttpOnly")
                .set_body_json(json!({"active": true})),
        )
        .mount(&server)
        .await;

    let url = format!("{}/v1/session", server.uri());
    let out: serde_json::Value = client().get(&url, &[]).await.unwrap();

    assert_eq!(out["active"], true);
    let cookies: Vec<ResponseCookie> = serde_json::from_value(out[COOKIES_KEY].clone()).unwrap();
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].name, "session");
    assert_eq!(cookies[0].value, "abc123");
    assert_eq!(cookies[0].path, "/");
    assert!(cookies[0].http_only);
    assert_eq!(cookies[0].raw, "session=abc123; Path=/; HttpOnly");
}

#[tokio::test]
async fn test_cookie_raw_fields_reach_the_payload() {
    let server = MockServer::start().await;
    let line = "sid=1; Path=/; SameSite=None; Secure; Expires=Wed, 21 Oct 2037 07:28:00 GMT";

    Mock::given(method("POST"))
        .and(path("/v1/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", line)
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let url = format!("{}/v1/login", server.uri());
    let out: serde_json::Value = client().post(&url, None, &[]).await.unwrap();

    let cookie = &out[COOKIES_KEY][0];
    assert_eq!(cookie["Raw"], line);
    assert_eq!(cookie["RawExpires"], "Wed, 21 Oct 2037 07:28:00 GMT");
    assert_eq!(cookie["SameSite"], 4);
    assert_eq!(cookie["Secure"], true);
}

#[tokio::test]
async fn test_execute_raw_returns_body_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/export"))
        .respond_with(ResponseTemplate::new(200).set_body_string("id,balance\nacc-1,500\n"))
        .mount(&server)
        .await;

    let url = format!("{}/v1/export", server.uri());
    let bytes = client().execute_raw(&url, HttpMethod::Get, None, &[]).await.unwrap();

    assert_eq!(bytes, b"id,balance\nacc-1,500\n".to_vec());
}

#[tokio::test]
async fn test_execute_empty_ignores_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/accounts/acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let url = format!("{}/v1/accounts/acc-1", server.uri());
    let result = client().execute_empty(&url, HttpMethod::Delete, None, &[]).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_undecodable_body_is_serialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts/acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 12})))
        .mount(&server)
        .await;

    let url = format!("{}/v1/accounts/acc-1", server.uri());
    let result: Result<Account, XebulaError> = client().get(&url, &[]).await;

    assert!(matches!(result, Err(XebulaError::Serialization(_))));
}

#[tokio::test]
async fn test_unreachable_host_reports_teapot() {
    let url = "http://127.0.0.1:1/v1/accounts";
    let result: Result<serde_json::Value, XebulaError> = client().get(url, &[]).await;

    let err = result.unwrap_err();
    let http = err.as_http().expect("expected an http error");
    assert_eq!(http.status, 418);
    assert_eq!(http.method, "GET");
    assert_eq!(http.url, url);
}

#[tokio::test]
async fn test_invalid_url_reports_teapot() {
    let result: Result<serde_json::Value, XebulaError> = client().get("not a url", &[]).await;

    let err = result.unwrap_err();
    assert_eq!(err.as_http().map(|e| e.status), Some(418));
}

#[tokio::test]
async fn test_invalid_header_reports_teapot() {
    let result: Result<serde_json::Value, XebulaError> = client()
        .get("http://127.0.0.1:1/v1/x", &[Header::new("bad header", "v")])
        .await;

    let http = result.unwrap_err().as_http().cloned().expect("expected an http error");
    assert_eq!(http.status, 418);
    assert!(http.description.contains("bad header"));
}

#[tokio::test]
async fn test_repeated_headers_and_content_length_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let url = format!("{}/v1/accounts", server.uri());
    let body = RequestBody::json(&account()).unwrap();
    let expected_len = body.len().to_string();
    let headers = [Header::new("X-Tag", "a"), Header::new("X-Tag", "b")];
    let _: serde_json::Value = client().post(&url, Some(body), &headers).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let tags: Vec<&str> = requests[0]
        .headers
        .get_all("x-tag")
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["a", "b"]);
    assert_eq!(
        requests[0].headers.get("content-length").map(|v| v.to_str().unwrap()),
        Some(expected_len.as_str())
    );
}

#[tokio::test]
async fn test_truncated_body_is_not_an_http_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let _ = socket
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\n\r\n{\"id\"")
            .await;
        // Dropping the socket cuts the body short
    });

    let url = format!("http://{}/v1/accounts", addr);
    let result: Result<serde_json::Value, XebulaError> = client().get(&url, &[]).await;

    let err = result.unwrap_err();
    assert!(err.as_http().is_none());
    assert!(matches!(err, XebulaError::Generic(_)));
}

#[tokio::test]
async fn test_slow_response_times_out_as_teapot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = Config::new(server.uri()).with_timeout_ms(200);
    let client = HttpClient::from_config(&config).unwrap();
    let url = format!("{}/v1/slow", server.uri());
    let result: Result<serde_json::Value, XebulaError> = client.get(&url, &[]).await;

    let err = result.unwrap_err();
    assert_eq!(err.as_http().map(|e| e.status), Some(418));
}
