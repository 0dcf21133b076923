//! `ApiClient::create_user` against an in-process server.

mod common;

use std::time::Duration;

use common::{closed_url, MockServer, CREATED_USER};
use gobarber_lib::error::ApiError;
use gobarber_lib::model::NewUser;
use gobarber_lib::ApiClient;

fn client(url: &str) -> ApiClient {
    ApiClient::builder().url(url).build().expect("client builds")
}

fn ana() -> NewUser {
    NewUser::new("Ana", "a@b.com", "123456")
}

#[tokio::test]
async fn test_posts_json_body_to_users() {
    let server = MockServer::start(200, CREATED_USER).await;

    client(server.url()).create_user(&ana()).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/users");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        requests[0].json(),
        serde_json::json!({ "name": "Ana", "email": "a@b.com", "password": "123456" })
    );
}

#[tokio::test]
async fn test_decodes_created_user() {
    let server = MockServer::start(201, CREATED_USER).await;

    let user = client(server.url()).create_user(&ana()).await.unwrap().unwrap();

    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "a@b.com");
}

#[tokio::test]
async fn test_empty_success_body() {
    let server = MockServer::start(200, "").await;

    let user = client(server.url()).create_user(&ana()).await.unwrap();

    assert!(user.is_none());
}

#[tokio::test]
async fn test_http_error_uses_api_message() {
    let server = MockServer::start(
        400,
        r#"{"status":"error","message":"Email address already used."}"#,
    )
    .await;

    let err = client(server.url()).create_user(&ana()).await.unwrap_err();

    match err {
        ApiError::Http { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Email address already used.");
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreadable_success_body_still_succeeds() {
    for reply in ["<html>oops</html>", "{}", r#"{"id":1,"name":"Ana","email":"a@b.com"}"#] {
        let server = MockServer::start(201, reply).await;

        let user = client(server.url()).create_user(&ana()).await.unwrap();

        assert!(user.is_none(), "reply {:?}", reply);
        assert_eq!(server.requests().len(), 1);
    }
}

#[tokio::test]
async fn test_unreachable_server() {
    let url = closed_url().await;

    let err = client(&url).create_user(&ana()).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start_with_delay(200, CREATED_USER, Duration::from_secs(2)).await;
    let client = ApiClient::builder()
        .url(server.url())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.create_user(&ana()).await.unwrap_err();

    assert!(
        matches!(err, ApiError::Timeout(t) if t == Duration::from_millis(200)),
        "got {:?}",
        err
    );
}
