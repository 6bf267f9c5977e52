//! Handler tests for the clients domain
//!
//! These tests exercise the HTTP layer against a mocked repository:
//! request deserialization, response serialization, status codes and the
//! shape of error responses. No database is required.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_clients::{
    Client, ClientRepository, ClientResult, ClientService, RegisterClient, handlers,
};
use http_body_util::BodyExt;
use mockall::mock;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

mock! {
    ClientRepo {}

    #[async_trait]
    impl ClientRepository for ClientRepo {
        async fn create(&self, input: RegisterClient) -> ClientResult<Client>;
        async fn get_by_id(&self, id: &str) -> ClientResult<Option<Client>>;
        async fn delete(&self, id: &str) -> ClientResult<bool>;
        async fn exists(&self, id: &str) -> ClientResult<bool>;
    }
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_register_client_returns_201_with_id() {
    let mut repo = MockClientRepo::new();
    repo.expect_exists().returning(|_| Ok(false));
    repo.expect_create()
        .returning(|input| Ok(Client::new(input)));

    let app = handlers::router(ClientService::new(repo));

    let request = put_json(
        "/",
        json!({"id": "c1", "name": "Alice", "email": "alice@example.com"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], "c1");
}

#[tokio::test]
async fn test_register_client_missing_email_returns_400() {
    let mut repo = MockClientRepo::new();
    repo.expect_exists().times(0);
    repo.expect_create().times(0);

    let app = handlers::router(ClientService::new(repo));

    let request = put_json("/", json!({"id": "c1", "name": "Alice"}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_client_duplicate_returns_400_conflict() {
    let mut repo = MockClientRepo::new();
    repo.expect_exists().returning(|_| Ok(true));
    repo.expect_create().times(0);

    let app = handlers::router(ClientService::new(repo));

    let request = put_json(
        "/",
        json!({"id": "c1", "name": "Alice", "email": "alice@example.com"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_get_client_returns_200_with_plain_id_key() {
    let mut repo = MockClientRepo::new();
    repo.expect_get_by_id().returning(|_| {
        Ok(Some(Client {
            id: "c1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }))
    });

    let app = handlers::router(ClientService::new(repo));

    let request = Request::builder()
        .uri("/c1")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], "c1");
    assert!(body.get("_id").is_none());
}

#[tokio::test]
async fn test_get_client_unknown_returns_404() {
    let mut repo = MockClientRepo::new();
    repo.expect_get_by_id().returning(|_| Ok(None));

    let app = handlers::router(ClientService::new(repo));

    let request = Request::builder()
        .uri("/missing")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_client_returns_204() {
    let mut repo = MockClientRepo::new();
    repo.expect_delete().returning(|_| Ok(true));

    let app = handlers::router(ClientService::new(repo));

    let request = Request::builder()
        .method("DELETE")
        .uri("/c1")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
