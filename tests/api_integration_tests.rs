//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mini_kv::{create_router, AppState, KvStore};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(KvStore::new()))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Starts the server on an ephemeral port and returns its address.
async fn spawn_server(store: Arc<KvStore>) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::with_shared(store));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_health_ignores_store_state() {
    let app = create_test_app();

    get(&app, "/set/a/1").await;
    get(&app, "/set/b/2").await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_plain_text_content_type() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
}

// == Full Lifecycle ==

#[tokio::test]
async fn test_set_get_delete_lifecycle() {
    let app = create_test_app();

    assert_eq!(get(&app, "/set/foo/bar").await, (StatusCode::OK, "ok".to_string()));
    assert_eq!(get(&app, "/get/foo").await, (StatusCode::OK, "bar".to_string()));
    assert_eq!(get(&app, "/delete/foo").await, (StatusCode::OK, "ok".to_string()));
    assert_eq!(
        get(&app, "/get/foo").await,
        (StatusCode::BAD_REQUEST, "value not found".to_string())
    );
}

// == SET Endpoint Tests ==

#[tokio::test]
async fn test_set_does_not_overwrite() {
    let app = create_test_app();

    assert_eq!(get(&app, "/set/foo/first").await.0, StatusCode::OK);
    assert_eq!(get(&app, "/set/foo/second").await, (StatusCode::OK, "ok".to_string()));

    assert_eq!(get(&app, "/get/foo").await, (StatusCode::OK, "first".to_string()));
}

#[tokio::test]
async fn test_set_missing_value_leaves_store_untouched() {
    let store = Arc::new(KvStore::new());
    let app = create_router(AppState::with_shared(Arc::clone(&store)));

    let (status, body) = get(&app, "/set/lonely").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "key/value is required");

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_set_empty_key_segment() {
    let store = Arc::new(KvStore::new());
    let app = create_router(AppState::with_shared(Arc::clone(&store)));

    let (status, body) = get(&app, "/set//v").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "key/value is required");

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_set_invalid_utf8_value_leaves_store_untouched() {
    let store = Arc::new(KvStore::new());
    let app = create_router(AppState::with_shared(Arc::clone(&store)));

    let (status, body) = get(&app, "/set/k/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_ne!(body, "key/value is required");

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_set_percent_encoded_segments() {
    let app = create_test_app();

    assert_eq!(get(&app, "/set/hello%20world/a%2Fb").await.0, StatusCode::OK);
    assert_eq!(
        get(&app, "/get/hello%20world").await,
        (StatusCode::OK, "a/b".to_string())
    );
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let (status, body) = get(&app, "/get/nonexistent_key").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "value not found");
}

#[tokio::test]
async fn test_get_missing_key() {
    let app = create_test_app();

    let (status, body) = get(&app, "/get/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "key is required");
}

#[tokio::test]
async fn test_get_invalid_utf8_key() {
    let app = create_test_app();

    let (status, body) = get(&app, "/get/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_ne!(body, "key is required");
    assert_ne!(body, "value not found");
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = create_test_app();

    assert_eq!(get(&app, "/delete/ghost").await, (StatusCode::OK, "ok".to_string()));
    assert_eq!(get(&app, "/delete/ghost").await, (StatusCode::OK, "ok".to_string()));
}

#[tokio::test]
async fn test_delete_then_set_stores_new_value() {
    let app = create_test_app();

    get(&app, "/set/k/old").await;
    get(&app, "/delete/k").await;
    get(&app, "/set/k/new").await;

    assert_eq!(get(&app, "/get/k").await, (StatusCode::OK, "new".to_string()));
}

#[tokio::test]
async fn test_delete_missing_key() {
    let app = create_test_app();

    let (status, body) = get(&app, "/delete/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "key is required");
}

// == Routing ==

#[tokio::test]
async fn test_unknown_route() {
    let app = create_test_app();

    let (status, _) = get(&app, "/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == Live Server ==

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_on_live_server() {
    let store = Arc::new(KvStore::new());
    let addr = spawn_server(Arc::clone(&store)).await;
    let client = reqwest::Client::new();

    let tasks: Vec<_> = (0..64)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let url = format!("http://{addr}/set/key{i}/value{i}");
                let response = client.get(url).send().await.unwrap();
                assert_eq!(response.status(), reqwest::StatusCode::OK);
                assert_eq!(response.text().await.unwrap(), "ok");
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(store.len(), 64);

    for i in 0..64 {
        let response = client
            .get(format!("http://{addr}/get/key{i}"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), format!("value{i}"));
    }
}
