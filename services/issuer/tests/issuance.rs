use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use std::sync::Arc;
use tower::ServiceExt;

use counter::MemoryStore;
use issuer::router::create_router;
use issuer::state::AppState;
use types::counter::CounterDocument;
use types::number::NumberFormat;

fn create_test_app(store: Arc<MemoryStore>) -> Router {
    create_router(AppState::with_store(store, NumberFormat::new("017", 4)))
}

fn issue_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/laudos")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_issue_against_empty_backend_yields_number_one() {
    let store = Arc::new(MemoryStore::new());
    let app = create_test_app(store.clone());

    let response = app
        .oneshot(issue_request(
            r#"{"client":"Hortifruti Central","responsible":"Eng. Salomão"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = json_body(response).await;
    assert_eq!(json["number"], 1);
    assert_eq!(json["display_number"], "0170001");
    assert_eq!(json["persisted"], true);
    assert!(json.get("warning").is_none());

    // The incremented counter landed in the backend.
    assert_eq!(store.document().unwrap().last_number, 1);
}

#[tokio::test]
async fn test_issue_continues_an_existing_sequence() {
    let store = Arc::new(MemoryStore::with_document(CounterDocument::new(41)));
    let app = create_test_app(store.clone());

    let response = app.oneshot(issue_request("{}")).await.unwrap();
    let json = json_body(response).await;

    assert_eq!(json["number"], 42);
    assert_eq!(store.document().unwrap().last_number, 42);
}

#[tokio::test]
async fn test_malformed_payload_gets_json_error_body() {
    let store = Arc::new(MemoryStore::new());
    let app = create_test_app(store.clone());

    let response = app.oneshot(issue_request("{not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"], "BAD_REQUEST");
    assert!(json["message"].as_str().is_some());

    // The rejected request consumed no number.
    assert!(store.document().is_none());
}

#[tokio::test]
async fn test_failed_persist_is_non_fatal() {
    let store = Arc::new(MemoryStore::new());
    store.fail_saves(true);
    let app = create_test_app(store.clone());

    let response = app.oneshot(issue_request("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = json_body(response).await;
    assert_eq!(json["number"], 1);
    assert_eq!(json["persisted"], false);
    assert!(json["warning"].as_str().unwrap().contains("may repeat"));

    // Nothing landed in the backend.
    assert!(store.document().is_none());
}

#[tokio::test]
async fn test_failed_persist_duplicates_the_next_number() {
    let store = Arc::new(MemoryStore::new());
    store.fail_saves(true);
    let app = create_test_app(store);

    let first = json_body(app.clone().oneshot(issue_request("{}")).await.unwrap()).await;
    let second = json_body(app.oneshot(issue_request("{}")).await.unwrap()).await;

    // The counter never advanced, so both requests got the same number.
    assert_eq!(first["number"], 1);
    assert_eq!(second["number"], 1);
}

#[tokio::test]
async fn test_listing_returns_issued_certificates_in_order() {
    let store = Arc::new(MemoryStore::new());
    let app = create_test_app(store);

    for client in ["A", "B", "C"] {
        let body = format!(r#"{{"client":"{client}"}}"#);
        app.clone().oneshot(issue_request(&body)).await.unwrap();
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/laudos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let listed = json.as_array().unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0]["number"], 1);
    assert_eq!(listed[0]["client"], "A");
    assert_eq!(listed[2]["number"], 3);
    assert_eq!(listed[2]["client"], "C");
}

#[tokio::test]
async fn test_fetch_single_certificate() {
    let store = Arc::new(MemoryStore::new());
    let app = create_test_app(store);

    app.clone()
        .oneshot(issue_request(r#"{"client":"Hortifruti Central"}"#))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/laudos/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["number"], 1);
    assert_eq!(json["client"], "Hortifruti Central");
}

#[tokio::test]
async fn test_fetch_unknown_certificate_is_404() {
    let store = Arc::new(MemoryStore::new());
    let app = create_test_app(store);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/laudos/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_status_reports_backend_counter() {
    let store = Arc::new(MemoryStore::with_document(CounterDocument::new(7)));
    let app = create_test_app(store);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["last_number"], 7);
}

#[tokio::test]
async fn test_status_reads_zero_from_unreachable_backend() {
    let store = Arc::new(MemoryStore::new());
    store.fail_loads(true);
    let app = create_test_app(store);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["last_number"], 0);
}
