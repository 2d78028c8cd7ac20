mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{offline_app, send};
use tower::ServiceExt;

#[tokio::test]
async fn health_is_open() {
    let app = offline_app();
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_every_resource() {
    let app = offline_app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().expect("paths object");
    for path in [
        "/surveys/",
        "/surveys/{id}/",
        "/questions/",
        "/questions/{id}/",
        "/choices/",
        "/choices/{id}/",
        "/answers/",
        "/answers/{id}/",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}

#[tokio::test]
async fn request_id_is_echoed_or_generated() {
    let app = offline_app();

    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.headers()["x-request-id"], "abc-123");

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let generated = resp.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = offline_app();
    let (status, _) = send(&app, Method::GET, "/polls/", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
