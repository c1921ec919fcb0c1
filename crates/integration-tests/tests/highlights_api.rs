//! Integration tests for the highlight generation API.
//!
//! Validation runs before any upstream call, so these tests exercise the
//! endpoint's contract without a model behind it.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use linden_integration_tests::test_router;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json parse")
}

#[tokio::test]
async fn missing_description_is_rejected() {
    let app = test_router();
    let response = app
        .oneshot(post_json(
            "/api/generate-highlights",
            serde_json::json!({ "productName": "Ceramic Vase" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "productName and productDescription are required"
    );
}

#[tokio::test]
async fn missing_name_is_rejected() {
    let app = test_router();
    let response = app
        .oneshot(post_json(
            "/api/generate-highlights",
            serde_json::json!({ "productDescription": "A hand-thrown vase." }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn blank_fields_are_rejected() {
    let app = test_router();
    let response = app
        .oneshot(post_json(
            "/api/generate-highlights",
            serde_json::json!({
                "productName": "   ",
                "productDescription": "",
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unreachable_model_yields_500_with_details() {
    let app = test_router();
    let response = app
        .oneshot(post_json(
            "/api/generate-highlights",
            serde_json::json!({
                "productId": "101",
                "productName": "Ceramic Vase",
                "productDescription": "A hand-thrown vase.",
                "productTags": ["ceramic", "handmade"],
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to generate highlights");
    assert!(json["details"].is_string());
}

#[tokio::test]
async fn health_check_responds_ok() {
    let app = test_router();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}
