//! Requisições rejeitadas antes de qualquer acesso ao banco, além das rotas
//! que não dependem dele (health, OpenAPI e o frontend estático).

mod common;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, build_test_app, build_test_app_with_static, get, lazy_pool, patch_json,
    post_json, RecordingNotifier,
};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = build_test_app(lazy_pool(), RecordingNotifier::default());
    let response = get(app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"OK");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = build_test_app(lazy_pool(), RecordingNotifier::default());
    let response = get(app, "/api-docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/api/claims"].is_object());
}

#[tokio::test]
async fn empty_claim_lists_all_missing_fields() {
    let notifier = RecordingNotifier::default();
    let app = build_test_app(lazy_pool(), notifier.clone());

    let response = post_json(app, "/api/claims", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required fields");
    assert_eq!(
        json["missingFields"],
        json!([
            "orderNumber",
            "email",
            "name",
            "address",
            "phoneNumber",
            "brand",
            "problemDescription",
            "notificationAcknowledged"
        ])
    );
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn claim_missing_some_fields_names_exactly_those() {
    let app = build_test_app(lazy_pool(), RecordingNotifier::default());
    let mut body = common::claim_body("ORD-1", Uuid::new_v4());
    body.as_object_mut().unwrap().remove("address");
    body["email"] = json!("");

    let response = post_json(app, "/api/claims", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["missingFields"], json!(["email", "address"]));
}

#[tokio::test]
async fn unacknowledged_claim_is_rejected() {
    let app = build_test_app(lazy_pool(), RecordingNotifier::default());
    let mut body = common::claim_body("ORD-2", Uuid::new_v4());
    body["notificationAcknowledged"] = json!(false);

    let response = post_json(app, "/api/claims", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Notification must be acknowledged");
}

#[tokio::test]
async fn claim_with_malformed_brand_is_rejected() {
    let app = build_test_app(lazy_pool(), RecordingNotifier::default());
    let mut body = common::claim_body("ORD-3", Uuid::new_v4());
    body["brand"] = json!("acme");

    let response = post_json(app, "/api/claims", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["details"]["brand"].is_array());
}

#[tokio::test]
async fn unknown_status_is_rejected_at_the_boundary() {
    let notifier = RecordingNotifier::default();
    let app = build_test_app(lazy_pool(), notifier.clone());
    let uri = format!("/api/claims/{}", Uuid::new_v4());

    let response = patch_json(app, &uri, json!({ "status": "Closed" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid status");
    assert_eq!(
        json["allowed"],
        json!(["Pending", "In Progress", "Resolved", "Rejected"])
    );
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn dashboard_rejects_unknown_filter_and_sort() {
    let app = build_test_app(lazy_pool(), RecordingNotifier::default());
    let response = get(app.clone(), "/api/admin/claims?status=Open").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid status filter");
    assert_eq!(json["status"], "Open");
    assert_eq!(
        json["allowed"],
        json!(["All", "Pending", "In Progress", "Resolved", "Rejected"])
    );

    let response = get(app, "/api/admin/claims?sort=sideways").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unparseable_claim_id_is_not_found() {
    let app = build_test_app(lazy_pool(), RecordingNotifier::default());
    let response = get(app.clone(), "/api/claims/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Claim not found");

    let response = patch_json(app, "/api/claims/123", json!({ "status": "Resolved" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_patch_without_status_is_a_json_bad_request() {
    let notifier = RecordingNotifier::default();
    let app = build_test_app(lazy_pool(), notifier.clone());
    let uri = format!("/api/claims/{}", Uuid::new_v4());

    let response = patch_json(app, &uri, json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid request body");
    assert!(json["details"].as_str().is_some_and(|d| d.contains("status")));
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn claim_with_wrongly_typed_field_is_a_json_bad_request() {
    let app = build_test_app(lazy_pool(), RecordingNotifier::default());
    let mut body = common::claim_body("ORD-TIPO", Uuid::new_v4());
    body["notificationAcknowledged"] = json!("yes");

    let response = post_json(app.clone(), "/api/claims", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid request body");

    let response = post_json(app, "/api/login", json!({ "email": 42 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid request body");
}

#[tokio::test]
async fn admin_bootstrap_validates_payload() {
    let app = build_test_app(lazy_pool(), RecordingNotifier::default());
    let response = post_json(
        app,
        "/api/admin/create",
        json!({ "email": "nao-e-email", "password": "123" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["details"]["email"].is_array());
    assert!(json["details"]["password"].is_array());
}

#[tokio::test]
async fn login_requires_both_fields() {
    let app = build_test_app(lazy_pool(), RecordingNotifier::default());
    let response = post_json(app, "/api/login", json!({ "email": "", "password": "" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_paths_serve_the_spa_shell() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<div id=\"root\"></div>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

    let app = build_test_app_with_static(lazy_pool(), dir.path());
    let response = get(app.clone(), "/admin/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"<div id=\"root\"></div>");

    let response = get(app, "/app.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"console.log(1)");
}
