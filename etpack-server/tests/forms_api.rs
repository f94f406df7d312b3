//! Router-level tests for the form-list endpoint

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use etpack_server::{Config, ServerState, build_router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> axum::Router {
    build_router(ServerState::new(Config::with_port(0)))
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/forms")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn test_get_unwritten_department_is_empty() {
    let (status, body) = send(&app(), get("/api/forms?department=printing")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["department"], "printing");
    assert_eq!(body["data"]["forms"], json!([]));
}

#[tokio::test]
async fn test_get_requires_department() {
    let app = app();

    for uri in ["/api/forms", "/api/forms?department=", "/api/forms?department=%20"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], 5001);
        assert_eq!(body["message"], "Department is required");
    }
}

#[tokio::test]
async fn test_post_then_get_returns_last_write() {
    let app = app();
    let first = json!({"department": "bag-forming", "forms": [{"name": "A", "type": "倉管"}]});
    let second = json!({
        "department": "bag-forming",
        "forms": [{"name": "B", "type": "號機"}, {"name": "A", "type": "倉管"}]
    });

    let (status, body) = send(&app, post(first.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Form order saved successfully");

    let (status, body) = send(&app, post(second.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["forms"], second["forms"]);

    let (_, body) = send(&app, get("/api/forms?department=bag-forming")).await;
    assert_eq!(body["data"]["forms"], second["forms"]);

    let (_, body) = send(&app, get("/api/forms?department=printing")).await;
    assert_eq!(body["data"]["forms"], json!([]));
}

#[tokio::test]
async fn test_post_accepts_empty_list() {
    let app = app();
    let (status, _) = send(&app, post(json!({"department": "slitting", "forms": []}).to_string())).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get("/health")).await;
    assert_eq!(body["departments"], 1);
}

#[tokio::test]
async fn test_post_missing_fields_rejected() {
    let app = app();
    let cases = [
        json!({"department": "printing"}),
        json!({"forms": []}),
        json!({"department": "", "forms": []}),
        json!({"department": "printing", "forms": null}),
    ];

    for case in cases {
        let (status, body) = send(&app, post(case.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
        assert_eq!(body["code"], 5003);
        assert_eq!(body["message"], "Department and orders are required");
    }
}

#[tokio::test]
async fn test_post_malformed_json_rejected() {
    let (status, body) = send(&app(), post("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);
}

#[tokio::test]
async fn test_health_and_request_id() {
    let response = app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["departments"], 0);
}

#[tokio::test]
async fn test_unknown_route_is_404_envelope() {
    let (status, body) = send(&app(), get("/api/orders")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
}
