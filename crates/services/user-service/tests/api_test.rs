//! HTTP tests for the user routes.

mod support;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use domain::UserEvent;

use support::test_app;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

fn john() -> Value {
    json!({ "name": "John", "email": "john@example.com", "age": 22 })
}

#[tokio::test]
async fn test_create_user_returns_created() {
    let (app, notifier) = test_app().await;

    let (status, body) = send(&app, Method::POST, "/user", Some(john())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "John");
    assert_eq!(body["email"], "john@example.com");
    assert_eq!(body["age"], 22);
    assert!(body["id"].as_i64().unwrap() > 0);

    // "yyyy-MM-dd HH:mm:ss"
    let created_at = body["createdAt"].as_str().unwrap();
    assert_eq!(created_at.len(), 19);
    assert_eq!(&created_at[10..11], " ");

    assert_eq!(notifier.events(), vec![UserEvent::created("john@example.com")]);
}

#[tokio::test]
async fn test_create_user_rejects_invalid_input() {
    let (app, notifier) = test_app().await;

    let invalid = [
        json!({ "name": "  ", "email": "john@example.com", "age": 22 }),
        json!({ "name": "John", "email": "not-an-email", "age": 22 }),
        json!({ "name": "John", "email": "john@example.com", "age": 0 }),
        json!({ "name": "John", "email": "john@example.com" }),
    ];

    for payload in invalid {
        let (status, body) = send(&app, Method::POST, "/user", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    assert!(notifier.events().is_empty());
}

#[tokio::test]
async fn test_create_user_duplicate_email_conflicts() {
    let (app, _notifier) = test_app().await;
    send(&app, Method::POST, "/user", Some(john())).await;

    let jane = json!({ "name": "Jane", "email": "john@example.com", "age": 30 });
    let (status, body) = send(&app, Method::POST, "/user", Some(jane)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_get_user() {
    let (app, _notifier) = test_app().await;
    let (_, created) = send(&app, Method::POST, "/user", Some(john())).await;
    let uri = format!("/user/{}", created["id"]);

    let (status, body) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let (app, _notifier) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/user/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_large_unknown_id_is_not_found() {
    let (app, _notifier) = test_app().await;

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send(&app, method, "/user/4294967296", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    let (status, _) = send(&app, Method::PATCH, "/user/4294967296", Some(json!({ "age": 23 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let (app, _notifier) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/user/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_patch_user_updates_provided_fields() {
    let (app, _notifier) = test_app().await;
    let (_, created) = send(&app, Method::POST, "/user", Some(john())).await;
    let uri = format!("/user/{}", created["id"]);

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "age": 23 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["age"], 23);
    assert_eq!(body["name"], "John");
    assert_eq!(body["email"], "john@example.com");
    assert_eq!(body["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_patch_user_errors() {
    let (app, _notifier) = test_app().await;
    let (_, john) = send(&app, Method::POST, "/user", Some(john())).await;
    let jane = json!({ "name": "Jane", "email": "jane@example.com", "age": 30 });
    let (_, jane) = send(&app, Method::POST, "/user", Some(jane)).await;

    let uri = format!("/user/{}", jane["id"]);
    let taken = john["email"].clone();
    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "email": taken }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "age": -5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PATCH, "/user/999", Some(json!({ "age": 23 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let (app, notifier) = test_app().await;
    let (_, created) = send(&app, Method::POST, "/user", Some(john())).await;
    let uri = format!("/user/{}", created["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(
        notifier.events(),
        vec![
            UserEvent::created("john@example.com"),
            UserEvent::deleted("john@example.com"),
        ]
    );
}

#[tokio::test]
async fn test_health_reports_database() {
    let (app, _notifier) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _notifier) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/user/{id}"].is_object());
}
