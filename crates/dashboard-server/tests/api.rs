//! HTTP API tests driven through the router without a socket

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use dashboard_server::{router, AppState, Store};
use dashboard_types::{Dashboard, DashboardList};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (Router, AppState) {
    let state = AppState::new(Store::new());
    (router(state.clone()), state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn create(app: &Router, name: &str) -> Dashboard {
    let (status, body) = send(
        app,
        Method::POST,
        "/dashboard/create",
        Some(json!({ "name": name, "project": "proj-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_healthz() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_create_then_get() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/dashboard/create",
        Some(json!({ "name": "Ops", "description": "On-call", "project": "proj-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Dashboard = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.id.len(), 8);
    assert_eq!(created.name, "Ops");
    assert_eq!(created.description, "On-call");
    assert_eq!(created.project, "proj-1");

    let uri = format!("/dashboard/get?id={}", created.id);
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Dashboard = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_requires_project() {
    let (app, state) = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/dashboard/create",
        Some(json!({ "name": "Ops" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Project is required");
    assert!(state.store.is_empty());
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let (app, state) = app();
    create(&app, "A").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/dashboard/create",
        Some(json!({ "name": "", "project": "proj-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(state.store.len(), 1);
}

#[tokio::test]
async fn test_create_rejects_bad_json() {
    let (app, _) = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/dashboard/create")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Invalid request payload");
}

#[tokio::test]
async fn test_get_unknown_id() {
    let (app, _) = app();
    let (status, _) = send(&app, Method::GET, "/dashboard/get?id=missing1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/dashboard/get", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_description_only() {
    let (app, _) = app();
    let created = create(&app, "A").await;

    let uri = format!("/dashboard/update?id={}", created.id);
    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "description": "updated" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Dashboard = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.project, created.project);
    assert_eq!(updated.name, "A");
    assert_eq!(updated.description, "updated");
}

#[tokio::test]
async fn test_update_unknown_id() {
    let (app, state) = app();
    let created = create(&app, "A").await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/dashboard/update?id=missing1",
        Some(json!({ "name": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(state.store.get(&created.id).unwrap(), created);
}

#[tokio::test]
async fn test_delete() {
    let (app, state) = app();
    let created = create(&app, "A").await;

    let uri = format!("/dashboard/delete?id={}", created.id);
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert!(state.store.is_empty());

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/dashboard/get?id={}", created.id);
    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_pagination() {
    let (app, _) = app();
    for name in ["A", "B", "C"] {
        create(&app, name).await;
    }

    let (status, body) = send(&app, Method::GET, "/dashboard/list", None).await;
    assert_eq!(status, StatusCode::OK);
    let raw: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(raw["next"], json!(2));
    let page: DashboardList = serde_json::from_value(raw).unwrap();
    let names: Vec<_> = page.dashboards.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let (status, body) = send(&app, Method::GET, "/dashboard/list?next=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let raw: Value = serde_json::from_slice(&body).unwrap();
    assert!(raw.get("next").is_none());
    let page: DashboardList = serde_json::from_value(raw).unwrap();
    let names: Vec<_> = page.dashboards.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["C"]);
}

#[tokio::test]
async fn test_list_empty_next_is_first_page() {
    let (app, _) = app();
    create(&app, "A").await;

    let (status, body) = send(&app, Method::GET, "/dashboard/list?next=", None).await;
    assert_eq!(status, StatusCode::OK);
    let page: DashboardList = serde_json::from_slice(&body).unwrap();
    assert_eq!(page.dashboards.len(), 1);
    assert_eq!(page.next, None);
}

#[tokio::test]
async fn test_list_rejects_invalid_cursor() {
    let (app, _) = app();

    for uri in ["/dashboard/list?next=abc", "/dashboard/list?next=-1"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(String::from_utf8(body).unwrap(), "Invalid next value");
    }
}

#[tokio::test]
async fn test_wrong_method() {
    let (app, _) = app();
    let (status, _) = send(&app, Method::GET, "/dashboard/create", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
