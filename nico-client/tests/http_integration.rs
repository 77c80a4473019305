// nico-client/tests/http_integration.rs
// Network client against a local stub of the REST service

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use nico_client::{ClientConfig, ClientError, NicoApi, NetworkHttpClient, Session, SessionStore};
use serde_json::json;
use std::collections::HashMap;
use tempfile::TempDir;

const TOKEN: &str = "stub-token";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn expired() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Token expired" }))).into_response()
}

async fn list_brands(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Response {
    if !authorized(&headers) {
        return expired();
    }
    let name = format!("{} p{} s{}", q["search"], q["page"], q["size"]);
    Json(json!({
        "message": "ok",
        "data": {
            "brands": [{ "brandId": 1, "brandName": name }],
            "totalPages": 3,
            "totalItems": 21
        }
    }))
    .into_response()
}

async fn save_brand() -> Response {
    (
        StatusCode::CONFLICT,
        Json(json!({ "message": "Brand already exists" })),
    )
        .into_response()
}

async fn delete_brand(Path(id): Path<i64>) -> Response {
    // plain-text success body
    format!("Brand {id} removed").into_response()
}

async fn excel(Query(q): Query<HashMap<String, String>>) -> Response {
    let body = format!("xlsx:{}-{}", q["month"], q["year"]);
    body.into_bytes().into_response()
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/api/brand/list", get(list_brands))
        .route("/api/brand/save", post(save_brand))
        .route("/api/brand/delete/{id}", delete(delete_brand))
        .route("/api/inquiry/excel", get(excel));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn api(base_url: &str, session: SessionStore) -> NicoApi<NetworkHttpClient> {
    let config = ClientConfig::new(base_url);
    NicoApi::new(NetworkHttpClient::new(&config, session).unwrap())
}

fn signed_in() -> SessionStore {
    SessionStore::in_memory(Session {
        token: Some(TOKEN.into()),
        user_id: Some(5),
        user_role: Some("Admin".into()),
    })
}

#[tokio::test]
async fn test_bearer_token_and_query_are_sent() {
    let base = spawn_stub().await;
    let api = api(&base, signed_in());

    let page = api.list_brands(2, 25, "gr").await.unwrap();
    assert_eq!(page.items[0].brand_name, "gr p2 s25");
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_items, Some(21));
}

#[tokio::test]
async fn test_missing_token_maps_to_unauthorized() {
    let base = spawn_stub().await;
    let api = api(&base, SessionStore::in_memory(Session::default()));

    let err = api.list_brands(1, 10, "").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(_)));
    assert!(err.is_auth_failure());
    assert_eq!(err.server_message(), Some("Token expired"));
}

#[tokio::test]
async fn test_error_message_is_surfaced() {
    let base = spawn_stub().await;
    let api = api(&base, signed_in());

    let err = api.create_brand("Grundfos").await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.server_message(), Some("Brand already exists"));
}

#[tokio::test]
async fn test_plain_text_success_becomes_message() {
    let base = spawn_stub().await;
    let api = api(&base, signed_in());

    let ack = api.delete_brand(7).await.unwrap();
    assert_eq!(ack.message_or("fallback"), "Brand 7 removed");
}

#[tokio::test]
async fn test_export_returns_raw_bytes() {
    let base = spawn_stub().await;
    let api = api(&base, signed_in());

    let bytes = api.export_inquiries(3, 2024).await.unwrap();
    assert_eq!(bytes, b"xlsx:3-2024");
}

#[tokio::test]
async fn test_connect_loads_session_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(
        &path,
        json!({ "token": TOKEN, "userId": 5, "userRole": "Sales" }).to_string(),
    )
    .unwrap();

    let base = spawn_stub().await;
    let config = ClientConfig::new(&base).with_session_file(&path);
    let api = nico_client::connect(&config).unwrap();

    assert!(!api.session().is_admin().await);
    assert_eq!(api.list_brands(1, 10, "x").await.unwrap().items.len(), 1);
}
