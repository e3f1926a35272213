//! Dashboard handlers

use crate::error::{json_response, ApiError};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use dashboard_types::{CreateDashboard, UpdateDashboard};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    id: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    next: Option<String>,
}

// Bodies are decoded by hand so every malformed payload is a 400 rather
// than axum's 415/422 rejections.
fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|_| ApiError::BadRequest("Invalid request payload".to_string()))
}

pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let req: CreateDashboard = parse_body(&body)?;

    let dashboard = state.store.create(
        req.name,
        req.description.unwrap_or_default(),
        req.project,
    )?;

    json_response(StatusCode::CREATED, &dashboard)
}

pub async fn get(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, ApiError> {
    let dashboard = state.store.get(&query.id)?;
    json_response(StatusCode::OK, &dashboard)
}

pub async fn update(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: UpdateDashboard = parse_body(&body)?;

    let dashboard = state.store.update(&query.id, req.name, req.description)?;

    json_response(StatusCode::OK, &dashboard)
}

pub async fn delete(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&query.id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let cursor = match query.next.as_deref() {
        None | Some("") => 0,
        Some(next) => next
            .parse::<usize>()
            .map_err(|_| ApiError::BadRequest("Invalid next value".to_string()))?,
    };

    json_response(StatusCode::OK, &state.store.list(cursor))
}
