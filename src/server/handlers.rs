//! HTTP request handlers

use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use crate::server::models::{
    ErrorResponse, HealthResponse, NotSetResponse, RootResponse, UpdateResponse, WakeupResponse,
};
use crate::server::state::StateService;
use crate::store::Record;

/// Shared state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    service: Arc<StateService>,
}

impl AppState {
    pub fn new(service: Arc<StateService>) -> Self {
        Self { service }
    }
}

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "SOTD API is running".to_string(),
        has_current: state.service.has_current().await,
    })
}

pub async fn current(State(state): State<AppState>) -> Response {
    match state.service.get_current().await {
        Some(record) => Json(record).into_response(),
        None => Json(NotSetResponse {
            status: "not_set".to_string(),
            message: "No song of the day has been set yet".to_string(),
        })
        .into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<Record>, JsonRejection>,
) -> Result<Json<UpdateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(record) = payload.map_err(|rejection| {
        let detail = rejection.body_text();
        tracing::warn!("rejected update: {}", detail);
        (
            rejection.status(),
            Json(ErrorResponse {
                status: "error".to_string(),
                detail,
            }),
        )
    })?;

    let record = state.service.update(record).await;
    Ok(Json(UpdateResponse {
        status: "ok".to_string(),
        title: record.title,
        entry_number: record.entry_number,
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.service.health().await;
    Json(HealthResponse {
        status: "healthy".to_string(),
        has_current: snapshot.has_current,
        entry_number: snapshot.entry_number,
        title: snapshot.title,
        storage_file: snapshot.storage_file,
        storage_file_exists: snapshot.storage_file_exists,
    })
}

pub async fn wakeup(State(state): State<AppState>) -> Json<WakeupResponse> {
    let snapshot = state.service.wakeup().await;
    Json(WakeupResponse {
        status: "awake".to_string(),
        message: "SOTD API is awake".to_string(),
        current_title: snapshot.current_title,
    })
}
