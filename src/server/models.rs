//! HTTP API response models

use serde::Serialize;

/// Root endpoint response
#[derive(Serialize, Debug, Clone)]
pub struct RootResponse {
    pub message: String,
    pub has_current: bool,
}

/// Returned by `/current` when no record has been set
#[derive(Serialize, Debug, Clone)]
pub struct NotSetResponse {
    pub status: String, // "not_set"
    pub message: String,
}

/// Confirmation of an accepted update
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UpdateResponse {
    pub status: String, // "ok"
    pub title: String,
    pub entry_number: i64,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String, // "healthy"
    pub has_current: bool,
    pub entry_number: Option<i64>,
    pub title: Option<String>,
    pub storage_file: String,
    pub storage_file_exists: bool,
}

#[derive(Serialize, Debug, Clone)]
pub struct WakeupResponse {
    pub status: String, // "awake"
    pub message: String,
    pub current_title: Option<String>,
}

/// Client error body for rejected requests
#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub status: String, // "error"
    pub detail: String,
}
