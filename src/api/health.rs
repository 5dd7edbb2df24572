//! Health check and service index endpoints

use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::error::ErrorResponse;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse)
    )
)]
pub async fn readiness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Service banner listing the available endpoints
pub async fn service_index() -> Json<Value> {
    Json(json!({
        "message": "Libris Library System API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "books": {
                "getAll": "GET /api/books",
                "getById": "GET /api/books/:id",
                "create": "POST /api/books (Admin)",
                "update": "PUT /api/books/:id (Admin)",
                "delete": "DELETE /api/books/:id (Admin)"
            },
            "borrow": {
                "borrowBook": "POST /api/borrow (User)",
                "getLogs": "GET /api/borrow/logs (Admin)"
            }
        }
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "Endpoint not found".to_string(),
            message: None,
            details: None,
        }),
    )
}
