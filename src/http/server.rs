//! Stub Users API server.
//!
//! A small axum service exposing the Users resource the harness targets, so
//! both positive and negative response contracts can be exercised without an
//! external deployment.

use crate::User;
use crate::http::{ErrorResponse, HealthCheckResponse, validate_user_payload};
use crate::store::UserStore;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
};
use log::{error, info, trace};
use std::sync::Arc;
use tokio::net::TcpListener;

pub type AppState = Arc<AppStateInner>;

#[derive(Clone)]
pub struct AppStateInner {
    pub directory: Arc<UserStore>,
}

pub fn error_to_status_code(error_code: &str) -> StatusCode {
    match error_code {
        "validation_error" => StatusCode::BAD_REQUEST,
        "user_not_found" => StatusCode::NOT_FOUND,
        "internal_error" => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn create_app_state() -> AppState {
    Arc::new(AppStateInner {
        directory: Arc::new(UserStore::new()),
    })
}

/// Creates the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        // Users resource routes
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        .route("/users/{id}", get(fetch_user))
        .route("/users/{id}", put(update_user))
        .route("/users/{id}", delete(remove_user))
        // Metadata routes
        .route("/health", get(health_check))
        .with_state(app_state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app_state = create_app_state();
    let app = create_router(app_state);
    let bind_address = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|e| format!("Failed to bind to address {bind_address}: {e}"))?;
    info!("Stub Users API starting on http://{bind_address}");
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Stub server failed to start: {e}"))?;
    Ok(())
}

// =============================================================================
// ROUTE HANDLERS
// =============================================================================

#[tracing::instrument(level = "debug", skip(app_state, body))]
async fn create_user(
    State(app_state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<User>), (StatusCode, Json<ErrorResponse>)> {
    let (name, email) = match validate_user_payload(&body) {
        Ok(fields) => fields,
        Err(error_response) => {
            error!("POST /users validation failed: {}", error_response.message);
            return Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ));
        }
    };
    let user = app_state.directory.create(name, email);
    trace!("POST /users - created user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

#[tracing::instrument(level = "debug", skip(app_state))]
async fn fetch_user(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    match app_state.directory.get(id) {
        Ok(user) => {
            trace!("GET /users/{id}");
            Ok(Json(user))
        }
        Err(error) => {
            error!("GET /users/{id} failed: {error}");
            let error_response = ErrorResponse::from(error);
            Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ))
        }
    }
}

#[tracing::instrument(level = "debug", skip(app_state, body))]
async fn update_user(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    let (name, email) = match validate_user_payload(&body) {
        Ok(fields) => fields,
        Err(error_response) => {
            error!(
                "PUT /users/{id} validation failed: {}",
                error_response.message
            );
            return Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ));
        }
    };
    match app_state.directory.update(id, name, email) {
        Ok(user) => {
            trace!("PUT /users/{id} - user replaced");
            Ok(Json(user))
        }
        Err(error) => {
            error!("PUT /users/{id} failed: {error}");
            let error_response = ErrorResponse::from(error);
            Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ))
        }
    }
}

#[tracing::instrument(level = "debug", skip(app_state))]
async fn remove_user(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match app_state.directory.remove(id) {
        Ok(()) => {
            trace!("DELETE /users/{id} - user removed");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(error) => {
            error!("DELETE /users/{id} failed: {error}");
            let error_response = ErrorResponse::from(error);
            Err((
                error_to_status_code(&error_response.error),
                Json(error_response),
            ))
        }
    }
}

#[tracing::instrument(level = "debug", skip(app_state))]
async fn list_users(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<User>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("GET /users");
    let users = app_state.directory.list();
    Ok(Json(users))
}

async fn health_check(
    State(_app_state): State<AppState>,
) -> Result<Json<HealthCheckResponse>, (StatusCode, Json<ErrorResponse>)> {
    trace!("GET /health");
    Ok(Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: "restprobe-stub".to_string(),
        timestamp: std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs(),
    }))
}
