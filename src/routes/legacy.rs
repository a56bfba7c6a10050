// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Unauthenticated routes kept for older clients: the API banner and
//! status check-ins.

use crate::db::MAX_STATUS_CHECKS;
use crate::error::Result;
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub const API_TITLE: &str = "CORE - Conscious Observation Reconstruction Engine API";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/status", get(list_status_checks).post(create_status_check))
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: API_TITLE.to_string(),
    })
}

/// Record a client check-in.
async fn create_status_check(
    State(state): State<Arc<AppState>>,
    Json(input): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>> {
    let check = StatusCheck::from(input);
    state.db.insert_status_check(&check).await?;

    tracing::debug!(id = %check.id, client = %check.client_name, "Status check recorded");
    Ok(Json(check))
}

async fn list_status_checks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<StatusCheck>>> {
    let checks = state.db.list_status_checks(MAX_STATUS_CHECKS).await?;
    Ok(Json(checks))
}
