// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! VR session routes.

use crate::middleware::auth::AuthUser;
use crate::models::VrSessionsResponse;
use crate::AppState;
use axum::{routing::get, Extension, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/vr/sessions", get(get_sessions))
}

async fn get_sessions(Extension(user): Extension<AuthUser>) -> Json<VrSessionsResponse> {
    Json(VrSessionsResponse::placeholder(&user.subject))
}
