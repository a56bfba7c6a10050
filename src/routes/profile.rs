// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile routes for the authenticated user.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{ProfileUpdate, UserProfile};
use crate::AppState;
use axum::{extract::State, routing::get, Extension, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/profile",
        get(get_profile).post(save_profile).put(update_profile),
    )
}

/// Get the caller's profile, creating an empty one on first access.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserProfile>> {
    let profile = state
        .profiles
        .get_or_create(&user.subject, user.email.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(profile))
}

/// Create the caller's profile, or merge into it if it exists.
async fn save_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(fields): Json<ProfileUpdate>,
) -> Result<Json<UserProfile>> {
    let profile = state
        .profiles
        .create_or_replace(
            &user.subject,
            user.email.as_deref().unwrap_or_default(),
            fields,
        )
        .await?;
    Ok(Json(profile))
}

/// Merge into an existing profile; 404 if there is none yet.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(fields): Json<ProfileUpdate>,
) -> Result<Json<UserProfile>> {
    let profile = state.profiles.update(&user.subject, fields).await?;
    Ok(Json(profile))
}
