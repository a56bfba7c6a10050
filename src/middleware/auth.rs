// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer token authentication middleware.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

pub use crate::services::token::AuthUser;

/// Middleware that requires a valid Supabase access token.
///
/// On success the verified [`AuthUser`] is available to handlers as an
/// `Extension`. Rejected requests never reach a handler, so they never
/// touch the store.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request.headers().get(header::AUTHORIZATION);

    let auth_user = state.verifier.verify_header(auth_header).map_err(|err| {
        tracing::warn!(
            reason = %err,
            path = %request.uri().path(),
            "Rejected request: authentication failed"
        );
        AppError::from(err)
    })?;

    tracing::debug!(
        subject = %auth_user.subject,
        role = %auth_user.role,
        "Authenticated request"
    );

    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}
