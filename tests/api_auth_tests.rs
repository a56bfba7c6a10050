// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API authentication and CORS tests.
//!
//! These tests verify that:
//! 1. Protected routes reject missing, forged, expired and mis-addressed tokens
//! 2. Protected routes echo the claims of valid tokens
//! 3. CORS preflight requests return permissive headers

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use core_vr_api::error::BEARER_CHALLENGE;
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{body_json, create_test_app, create_test_jwt, get, sign_claims, supabase_claims};

const PROTECTED_GETS: [&str; 4] = [
    "/api/auth/me",
    "/api/auth/protected",
    "/api/profile",
    "/api/vr/sessions",
];

#[tokio::test]
async fn test_protected_routes_without_token() {
    let (app, _) = create_test_app();

    for uri in PROTECTED_GETS {
        let response = app.clone().oneshot(get(uri, None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            BEARER_CHALLENGE
        );
    }
}

#[tokio::test]
async fn test_protected_route_with_invalid_token() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(get("/api/auth/me", Some("invalid.token.here")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn test_non_bearer_scheme_rejected() {
    let (app, state) = create_test_app();
    let token = create_test_jwt(&state, "sub-basic", "basic@coreplatform.com");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::AUTHORIZATION, format!("Basic {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_wrong_secret() {
    let (app, _) = create_test_app();
    let token = sign_claims(
        &supabase_claims("sub-forged", "forged@coreplatform.com"),
        b"wrong_secret",
    );

    for uri in PROTECTED_GETS {
        let response = app.clone().oneshot(get(uri, Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn test_expired_token() {
    let (app, state) = create_test_app();
    let mut claims = supabase_claims("sub-expired", "expired@coreplatform.com");
    claims["exp"] = json!(common::now() - 3600);
    let token = sign_claims(&claims, &state.config.jwt_secret);

    for uri in PROTECTED_GETS {
        let response = app.clone().oneshot(get(uri, Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn test_not_yet_valid_token() {
    let (app, state) = create_test_app();
    let mut claims = supabase_claims("sub-future", "future@coreplatform.com");
    claims["nbf"] = json!(common::now() + 3600);
    claims["exp"] = json!(common::now() + 7200);
    let token = sign_claims(&claims, &state.config.jwt_secret);

    for uri in PROTECTED_GETS {
        let response = app.clone().oneshot(get(uri, Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
    assert!(state.db.get_profile("sub-future").await.unwrap().is_none());
}

#[tokio::test]
async fn test_wrong_audience() {
    let (app, state) = create_test_app();
    let mut claims = supabase_claims("sub-anon", "anon@coreplatform.com");
    claims["aud"] = json!("anon");
    let token = sign_claims(&claims, &state.config.jwt_secret);

    let response = app.oneshot(get("/api/auth/me", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_echoes_claims() {
    let (app, state) = create_test_app();
    let token = create_test_jwt(&state, "sub-me", "test.user@coreplatform.com");

    let response = app.oneshot(get("/api/auth/me", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "user_id": "sub-me",
            "email": "test.user@coreplatform.com",
            "role": "authenticated",
        })
    );
}

#[tokio::test]
async fn test_me_defaults_role() {
    let (app, state) = create_test_app();
    let mut claims = supabase_claims("sub-norole", "norole@coreplatform.com");
    claims.as_object_mut().unwrap().remove("role");
    let token = sign_claims(&claims, &state.config.jwt_secret);

    let response = app.oneshot(get("/api/auth/me", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["role"], "authenticated");
}

#[tokio::test]
async fn test_protected_demo_payload() {
    let (app, state) = create_test_app();
    let token = create_test_jwt(&state, "sub-demo", "demo@coreplatform.com");

    let response = app
        .oneshot(get("/api/auth/protected", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Access granted to CORE platform");
    assert_eq!(body["user_email"], "demo@coreplatform.com");
    assert_eq!(
        body["platform"],
        "CORE - Conscious Observation Reconstruction Engine"
    );
}

#[tokio::test]
async fn test_vr_sessions_placeholder() {
    let (app, state) = create_test_app();
    let token = create_test_jwt(&state, "sub-vr", "vr@coreplatform.com");

    let response = app
        .oneshot(get("/api/vr/sessions", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user_id"], "sub-vr");
    let sessions = body["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    for session in sessions {
        assert!(session["id"].is_string());
        assert!(session["title"].is_string());
        assert!(session["date"].is_string());
        assert!(session["duration"].is_u64());
        assert!(session["type"].is_string());
    }

    // Nothing is persisted for sessions.
    assert_eq!(state.db.memory().unwrap().profile_count(), 0);
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/profile")
                .header(header::ORIGIN, "https://headset.example.org")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // OPTIONS should return 200 (CORS preflight success)
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://headset.example.org"
    );
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_HEADERS));
}

#[tokio::test]
async fn test_public_routes_no_auth_required() {
    let (app, _) = create_test_app();

    let response = app.clone().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");

    let response = app.oneshot(get("/api/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "CORE - Conscious Observation Reconstruction Engine API"
    );
}
