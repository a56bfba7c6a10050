// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Supabase access token verification.
//!
//! Tokens are HS256-signed with the project's shared JWT secret. Every request
//! is verified from scratch: no caching, no revocation list, no refresh.

use axum::http::HeaderValue;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// Audience Supabase stamps on tokens of signed-in users.
pub const EXPECTED_AUDIENCE: &str = "authenticated";
/// Role assumed when the token carries none.
pub const DEFAULT_ROLE: &str = "authenticated";

/// Authenticated user extracted from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Identity provider subject; the profile lookup key
    pub subject: String,
    /// Email claim, absent for phone-only identities
    pub email: Option<String>,
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Why a token was rejected.
///
/// Callers only ever see a uniform 401; the variants exist for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not a Bearer token")]
    NotBearer,

    #[error("token expired")]
    Expired,

    #[error("token audience is not \"authenticated\"")]
    WrongAudience,

    #[error("invalid token: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct SupabaseClaims {
    sub: String,
    exp: u64,
    email: Option<String>,
    role: Option<String>,
}

/// Verifier for identity provider tokens signed with a shared secret.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "aud", "sub"]);
        validation.set_audience(&[EXPECTED_AUDIENCE]);
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verify a raw bearer token and extract its claims.
    pub fn verify(&self, token: &str) -> Result<AuthUser, AuthError> {
        let token_data = decode::<SupabaseClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                ErrorKind::InvalidAudience => AuthError::WrongAudience,
                _ => AuthError::Invalid(e.to_string()),
            })?;

        let claims = token_data.claims;
        Ok(AuthUser {
            subject: claims.sub,
            email: claims.email,
            role: claims.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            exp: claims.exp,
        })
    }

    /// Verify the token carried by an `Authorization` header.
    pub fn verify_header(&self, auth_header: Option<&HeaderValue>) -> Result<AuthUser, AuthError> {
        let token = extract_bearer_token(auth_header)?;
        self.verify(token)
    }
}

fn extract_bearer_token(auth_header: Option<&HeaderValue>) -> Result<&str, AuthError> {
    let value = auth_header
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::NotBearer)?;

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::NotBearer)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::NotBearer);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::NotBearer);
    }

    Ok(token)
}
