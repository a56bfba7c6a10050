// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Every secret the service needs is read once at startup. Missing values
//! abort startup instead of surfacing later as request failures.

use std::env;

/// `DATABASE_URL` value that selects the in-process document store.
pub const MEMORY_DATABASE_URL: &str = "memory://";

const DEFAULT_PORT: u16 = 8001;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Document store endpoint (`memory://` or a Firestore API URL)
    pub database_url: String,
    /// Document database name
    pub database_name: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,

    // --- Secrets ---
    /// Shared HMAC secret of the identity provider (raw bytes)
    pub jwt_secret: Vec<u8>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file next to the binary is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_name: required("DATABASE_NAME")?,
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            jwt_secret: required("SUPABASE_JWT_SECRET")?.into_bytes(),
        })
    }

    /// Deterministic config for tests, backed by the in-memory store.
    pub fn test_default() -> Self {
        Self {
            database_url: MEMORY_DATABASE_URL.to_string(),
            database_name: "core_test".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: DEFAULT_PORT,
            jwt_secret: b"test_supabase_jwt_secret_32_bytes!".to_vec(),
        }
    }

    /// Whether the in-process store was requested.
    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATABASE_URL
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
