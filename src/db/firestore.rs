// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document store client with typed operations.
//!
//! Provides key lookup and full-document replace for:
//! - User profiles (one document per Supabase subject)
//! - Status checks (legacy, append-only)

use crate::config::Config;
use crate::db::{collections, MemoryStore};
use crate::error::AppError;
use crate::models::{StatusCheck, UserProfile};
use std::sync::Arc;

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreDb),
    Memory(Arc<MemoryStore>),
}

/// Document store handle, cheap to clone and shared by all requests.
#[derive(Clone)]
pub struct Db {
    backend: Option<Backend>,
}

impl Db {
    /// Connect to the store named by the configuration.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        if config.uses_memory_store() {
            tracing::info!("Using in-memory document store");
            return Ok(Self::new_memory());
        }

        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(config).await;
        }

        let client = firestore::FirestoreDb::with_options(firestore_options(config))
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(
            project = %config.gcp_project_id,
            database = %config.database_name,
            "Connected to Firestore"
        );

        Ok(Self {
            backend: Some(Backend::Firestore(client)),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(config: &Config) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(config.gcp_project_id.clone())
            .with_database_id(config.database_name.clone());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = %config.gcp_project_id,
            database = %config.database_name,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            backend: Some(Backend::Firestore(client)),
        })
    }

    /// Create an in-process store.
    pub fn new_memory() -> Self {
        Self {
            backend: Some(Backend::Memory(Arc::new(MemoryStore::new()))),
        }
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { backend: None }
    }

    /// The in-process store, if that is the active backend.
    pub fn memory(&self) -> Option<&MemoryStore> {
        match &self.backend {
            Some(Backend::Memory(store)) => Some(store.as_ref()),
            _ => None,
        }
    }

    /// Helper to get the backend or return an error if offline.
    fn get_backend(&self) -> Result<&Backend, AppError> {
        self.backend
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Release the store handle at shutdown.
    pub fn close(self) {
        match self.backend {
            Some(Backend::Firestore(_)) => tracing::info!("Closing Firestore connection"),
            Some(Backend::Memory(store)) => tracing::info!(
                profiles = store.profile_count(),
                "Discarding in-memory document store"
            ),
            None => {}
        }
    }

    // ─── Profile Operations ──────────────────────────────────────

    /// Get the profile owned by a Supabase subject.
    pub async fn get_profile(&self, subject_id: &str) -> Result<Option<UserProfile>, AppError> {
        match self.get_backend()? {
            Backend::Memory(store) => Ok(store.get_profile(subject_id)),
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::USER_PROFILES)
                .obj()
                .one(&profile_doc_id(subject_id))
                .await
                .map_err(|e| AppError::Database(e.to_string())),
        }
    }

    /// Write the whole profile document, replacing any previous version.
    pub async fn put_profile(&self, profile: &UserProfile) -> Result<(), AppError> {
        match self.get_backend()? {
            Backend::Memory(store) => store.put_profile(profile),
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::USER_PROFILES)
                    .document_id(profile_doc_id(&profile.subject_id))
                    .object(profile)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }
        }
        Ok(())
    }

    // ─── Status Check Operations ─────────────────────────────────

    /// Append a status check.
    pub async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        match self.get_backend()? {
            Backend::Memory(store) => store.insert_status_check(check).await,
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::STATUS_CHECKS)
                    .document_id(&check.id)
                    .object(check)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }
        }
        Ok(())
    }

    /// List status checks, oldest first, at most `limit`.
    pub async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>, AppError> {
        match self.get_backend()? {
            Backend::Memory(store) => Ok(store.list_status_checks(limit).await),
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::STATUS_CHECKS)
                .order_by([("timestamp", firestore::FirestoreQueryDirection::Ascending)])
                .limit(limit as u32)
                .obj()
                .query()
                .await
                .map_err(|e| AppError::Database(e.to_string())),
        }
    }
}

/// Client options for a real Firestore endpoint named by `DATABASE_URL`.
fn firestore_options(config: &Config) -> firestore::FirestoreDbOptions {
    firestore::FirestoreDbOptions::new(config.gcp_project_id.clone())
        .with_database_id(config.database_name.clone())
        .with_firebase_api_url(config.database_url.clone())
}

/// Subjects are opaque; keep them out of the document path syntax.
fn profile_doc_id(subject_id: &str) -> String {
    urlencoding::encode(subject_id).into_owned()
}
