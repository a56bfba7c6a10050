// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store selected by `DATABASE_URL=memory://`.
//!
//! Same key layout as Firestore: one profile per subject, status checks in
//! insertion order. Contents are lost on restart.

use crate::models::{StatusCheck, UserProfile};
use dashmap::DashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    profiles: DashMap<String, UserProfile>,
    status_checks: RwLock<Vec<StatusCheck>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_profile(&self, subject_id: &str) -> Option<UserProfile> {
        self.profiles.get(subject_id).map(|p| p.value().clone())
    }

    /// Full-document replace; last write wins.
    pub fn put_profile(&self, profile: &UserProfile) {
        self.profiles
            .insert(profile.subject_id.clone(), profile.clone());
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub async fn insert_status_check(&self, check: &StatusCheck) {
        self.status_checks.write().await.push(check.clone());
    }

    /// Oldest first, at most `limit` records.
    pub async fn list_status_checks(&self, limit: usize) -> Vec<StatusCheck> {
        self.status_checks
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect()
    }
}
