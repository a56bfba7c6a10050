// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile lifecycle on top of the document store.
//!
//! Every operation is keyed by the verified token subject. There is no
//! compare-and-swap: concurrent writers for the same subject race and the
//! last write wins.

use crate::db::Db;
use crate::error::AppError;
use crate::models::{ProfileUpdate, UserProfile};

#[derive(Clone)]
pub struct ProfileService {
    db: Db,
}

impl ProfileService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Return the subject's profile, creating an empty one on first access.
    pub async fn get_or_create(
        &self,
        subject_id: &str,
        email: &str,
    ) -> Result<UserProfile, AppError> {
        if let Some(profile) = self.db.get_profile(subject_id).await? {
            return Ok(profile);
        }

        let profile = UserProfile::new(subject_id, email);
        self.db.put_profile(&profile).await?;

        tracing::info!(
            subject = subject_id,
            profile_id = %profile.id,
            "Created profile on first read"
        );
        Ok(profile)
    }

    /// Merge `fields` into the subject's profile, creating it if needed.
    pub async fn create_or_replace(
        &self,
        subject_id: &str,
        email: &str,
        fields: ProfileUpdate,
    ) -> Result<UserProfile, AppError> {
        let (mut profile, created) = match self.db.get_profile(subject_id).await? {
            Some(existing) => (existing, false),
            None => (UserProfile::new(subject_id, email), true),
        };

        fields.apply(&mut profile);
        if created {
            // Fresh documents keep created_at == updated_at.
            profile.updated_at = profile.created_at;
        }

        self.db.put_profile(&profile).await?;

        tracing::info!(
            subject = subject_id,
            profile_id = %profile.id,
            created,
            "Profile saved"
        );
        Ok(profile)
    }

    /// Merge `fields` into an existing profile.
    ///
    /// Fails with [`AppError::NotFound`] if the subject has no profile yet.
    pub async fn update(
        &self,
        subject_id: &str,
        fields: ProfileUpdate,
    ) -> Result<UserProfile, AppError> {
        let mut profile = self
            .db
            .get_profile(subject_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))?;

        fields.apply(&mut profile);
        self.db.put_profile(&profile).await?;

        tracing::debug!(
            subject = subject_id,
            profile_id = %profile.id,
            "Profile updated"
        );
        Ok(profile)
    }
}
