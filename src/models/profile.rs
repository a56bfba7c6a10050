// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// User profile stored in the document store, one per identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/src/lib/generated/")
)]
pub struct UserProfile {
    /// Generated at creation, never changes
    pub id: String,
    /// Supabase subject (also used as document ID)
    #[serde(rename = "supabase_uid")]
    pub subject_id: String,
    /// Copied from the token when the profile is created
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub therapy_preferences: Vec<String>,
    /// Free-form VR client settings
    #[serde(rename = "vr_settings", default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "Record<string, unknown>"))]
    pub settings: Map<String, Value>,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// A fresh profile with empty collections.
    pub fn new(subject_id: &str, email: &str) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            subject_id: subject_id.to_string(),
            email: email.to_string(),
            full_name: None,
            therapy_preferences: Vec::new(),
            settings: Map::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial profile update, the body of `POST /profile` and `PUT /profile`.
///
/// Absent and `null` fields both deserialize to `None` and leave the stored
/// value untouched. Collections are replaced whole.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/src/lib/generated/")
)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub therapy_preferences: Option<Vec<String>>,
    #[serde(default, rename = "vr_settings")]
    #[cfg_attr(
        feature = "binding-generation",
        ts(type = "Record<string, unknown> | null")
    )]
    pub settings: Option<Map<String, Value>>,
}

impl ProfileUpdate {
    /// Merge the present fields into `profile` and bump `updated_at`.
    pub fn apply(self, profile: &mut UserProfile) {
        if let Some(full_name) = self.full_name {
            profile.full_name = Some(full_name);
        }
        if let Some(prefs) = self.therapy_preferences {
            profile.therapy_preferences = prefs;
        }
        if let Some(settings) = self.settings {
            profile.settings = settings;
        }
        profile.updated_at = Utc::now();
    }
}
