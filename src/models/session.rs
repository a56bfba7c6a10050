// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! VR therapy session listing.
//!
//! Sessions are not persisted yet; the listing is a fixed catalog stamped
//! with fresh IDs and the current time.

use crate::time_utils::format_utc_rfc3339;
use chrono::Utc;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/src/lib/generated/")
)]
pub struct VrSession {
    pub id: String,
    pub title: String,
    /// RFC 3339 UTC
    pub date: String,
    /// Minutes
    pub duration: u32,
    #[serde(rename = "type")]
    pub session_type: String,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/src/lib/generated/")
)]
pub struct VrSessionsResponse {
    pub user_id: String,
    pub sessions: Vec<VrSession>,
}

/// (title, duration in minutes, type)
const PLACEHOLDER_SESSIONS: [(&str, u32, &str); 2] = [
    (
        "Memory Reconstruction Session #1",
        30,
        "therapeutic_memory_replay",
    ),
    ("Cognitive Behavioral Therapy Session", 45, "cbt_immersion"),
];

impl VrSessionsResponse {
    /// Placeholder sessions for `user_id`.
    pub fn placeholder(user_id: &str) -> Self {
        let date = format_utc_rfc3339(Utc::now());
        let sessions = PLACEHOLDER_SESSIONS
            .iter()
            .map(|(title, duration, session_type)| VrSession {
                id: uuid::Uuid::new_v4().to_string(),
                title: title.to_string(),
                date: date.clone(),
                duration: *duration,
                session_type: session_type.to_string(),
            })
            .collect();

        Self {
            user_id: user_id.to_string(),
            sessions,
        }
    }
}
