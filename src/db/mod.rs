// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document store layer (Firestore, or in-process for local runs).

pub mod firestore;
pub mod memory;

pub use firestore::Db;
pub use memory::MemoryStore;

/// Legacy status listing never returns more than this many records.
pub const MAX_STATUS_CHECKS: usize = 1000;

/// Collection names as constants.
pub mod collections {
    /// User profiles (keyed by Supabase subject)
    pub const USER_PROFILES: &str = "user_profiles";
    pub const STATUS_CHECKS: &str = "status_checks";
}
