// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CORE: Conscious Observation Reconstruction Engine API
//!
//! This crate provides the backend for the CORE VR therapy platform:
//! user profiles and session data behind bearer tokens issued by Supabase.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::Db;
use services::{ProfileService, TokenVerifier};

/// Shared application state.
///
/// Built once at startup and handed to the router; nothing in here is
/// mutated per request.
pub struct AppState {
    pub config: Config,
    pub db: Db,
    pub profiles: ProfileService,
    pub verifier: TokenVerifier,
}

impl AppState {
    /// Wire up services around an already-connected store.
    pub fn new(config: Config, db: Db) -> Self {
        let verifier = TokenVerifier::new(&config.jwt_secret);
        let profiles = ProfileService::new(db.clone());

        Self {
            config,
            db,
            profiles,
            verifier,
        }
    }
}
