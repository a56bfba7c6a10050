// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod profile;
pub mod session;
pub mod status;

pub use profile::{ProfileUpdate, UserProfile};
pub use session::{VrSession, VrSessionsResponse};
pub use status::{StatusCheck, StatusCheckCreate};
