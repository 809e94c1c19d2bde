// ABOUTME: Operator session lifecycle: durable storage and the in-memory auth state machine
// ABOUTME: Re-exports the session store implementations and the AuthSessionManager

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

/// In-memory auth state machine
pub mod manager;

/// Durable session storage
pub mod store;

use std::sync::Arc;

pub use manager::{AuthSessionManager, AuthState, Session};
pub use store::{FileSessionStore, MemorySessionStore, PersistedSession, SessionStore};

use crate::config::SessionLocation;

/// Build the store selected by configuration
#[must_use]
pub fn store_for(location: &SessionLocation) -> Arc<dyn SessionStore> {
    match location {
        SessionLocation::File(path) => Arc::new(FileSessionStore::new(path.clone())),
        SessionLocation::Ephemeral => Arc::new(MemorySessionStore::new()),
    }
}
