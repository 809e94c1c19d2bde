// ABOUTME: Authentication state machine for the admin operator's session
// ABOUTME: Commits, hydrates and clears the session, broadcasting transitions over a watch channel

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

//! # Auth Session Manager
//!
//! Owns the in-memory session and mirrors it to a [`SessionStore`]. There are
//! exactly two states, [`AuthState::Unauthenticated`] and
//! [`AuthState::Authenticated`]; an authenticated state always carries both
//! the access token and the user profile.
//!
//! The current state lives in a `tokio::sync::watch` channel. Readers see
//! every transition immediately through [`AuthSessionManager::state`], and
//! long-lived consumers (navigation, badges) can [`AuthSessionManager::subscribe`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::client::BearerTokenSource;
use crate::errors::{AppResult, ErrorCode};
use crate::models::User;

use super::store::{PersistedSession, SessionStore};

/// Credentials and identity of the signed-in operator
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer access token
    pub access_token: String,
    /// Refresh token
    pub refresh_token: String,
    /// Operator profile
    pub user: User,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// Authentication state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// No session
    #[default]
    Unauthenticated,
    /// Session committed or hydrated
    Authenticated(Session),
}

impl AuthState {
    /// True iff a token and a user profile are both held
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Session, if authenticated
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated(session) => Some(session),
        }
    }
}

/// Single owner of the operator session
pub struct AuthSessionManager {
    store: Arc<dyn SessionStore>,
    state: watch::Sender<AuthState>,
    hydration_started: AtomicBool,
    hydrated: AtomicBool,
}

impl AuthSessionManager {
    /// Manager over `store`, starting unauthenticated and not yet hydrated
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let (state, _) = watch::channel(AuthState::Unauthenticated);
        Self {
            store,
            state,
            hydration_started: AtomicBool::new(false),
            hydrated: AtomicBool::new(false),
        }
    }

    /// Persist the session, then mark it authenticated
    ///
    /// Performs no token or role validation; callers decide who may log in.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be persisted, in which
    /// case the in-memory state is left as it was.
    pub fn commit(&self, access_token: String, refresh_token: String, user: User) -> AppResult<()> {
        let persisted = PersistedSession {
            access_token: access_token.clone(),
            refresh_token: refresh_token.clone(),
            user: serde_json::to_string(&user)?,
        };
        self.store.save(&persisted)?;

        info!(user_id = %user.id, email = %user.email, "Admin session committed");
        self.state.send_replace(AuthState::Authenticated(Session {
            access_token,
            refresh_token,
            user,
        }));
        Ok(())
    }

    /// Clear the persisted session and return to unauthenticated
    ///
    /// Calling this while unauthenticated is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the persisted entries could not be removed.
    /// The in-memory state is reset regardless.
    pub fn logout(&self) -> AppResult<()> {
        let cleared = self.store.clear();
        let previous = self.state.send_replace(AuthState::Unauthenticated);
        if let Some(session) = previous.session() {
            info!(user_id = %session.user.id, "Admin session ended");
        }
        if let Err(ref e) = cleared {
            warn!(error = %e, "Failed to clear persisted session on logout");
        }
        cleared
    }

    /// Restore the session persisted by a previous process
    ///
    /// Runs once; later calls return the current state unchanged. A corrupt
    /// persisted session is cleared and the manager stays unauthenticated.
    /// Nothing here is reported to the caller as an error.
    pub fn hydrate(&self) -> AuthState {
        if self.hydration_started.swap(true, Ordering::AcqRel) {
            warn!("Session hydration requested more than once; ignoring");
            return self.state();
        }

        match self.store.load() {
            Ok(None) => debug!("No persisted session"),
            Ok(Some(persisted)) => self.restore(persisted),
            Err(e) if e.code == ErrorCode::CorruptSession => {
                warn!(error = %e, "Discarding corrupt persisted session");
                self.discard();
            }
            Err(e) => warn!(error = %e, "Persisted session unavailable; starting signed out"),
        }

        self.hydrated.store(true, Ordering::Release);
        self.state()
    }

    fn restore(&self, persisted: PersistedSession) {
        if persisted.access_token.is_empty() {
            warn!("Persisted session has an empty access token; discarding");
            self.discard();
            return;
        }

        match serde_json::from_str::<User>(&persisted.user) {
            Ok(user) => {
                info!(user_id = %user.id, "Admin session restored");
                self.state.send_replace(AuthState::Authenticated(Session {
                    access_token: persisted.access_token,
                    refresh_token: persisted.refresh_token,
                    user,
                }));
            }
            Err(e) => {
                warn!(error = %e, "Persisted user profile is unreadable; discarding session");
                self.discard();
            }
        }
    }

    fn discard(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear discarded session");
        }
        self.state.send_replace(AuthState::Unauthenticated);
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Whether [`Self::hydrate`] has completed
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated.load(Ordering::Acquire)
    }

    /// Whether a session is held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Current access token
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.state
            .borrow()
            .session()
            .map(|session| session.access_token.clone())
    }

    /// Current operator profile
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().session().map(|session| session.user.clone())
    }

    /// Whether the current operator holds the admin role
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.state
            .borrow()
            .session()
            .is_some_and(|session| session.user.role.is_admin())
    }
}

impl BearerTokenSource for AuthSessionManager {
    fn bearer_token(&self) -> Option<String> {
        self.access_token()
    }
}

impl fmt::Debug for AuthSessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSessionManager")
            .field("authenticated", &self.is_authenticated())
            .field("hydrated", &self.is_hydrated())
            .finish_non_exhaustive()
    }
}
