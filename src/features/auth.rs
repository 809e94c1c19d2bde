// ABOUTME: Login, password reset and logout flows for the admin operator
// ABOUTME: Only Admin accounts reach commit; every other outcome leaves storage untouched

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::sync::Arc;

use tracing::{info, warn};

use crate::client::AdminApi;
use crate::constants::ADMIN_ONLY_MESSAGE;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{ForgotPasswordRequest, LoginRequest, User};
use crate::notifications::Notifier;
use crate::routing::Route;
use crate::session::AuthSessionManager;

use super::validate_email;

/// Authentication screens' behavior
#[derive(Clone)]
pub struct LoginFlow {
    api: Arc<dyn AdminApi>,
    session: Arc<AuthSessionManager>,
    notifier: Notifier,
}

impl LoginFlow {
    /// Flow committing into `session`
    pub fn new(api: Arc<dyn AdminApi>, session: Arc<AuthSessionManager>, notifier: Notifier) -> Self {
        Self {
            api,
            session,
            notifier,
        }
    }

    /// Sign in, admitting only administrators
    ///
    /// Returns the route to navigate to.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the form is malformed (no request is sent)
    /// - `InvalidCredentials` if the server rejects the credentials or cannot be reached
    /// - `AccessDenied` if the account is not an administrator; nothing is persisted
    /// - `StorageError` if the session cannot be persisted
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Route> {
        validate_email(email)?;
        if password.is_empty() {
            return Err(AppError::invalid_input("Password is required"));
        }

        let request = LoginRequest {
            email: email.trim().to_owned(),
            password: password.to_owned(),
        };
        let response = match self.api.login(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Login request failed");
                let generic = AppError::invalid_credentials();
                self.notifier.error(generic.message.clone());
                return Err(generic);
            }
        };

        if !response.user.role.is_admin() {
            warn!(user_id = %response.user.id, role = %response.user.role, "Non-admin login refused");
            self.notifier.error(ADMIN_ONLY_MESSAGE);
            return Err(AppError::access_denied(ADMIN_ONLY_MESSAGE));
        }

        self.session
            .commit(response.access_token, response.refresh_token, response.user)?;
        self.notifier.success("Welcome back!");
        Ok(Route::DEFAULT_PROTECTED)
    }

    /// Ask the server to email a password reset link
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed address, or `ExternalServiceError`
    /// with a generic message if the request fails.
    pub async fn forgot_password(&self, email: &str) -> AppResult<()> {
        validate_email(email)?;
        let request = ForgotPasswordRequest {
            email: email.trim().to_owned(),
        };
        match self.api.forgot_password(&request).await {
            Ok(()) => {
                info!("Password reset link requested");
                self.notifier.success("Reset link sent to your email");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Password reset request failed");
                self.notifier.error("Failed to send reset link");
                Err(AppError::new(
                    ErrorCode::ExternalServiceError,
                    "Failed to send reset link",
                ))
            }
        }
    }

    /// End the session and return the route to show
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the persisted session could not be removed;
    /// the in-memory session is cleared regardless.
    pub fn logout(&self) -> AppResult<Route> {
        self.session.logout()?;
        Ok(Route::Login)
    }

    /// Profile of the signed-in operator, for the top bar
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when no session is held.
    pub fn whoami(&self) -> AppResult<User> {
        self.session
            .current_user()
            .ok_or_else(|| AppError::auth_required("Not signed in"))
    }
}
