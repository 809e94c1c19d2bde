// ABOUTME: Unified error type and error codes for the FitGlow admin client
// ABOUTME: AppError carries a machine-readable ErrorCode plus a user-facing message

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

//! # Error Handling
//!
//! Every fallible operation in the admin client returns [`AppResult`]. Errors
//! fall into four families:
//!
//! - credential failures ([`ErrorCode::InvalidCredentials`]), always reported
//!   with a generic message
//! - authorization failures ([`ErrorCode::AccessDenied`])
//! - transient network or server failures, see [`AppError::is_transient`]
//! - local session corruption ([`ErrorCode::CorruptSession`]), repaired
//!   silently by session hydration

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Login failed; the cause is deliberately not distinguished
    InvalidCredentials,
    /// Authenticated, but the account is not allowed to use the admin client
    AccessDenied,
    /// No session, or the server rejected the bearer token
    AuthRequired,
    /// Caller supplied malformed input
    InvalidInput,
    /// Requested resource does not exist on the server
    ResourceNotFound,
    /// Network failure or unexpected response from the REST API or storage provider
    ExternalServiceError,
    /// Local durable storage could not be read or written
    StorageError,
    /// Persisted session exists but cannot be used
    CorruptSession,
    /// Invalid configuration value
    ConfigError,
    /// Anything else
    InternalError,
}

impl ErrorCode {
    /// Stable string form used in logs and CLI output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::AccessDenied => "access_denied",
            Self::AuthRequired => "auth_required",
            Self::InvalidInput => "invalid_input",
            Self::ResourceNotFound => "resource_not_found",
            Self::ExternalServiceError => "external_service_error",
            Self::StorageError => "storage_error",
            Self::CorruptSession => "corrupt_session",
            Self::ConfigError => "config_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application error with code and message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Human-readable message, safe to show to the operator
    pub message: String,
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create an error with an explicit code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Generic login failure. The message never reveals whether the account exists.
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials, "Invalid credentials")
    }

    /// Authorization failure for a correctly authenticated account
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AccessDenied, message)
    }

    /// Missing or rejected session
    pub fn auth_required(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthRequired, message)
    }

    /// Malformed caller input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource lookup failed
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Failure talking to an external service
    pub fn external_service(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", message.into()),
        )
    }

    /// Local storage I/O failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Persisted session is unusable
    pub fn corrupt_session(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CorruptSession, message)
    }

    /// Configuration problem
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Whether retrying the same operation later could succeed.
    ///
    /// Transient errors are surfaced as dismissible notifications; the
    /// operation is abandoned and prior state is kept.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ExternalServiceError | ErrorCode::ResourceNotFound
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {error}"))
    }
}
