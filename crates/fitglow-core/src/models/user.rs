// ABOUTME: User profile and role types returned by the FitGlow authentication API
// ABOUTME: Includes the login request/response DTOs and the UserRef id-or-embedded variant

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform role of a user account
///
/// Unknown role strings are preserved in [`UserRole::Other`] so that a role
/// added on the server never breaks profile parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    /// End customer of the fitness app
    Customer,
    /// Coach offering programs on the platform
    Coach,
    /// Platform administrator, the only role allowed into the admin client
    Admin,
    /// Role string not known to this client
    Other(String),
}

impl UserRole {
    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Customer => "Customer",
            Self::Coach => "Coach",
            Self::Admin => "Admin",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this role may hold an admin session
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl From<String> for UserRole {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Customer" => Self::Customer,
            "Coach" => Self::Coach,
            "Admin" => Self::Admin,
            _ => Self::Other(raw),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Login email
    pub email: String,
    /// Platform role
    pub role: UserRole,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Whether the email address has been verified
    #[serde(default)]
    pub is_verified: bool,
    /// Account creation time
    pub created_at: DateTime<Utc>,
    /// Last profile update
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// `"First Last"`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Reference to a user that the server either embeds or sends as a bare id
///
/// Which shape arrives depends on whether the server populated the relation,
/// so both must be accepted on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    /// Unpopulated reference
    ById(String),
    /// Populated reference
    Embedded(User),
}

impl UserRef {
    /// Identifier of the referenced user, whichever shape was received
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::ById(id) => id,
            Self::Embedded(user) => &user.id,
        }
    }

    /// Name to show for the reference: full name when embedded, raw id otherwise
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::ById(id) => id.clone(),
            Self::Embedded(user) => user.full_name(),
        }
    }

    /// Embedded profile, if the server populated it
    #[must_use]
    pub const fn as_user(&self) -> Option<&User> {
        match self {
            Self::ById(_) => None,
            Self::Embedded(user) => Some(user),
        }
    }
}

/// `POST /auth/login` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// `POST /auth/login` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Token used to obtain a new access token
    pub refresh_token: String,
    /// Authenticated user's profile
    pub user: User,
}

/// `POST /auth/forgot-password` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    /// Account email to send the reset link to
    pub email: String,
}
