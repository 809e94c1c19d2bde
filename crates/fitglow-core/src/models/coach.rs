// ABOUTME: Coach profile records reviewed on the coach verification screen
// ABOUTME: Defines CoachProfile and the verify request body

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserRef;

/// Coach profile awaiting or holding verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachProfile {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Owning user, populated or by id
    pub user_id: UserRef,
    /// Free-form biography
    #[serde(default)]
    pub bio: String,
    /// Coaching specialties
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Years of coaching experience
    #[serde(default)]
    pub experience_years: f64,
    /// Certification names
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Social network handle per platform
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,
    /// Mean client rating
    #[serde(default)]
    pub average_rating: f64,
    /// Whether an admin has approved the profile
    #[serde(default)]
    pub is_verified: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update
    pub updated_at: DateTime<Utc>,
}

impl CoachProfile {
    /// Name shown in listings, resolved from the user reference
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user_id.display_name()
    }
}

/// `PUT /coach-profile/{id}/verify` body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCoachRequest {
    /// `true` to approve, `false` to reject
    pub is_verified: bool,
}
