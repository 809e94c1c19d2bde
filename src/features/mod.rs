// ABOUTME: Feature modules instantiating the session and list controllers for each admin screen
// ABOUTME: Shared form validation helpers used by the feature inputs

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

/// Login, password reset and logout
pub mod auth;
/// Coach verification queue
pub mod coaches;
/// Analytics overview
pub mod dashboard;
/// Signed media uploads
pub mod media;
/// Meal content CMS
pub mod meals;
/// Product catalog management
pub mod store;
/// Workout content CMS
pub mod workouts;

use crate::errors::{AppError, AppResult};

/// Reject blank text fields
pub(crate) fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_input(format!("{field} is required")));
    }
    Ok(())
}

/// Reject negative or non-finite numbers
pub(crate) fn require_non_negative(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::invalid_input(format!("{field} must be positive")));
    }
    Ok(())
}

/// Minimal address shape check: one `@`, non-empty local part, dotted domain
pub(crate) fn validate_email(email: &str) -> AppResult<()> {
    let invalid = || AppError::invalid_input("Invalid email address");
    let (local, domain) = email.trim().split_once('@').ok_or_else(invalid)?;
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'));
    if local.is_empty() || domain.contains('@') || !domain_ok || email.contains(char::is_whitespace)
    {
        return Err(invalid());
    }
    Ok(())
}

/// Split a comma separated tag field, dropping blanks
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}
