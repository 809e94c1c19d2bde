// ABOUTME: Coach verification queue: list coach profiles, approve or reject them
// ABOUTME: Publishes the unverified coach count to the shared sidebar badge after each load

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;

use crate::client::AdminApi;
use crate::controller::{ListFilter, MutationAction, ResourceListController, ResourceService};
use crate::errors::{AppError, AppResult};
use crate::models::CoachProfile;
use crate::notifications::Notifier;
use crate::ui_state::UiState;

/// Verification decision on one coach profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoachAction {
    /// Mark verified
    Approve(String),
    /// Mark unverified
    Reject(String),
}

impl CoachAction {
    /// Target coach profile id
    #[must_use]
    pub fn coach_id(&self) -> &str {
        match self {
            Self::Approve(id) | Self::Reject(id) => id,
        }
    }

    const fn verified(&self) -> bool {
        matches!(self, Self::Approve(_))
    }
}

impl MutationAction for CoachAction {
    fn requires_confirmation(&self) -> bool {
        true
    }

    fn success_message(&self) -> String {
        if self.verified() {
            "Coach approved successfully".to_owned()
        } else {
            "Coach rejected successfully".to_owned()
        }
    }

    fn failure_message(&self) -> String {
        "Action failed".to_owned()
    }

    fn validate(&self) -> AppResult<()> {
        super::require_text("Coach id", self.coach_id())
    }
}

/// Verification status filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoachFilter {
    /// Every coach
    #[default]
    All,
    /// Awaiting verification
    Pending,
    /// Already verified
    Verified,
}

impl ListFilter<CoachProfile> for CoachFilter {
    fn matches(&self, coach: &CoachProfile) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !coach.is_verified,
            Self::Verified => coach.is_verified,
        }
    }
}

impl FromStr for CoachFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            other => Err(AppError::invalid_input(format!(
                "Unknown coach filter '{other}' (expected all, pending or verified)"
            ))),
        }
    }
}

impl fmt::Display for CoachFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Verified => "verified",
        })
    }
}

/// Number of coaches awaiting verification
#[must_use]
pub fn pending_count(coaches: &[CoachProfile]) -> usize {
    coaches.iter().filter(|coach| !coach.is_verified).count()
}

/// Coach profile endpoints plus the badge publisher
pub struct CoachService {
    api: Arc<dyn AdminApi>,
    ui: Arc<UiState>,
}

impl CoachService {
    /// Service publishing its pending count into `ui`
    pub fn new(api: Arc<dyn AdminApi>, ui: Arc<UiState>) -> Self {
        Self { api, ui }
    }
}

#[async_trait]
impl ResourceService for CoachService {
    type Item = CoachProfile;
    type Action = CoachAction;

    fn resource_name(&self) -> &'static str {
        "coaches"
    }

    async fn fetch_all(&self) -> AppResult<Vec<CoachProfile>> {
        self.api.list_coach_profiles().await
    }

    async fn execute(&self, action: &CoachAction) -> AppResult<()> {
        self.api
            .verify_coach(action.coach_id(), action.verified())
            .await
    }

    fn on_loaded(&self, coaches: &[CoachProfile]) {
        self.ui.set_pending_coach_count(pending_count(coaches));
    }
}

/// Controller for the coach verification screen
pub type CoachController = ResourceListController<CoachService>;

/// Mount the coach verification screen
pub fn mount(api: Arc<dyn AdminApi>, ui: Arc<UiState>, notifier: Notifier) -> CoachController {
    ResourceListController::mount(Arc::new(CoachService::new(api, ui)), notifier)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn approve_and_reject_both_confirm() {
        assert!(CoachAction::Approve("c1".to_owned()).requires_confirmation());
        assert!(CoachAction::Reject("c1".to_owned()).requires_confirmation());
        assert_eq!(
            CoachAction::Reject("c1".to_owned()).success_message(),
            "Coach rejected successfully"
        );
    }

    #[test]
    fn filter_parses_case_insensitively() {
        assert_eq!("Pending".parse::<CoachFilter>().unwrap(), CoachFilter::Pending);
        assert!("approved".parse::<CoachFilter>().is_err());
    }
}
