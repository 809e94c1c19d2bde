// ABOUTME: Workouts CMS: free workout listing, creation and deletion with a difficulty filter
// ABOUTME: Builds the workout description from instructions and optional tips

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::AdminApi;
use crate::controller::{ListFilter, MutationAction, ResourceListController, ResourceService};
use crate::errors::{AppError, AppResult};
use crate::models::{CreateWorkoutRequest, Difficulty, FreeWorkout};
use crate::notifications::Notifier;

use super::require_text;

/// Workout content mutations
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutAction {
    /// Publish a workout
    Create(CreateWorkoutRequest),
    /// Remove a workout
    Delete(String),
}

impl MutationAction for WorkoutAction {
    fn requires_confirmation(&self) -> bool {
        matches!(self, Self::Delete(_))
    }

    fn success_message(&self) -> String {
        match self {
            Self::Create(_) => "Workout created successfully",
            Self::Delete(_) => "Workout deleted",
        }
        .to_owned()
    }

    fn failure_message(&self) -> String {
        match self {
            Self::Create(_) => "Failed to create workout",
            Self::Delete(_) => "Failed to delete workout",
        }
        .to_owned()
    }

    fn validate(&self) -> AppResult<()> {
        match self {
            Self::Create(request) => {
                require_text("Title", &request.title)?;
                require_text("Description", &request.description)?;
                if request.duration == 0 {
                    return Err(AppError::invalid_input("Duration is required"));
                }
                Ok(())
            }
            Self::Delete(id) => require_text("Workout id", id),
        }
    }
}

/// Markdown description with an instructions section and optional tips
#[must_use]
pub fn compose_description(instructions: &str, tips: Option<&str>) -> String {
    let mut description = format!("## Instructions\n{}", instructions.trim());
    if let Some(tips) = tips.map(str::trim).filter(|tips| !tips.is_empty()) {
        description.push_str("\n\n## Tips\n");
        description.push_str(tips);
    }
    description
}

/// Difficulty filter for the workout list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkoutFilter {
    /// Every workout
    #[default]
    All,
    /// Workouts of one level
    Difficulty(Difficulty),
}

impl ListFilter<FreeWorkout> for WorkoutFilter {
    fn matches(&self, workout: &FreeWorkout) -> bool {
        match self {
            Self::All => true,
            Self::Difficulty(level) => workout.difficulty == *level,
        }
    }
}

impl From<Option<Difficulty>> for WorkoutFilter {
    fn from(level: Option<Difficulty>) -> Self {
        level.map_or(Self::All, Self::Difficulty)
    }
}

/// Workout endpoints
pub struct WorkoutService {
    api: Arc<dyn AdminApi>,
}

impl WorkoutService {
    /// Service over `api`
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ResourceService for WorkoutService {
    type Item = FreeWorkout;
    type Action = WorkoutAction;

    fn resource_name(&self) -> &'static str {
        "workouts"
    }

    async fn fetch_all(&self) -> AppResult<Vec<FreeWorkout>> {
        self.api.list_workouts().await
    }

    async fn execute(&self, action: &WorkoutAction) -> AppResult<()> {
        match action {
            WorkoutAction::Create(request) => self.api.create_workout(request).await,
            WorkoutAction::Delete(id) => self.api.delete_workout(id).await,
        }
    }
}

/// Controller for the workouts CMS screen
pub type WorkoutController = ResourceListController<WorkoutService>;

/// Mount the workouts CMS screen
pub fn mount(api: Arc<dyn AdminApi>, notifier: Notifier) -> WorkoutController {
    ResourceListController::mount(Arc::new(WorkoutService::new(api)), notifier)
}
