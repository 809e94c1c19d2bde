// ABOUTME: Meals CMS: free nutrition articles listing, creation and deletion
// ABOUTME: Builds the article body from the ingredients and instructions entered by the operator

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::AdminApi;
use crate::controller::{MutationAction, NoFilter, ResourceListController, ResourceService};
use crate::errors::AppResult;
use crate::models::{CreateNutritionRequest, FreeNutrition};
use crate::notifications::Notifier;

use super::{require_non_negative, require_text};

/// Meal content mutations
#[derive(Debug, Clone, PartialEq)]
pub enum MealAction {
    /// Publish a meal
    Create(CreateNutritionRequest),
    /// Remove a meal
    Delete(String),
}

impl MutationAction for MealAction {
    fn requires_confirmation(&self) -> bool {
        matches!(self, Self::Delete(_))
    }

    fn success_message(&self) -> String {
        match self {
            Self::Create(_) => "Meal created successfully",
            Self::Delete(_) => "Meal deleted",
        }
        .to_owned()
    }

    fn failure_message(&self) -> String {
        match self {
            Self::Create(_) => "Failed to create meal",
            Self::Delete(_) => "Failed to delete meal",
        }
        .to_owned()
    }

    fn validate(&self) -> AppResult<()> {
        match self {
            Self::Create(request) => {
                require_text("Title", &request.title)?;
                require_text("Content", &request.content)?;
                require_non_negative("Protein", request.protein)?;
                require_non_negative("Carbs", request.carbs)?;
                require_non_negative("Fats", request.fats)
            }
            Self::Delete(id) => require_text("Meal id", id),
        }
    }
}

/// Markdown article body with ingredient and instruction sections
#[must_use]
pub fn compose_content(ingredients: &str, instructions: &str) -> String {
    format!(
        "## Ingredients\n{}\n\n## Instructions\n{}",
        ingredients.trim(),
        instructions.trim()
    )
}

/// The meals list has no filter
pub type MealFilter = NoFilter;

/// Nutrition endpoints
pub struct MealService {
    api: Arc<dyn AdminApi>,
}

impl MealService {
    /// Service over `api`
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ResourceService for MealService {
    type Item = FreeNutrition;
    type Action = MealAction;

    fn resource_name(&self) -> &'static str {
        "meals"
    }

    async fn fetch_all(&self) -> AppResult<Vec<FreeNutrition>> {
        self.api.list_meals().await
    }

    async fn execute(&self, action: &MealAction) -> AppResult<()> {
        match action {
            MealAction::Create(request) => self.api.create_meal(request).await,
            MealAction::Delete(id) => self.api.delete_meal(id).await,
        }
    }
}

/// Controller for the meals CMS screen
pub type MealController = ResourceListController<MealService>;

/// Mount the meals CMS screen
pub fn mount(api: Arc<dyn AdminApi>, notifier: Notifier) -> MealController {
    ResourceListController::mount(Arc::new(MealService::new(api)), notifier)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn content_has_both_sections() {
        let body = compose_content(" oats\nmilk ", "mix");
        assert_eq!(body, "## Ingredients\noats\nmilk\n\n## Instructions\nmix");
    }

    #[test]
    fn delete_needs_confirmation_create_does_not() {
        assert!(MealAction::Delete("m1".to_owned()).requires_confirmation());
        let create = MealAction::Create(CreateNutritionRequest {
            title: "Overnight oats".to_owned(),
            content: compose_content("oats", "soak"),
            image_url: None,
            tags: Vec::new(),
            calories: 350,
            protein: 12.0,
            carbs: 55.0,
            fats: 8.0,
        });
        assert!(!create.requires_confirmation());
        assert!(create.validate().is_ok());
    }
}
