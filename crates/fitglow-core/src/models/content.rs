// ABOUTME: Free workout and free nutrition content managed through the CMS screens
// ABOUTME: Defines FreeWorkout, FreeNutrition, Difficulty and their create request bodies

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Workout difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Entry level
    Beginner,
    /// Some training experience required
    Intermediate,
    /// Experienced athletes
    Advanced,
}

impl Difficulty {
    /// Every level, easiest first
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown difficulty: {s}")))
    }
}

/// Free workout video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeWorkout {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Title
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Hosted video URL
    #[serde(default)]
    pub video_url: String,
    /// Preview image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Duration in minutes
    #[serde(default)]
    pub duration: f64,
    /// Estimated calories burned
    #[serde(default)]
    pub calories: f64,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update
    pub updated_at: DateTime<Utc>,
}

/// `POST /workouts` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Uploaded video URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Uploaded preview image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Search tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Duration in minutes
    pub duration: u32,
    /// Estimated calories burned
    pub calories: u32,
}

/// Free meal / nutrition article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeNutrition {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Title
    pub title: String,
    /// Article body
    #[serde(default)]
    pub content: String,
    /// Cover image URL
    #[serde(default)]
    pub image_url: String,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Energy in kcal
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs: f64,
    /// Fats in grams
    #[serde(default)]
    pub fats: f64,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update
    pub updated_at: DateTime<Utc>,
}

/// `POST /nutrition` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNutritionRequest {
    /// Title
    pub title: String,
    /// Article body
    pub content: String,
    /// Uploaded cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Search tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fats in grams
    pub fats: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nutrition_accepts_fractional_calories() {
        let meal: FreeNutrition = serde_json::from_value(json!({
            "_id": "m1",
            "title": "Overnight oats",
            "calories": 350.5,
            "protein": 12,
            "createdAt": "2025-03-01T07:00:00Z",
            "updatedAt": "2025-03-01T07:00:00Z"
        }))
        .unwrap();

        assert!((meal.calories - 350.5).abs() < f64::EPSILON);
        assert!((meal.protein - 12.0).abs() < f64::EPSILON);
        assert!(meal.content.is_empty());
    }

    #[test]
    fn workout_accepts_fractional_duration() {
        let workout: FreeWorkout = serde_json::from_value(json!({
            "_id": "w1",
            "title": "Core burner",
            "difficulty": "Beginner",
            "duration": 12.5,
            "calories": 98.4,
            "createdAt": "2025-03-01T07:00:00Z",
            "updatedAt": "2025-03-01T07:00:00Z"
        }))
        .unwrap();

        assert!((workout.duration - 12.5).abs() < f64::EPSILON);
        assert!((workout.calories - 98.4).abs() < f64::EPSILON);
    }
}
