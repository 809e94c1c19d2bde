// ABOUTME: Wire data model shared by the FitGlow admin client
// ABOUTME: Re-exports user, coach, product, content, dashboard and media types

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

//! Server-owned records and request bodies.
//!
//! Field names follow the REST API's camelCase JSON. Every record is
//! identified by an opaque server-assigned `_id`; the client never creates ids.

mod coach;
mod content;
mod dashboard;
mod media;
mod product;
mod user;

pub use coach::{CoachProfile, VerifyCoachRequest};
pub use content::{
    CreateNutritionRequest, CreateWorkoutRequest, Difficulty, FreeNutrition, FreeWorkout,
};
pub use dashboard::{ChartDataPoint, DashboardStats, Period};
pub use media::{PresignedUpload, PresignedUploadRequest, UploadResult};
pub use product::{CreateProductRequest, Product, ProductCategory, UpdateProductRequest};
pub use user::{ForgotPasswordRequest, LoginRequest, LoginResponse, User, UserRef, UserRole};
