// ABOUTME: Outbound gateway to the FitGlow REST API and the media storage provider
// ABOUTME: AdminApi trait describes every endpoint; HttpAdminClient implements it with reqwest

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

//! # HTTP Client Adapter
//!
//! [`AdminApi`] is the seam between the admin client's controllers and the
//! network. [`HttpAdminClient`] is the production implementation; it attaches
//! the current bearer token to every request in a single place. Tests swap in
//! in-memory implementations of the trait.

/// reqwest implementation of [`AdminApi`]
pub mod http;

/// Direct uploads to the storage provider
pub mod storage;

use async_trait::async_trait;

pub use http::HttpAdminClient;
pub use storage::{HttpStorageUploader, StorageUploader, UploadFile};

use crate::errors::AppResult;
use crate::models::{
    ChartDataPoint, CoachProfile, CreateNutritionRequest, CreateProductRequest,
    CreateWorkoutRequest, DashboardStats, ForgotPasswordRequest, FreeNutrition, FreeWorkout,
    LoginRequest, LoginResponse, Period, PresignedUpload, PresignedUploadRequest, Product,
    UpdateProductRequest,
};

/// Supplies the access token attached to outbound requests
pub trait BearerTokenSource: Send + Sync {
    /// Token to send, or `None` to send the request unauthenticated
    fn bearer_token(&self) -> Option<String>;
}

/// Every REST endpoint the admin client consumes
///
/// Mutations resolve to `()` as soon as the server answers with a 2xx
/// status. Screens re-read the collection afterwards, so the echoed
/// document is never decoded.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse>;

    /// `POST /auth/forgot-password`
    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> AppResult<()>;

    /// `GET /coach-profile`
    async fn list_coach_profiles(&self) -> AppResult<Vec<CoachProfile>>;

    /// `PUT /coach-profile/{id}/verify`
    async fn verify_coach(&self, id: &str, is_verified: bool) -> AppResult<()>;

    /// `GET /products`
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: &str) -> AppResult<Product>;

    /// `POST /products`
    async fn create_product(&self, request: &CreateProductRequest) -> AppResult<()>;

    /// `PUT /products/{id}`
    async fn update_product(&self, id: &str, request: &UpdateProductRequest) -> AppResult<()>;

    /// `DELETE /products/{id}`
    async fn delete_product(&self, id: &str) -> AppResult<()>;

    /// `GET /nutrition`
    async fn list_meals(&self) -> AppResult<Vec<FreeNutrition>>;

    /// `POST /nutrition`
    async fn create_meal(&self, request: &CreateNutritionRequest) -> AppResult<()>;

    /// `DELETE /nutrition/{id}`
    async fn delete_meal(&self, id: &str) -> AppResult<()>;

    /// `GET /workouts`
    async fn list_workouts(&self) -> AppResult<Vec<FreeWorkout>>;

    /// `POST /workouts`
    async fn create_workout(&self, request: &CreateWorkoutRequest) -> AppResult<()>;

    /// `DELETE /workouts/{id}`
    async fn delete_workout(&self, id: &str) -> AppResult<()>;

    /// `GET /admin/dashboard`
    async fn dashboard_stats(&self) -> AppResult<DashboardStats>;

    /// `GET /admin/dashboard/revenue?period=`
    async fn revenue_series(&self, period: Period) -> AppResult<Vec<ChartDataPoint>>;

    /// `GET /admin/dashboard/users-growth?period=`
    async fn user_growth_series(&self, period: Period) -> AppResult<Vec<ChartDataPoint>>;

    /// `POST /media/presigned-url`
    async fn presign_upload(&self, request: &PresignedUploadRequest)
        -> AppResult<PresignedUpload>;
}
