// ABOUTME: reqwest-based AdminApi implementation for the FitGlow REST API
// ABOUTME: Builds endpoint URLs, attaches the bearer token and maps HTTP failures to AppError

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::{AdminApi, BearerTokenSource};
use crate::config::AdminConfig;
use crate::constants::API_SERVICE_NAME;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{
    ChartDataPoint, CoachProfile, CreateNutritionRequest, CreateProductRequest,
    CreateWorkoutRequest, DashboardStats, ForgotPasswordRequest, FreeNutrition, FreeWorkout,
    LoginRequest, LoginResponse, Period, PresignedUpload, PresignedUploadRequest, Product,
    UpdateProductRequest, VerifyCoachRequest,
};

/// FitGlow REST API client
///
/// Reads the bearer token from its [`BearerTokenSource`] on every request,
/// so a login or logout takes effect for the very next call.
pub struct HttpAdminClient {
    base_url: Url,
    http_client: Client,
    tokens: Arc<dyn BearerTokenSource>,
}

impl HttpAdminClient {
    /// Create a client for `config.api_base_url`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL cannot carry path segments, or
    /// `InternalError` if the HTTP client cannot be built.
    pub fn new(config: &AdminConfig, tokens: Arc<dyn BearerTokenSource>) -> AppResult<Self> {
        if config.api_base_url.cannot_be_a_base() {
            return Err(AppError::config(format!(
                "API base URL cannot be used as a base: {}",
                config.api_base_url
            )));
        }

        let http_client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.api_base_url.clone(),
            http_client,
            tokens,
        })
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `base_url` + `segments`, each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::config("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> AppResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        debug!(%method, path = url.path(), "Sending API request");
        let builder = self.http_client.request(method, url);
        Ok(match self.tokens.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(builder: RequestBuilder) -> AppResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::external_service(API_SERVICE_NAME, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body);
        warn!(%status, message = message.as_deref().unwrap_or(""), "API request failed");
        Err(error_for_status(status, message))
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> AppResult<T> {
        let response = Self::send(self.request(Method::GET, segments)?).await?;
        decode(response).await
    }

    async fn send_json<B, T>(&self, method: Method, segments: &[&str], body: &B) -> AppResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = Self::send(self.request(method, segments)?.json(body)).await?;
        decode(response).await
    }

    /// Send `body` and accept any 2xx answer without decoding it
    async fn send_command<B>(&self, method: Method, segments: &[&str], body: &B) -> AppResult<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        let response = Self::send(self.request(method, segments)?.json(body)).await?;
        drain(response).await;
        Ok(())
    }

    async fn delete(&self, segments: &[&str]) -> AppResult<()> {
        drain(Self::send(self.request(Method::DELETE, segments)?).await?).await;
        Ok(())
    }

    async fn get_series(&self, segments: &[&str], period: Period) -> AppResult<Vec<ChartDataPoint>> {
        let builder = self
            .request(Method::GET, segments)?
            .query(&[("period", period.as_str())]);
        decode(Self::send(builder).await?).await
    }
}

/// Read and drop a success body; the change is already committed server-side
async fn drain(response: Response) {
    if let Err(e) = response.bytes().await {
        debug!(error = %e, "Discarding unreadable response body");
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::external_service(API_SERVICE_NAME, format!("JSON parse error: {e}")))
}

/// Extract the `message` field of an error body; validation errors send a list
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        Value::String(message) => Some(message.clone()),
        Value::Array(messages) => Some(
            messages
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("; "),
        ),
        _ => None,
    }
}

fn error_for_status(status: StatusCode, message: Option<String>) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => AppError::auth_required(
            message.unwrap_or_else(|| "Session expired or invalid; please log in again".to_owned()),
        ),
        StatusCode::FORBIDDEN => {
            AppError::access_denied(message.unwrap_or_else(|| "Forbidden".to_owned()))
        }
        StatusCode::NOT_FOUND => message.map_or_else(
            || AppError::not_found("Resource"),
            |m| AppError::new(ErrorCode::ResourceNotFound, m),
        ),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => AppError::invalid_input(
            message.unwrap_or_else(|| format!("Request rejected with HTTP {status}")),
        ),
        _ => AppError::external_service(
            API_SERVICE_NAME,
            message.map_or_else(
                || format!("Request failed with HTTP {status}"),
                |m| format!("HTTP {status}: {m}"),
            ),
        ),
    }
}

#[async_trait]
impl AdminApi for HttpAdminClient {
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        self.send_json(Method::POST, &["auth", "login"], request)
            .await
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> AppResult<()> {
        let builder = self
            .request(Method::POST, &["auth", "forgot-password"])?
            .json(request);
        Self::send(builder).await?;
        Ok(())
    }

    async fn list_coach_profiles(&self) -> AppResult<Vec<CoachProfile>> {
        self.get_json(&["coach-profile"]).await
    }

    async fn verify_coach(&self, id: &str, is_verified: bool) -> AppResult<()> {
        self.send_command(
            Method::PUT,
            &["coach-profile", id, "verify"],
            &VerifyCoachRequest { is_verified },
        )
        .await
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.get_json(&["products"]).await
    }

    async fn get_product(&self, id: &str) -> AppResult<Product> {
        self.get_json(&["products", id]).await
    }

    async fn create_product(&self, request: &CreateProductRequest) -> AppResult<()> {
        self.send_command(Method::POST, &["products"], request)
            .await
    }

    async fn update_product(&self, id: &str, request: &UpdateProductRequest) -> AppResult<()> {
        self.send_command(Method::PUT, &["products", id], request)
            .await
    }

    async fn delete_product(&self, id: &str) -> AppResult<()> {
        self.delete(&["products", id]).await
    }

    async fn list_meals(&self) -> AppResult<Vec<FreeNutrition>> {
        self.get_json(&["nutrition"]).await
    }

    async fn create_meal(&self, request: &CreateNutritionRequest) -> AppResult<()> {
        self.send_command(Method::POST, &["nutrition"], request)
            .await
    }

    async fn delete_meal(&self, id: &str) -> AppResult<()> {
        self.delete(&["nutrition", id]).await
    }

    async fn list_workouts(&self) -> AppResult<Vec<FreeWorkout>> {
        self.get_json(&["workouts"]).await
    }

    async fn create_workout(&self, request: &CreateWorkoutRequest) -> AppResult<()> {
        self.send_command(Method::POST, &["workouts"], request)
            .await
    }

    async fn delete_workout(&self, id: &str) -> AppResult<()> {
        self.delete(&["workouts", id]).await
    }

    async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        self.get_json(&["admin", "dashboard"]).await
    }

    async fn revenue_series(&self, period: Period) -> AppResult<Vec<ChartDataPoint>> {
        self.get_series(&["admin", "dashboard", "revenue"], period)
            .await
    }

    async fn user_growth_series(&self, period: Period) -> AppResult<Vec<ChartDataPoint>> {
        self.get_series(&["admin", "dashboard", "users-growth"], period)
            .await
    }

    async fn presign_upload(
        &self,
        request: &PresignedUploadRequest,
    ) -> AppResult<PresignedUpload> {
        self.send_json(Method::POST, &["media", "presigned-url"], request)
            .await
    }
}
