// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides model builders, an in-memory AdminApi fake and session/app wiring helpers

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::too_many_lines
)]
//! Shared test utilities for `fitglow_admin`
//!
//! [`FakeAdminApi`] keeps server-side collections in memory, records every
//! mutation it receives and can be told to fail or to hold a list response
//! until the test releases it.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::oneshot;

use fitglow_admin::client::AdminApi;
use fitglow_admin::errors::{AppError, AppResult};
use fitglow_admin::logging;
use fitglow_admin::models::{
    ChartDataPoint, CoachProfile, CreateNutritionRequest, CreateProductRequest,
    CreateWorkoutRequest, DashboardStats, Difficulty, ForgotPasswordRequest, FreeNutrition,
    FreeWorkout, LoginRequest, LoginResponse, Period, PresignedUpload, PresignedUploadRequest,
    Product, ProductCategory, UpdateProductRequest, User, UserRef, UserRole,
};
use fitglow_admin::session::{AuthSessionManager, MemorySessionStore};

static INIT_LOGGER: Once = Once::new();

/// Install the test subscriber once per binary
pub fn init_test_logging() {
    INIT_LOGGER.call_once(logging::init_for_tests);
}

// ============================================================================
// Model fixtures
// ============================================================================

pub fn user(id: &str, role: UserRole) -> User {
    let at = Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap();
    User {
        id: id.to_owned(),
        email: format!("{id}@fitglow.com"),
        role,
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        is_verified: true,
        created_at: at,
        updated_at: at,
    }
}

pub fn admin_user() -> User {
    user("admin1", UserRole::Admin)
}

pub fn coach(id: &str, verified: bool) -> CoachProfile {
    let at = Utc.with_ymd_and_hms(2025, 2, 1, 9, 30, 0).unwrap();
    CoachProfile {
        id: id.to_owned(),
        user_id: UserRef::ById(format!("user-{id}")),
        bio: "Strength coach".to_owned(),
        specialties: vec!["strength".to_owned()],
        experience_years: 5.0,
        certifications: vec!["NSCA-CSCS".to_owned()],
        social_links: Default::default(),
        average_rating: 4.5,
        is_verified: verified,
        created_at: at,
        updated_at: at,
    }
}

/// `total` coaches of which the first `unverified` are pending
pub fn roster(total: usize, unverified: usize) -> Vec<CoachProfile> {
    (0..total)
        .map(|i| coach(&format!("c{i}"), i >= unverified))
        .collect()
}

pub fn product(id: &str, category: ProductCategory) -> Product {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    Product {
        id: id.to_owned(),
        name: format!("Product {id}"),
        description: "Test product".to_owned(),
        price: 19.99,
        sale_price: None,
        images: Vec::new(),
        category,
        stock: 10.0,
        is_active: true,
        average_rating: 0.0,
        review_count: 0.0,
        sku: None,
        specifications: None,
        created_at: at,
        updated_at: at,
    }
}

pub fn new_product(name: &str) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_owned(),
        description: "Fresh stock".to_owned(),
        price: 29.5,
        sale_price: None,
        images: Vec::new(),
        category: ProductCategory::Equipment,
        stock: Some(5),
        sku: None,
        specifications: None,
    }
}

pub fn meal(id: &str) -> FreeNutrition {
    let at = Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap();
    FreeNutrition {
        id: id.to_owned(),
        title: format!("Meal {id}"),
        content: "## Ingredients\noats".to_owned(),
        image_url: String::new(),
        tags: Vec::new(),
        calories: 400.0,
        protein: 20.0,
        carbs: 50.0,
        fats: 10.0,
        created_at: at,
        updated_at: at,
    }
}

pub fn workout(id: &str, difficulty: Difficulty) -> FreeWorkout {
    let at = Utc.with_ymd_and_hms(2025, 3, 3, 12, 0, 0).unwrap();
    FreeWorkout {
        id: id.to_owned(),
        title: format!("Workout {id}"),
        description: "## Instructions\nmove".to_owned(),
        video_url: String::new(),
        thumbnail_url: None,
        difficulty,
        tags: Vec::new(),
        duration: 30.0,
        calories: 250.0,
        created_at: at,
        updated_at: at,
    }
}

pub fn stats() -> DashboardStats {
    DashboardStats {
        total_revenue: 12_500.0,
        revenue_change: 4.2,
        total_subscriptions: 320.0,
        subscriptions_change: 1.5,
        active_users: 1_250.0,
        active_users_change: -0.8,
        new_users: 85.0,
        new_users_change: 12.0,
    }
}

pub fn series(prefix: &str, n: usize) -> Vec<ChartDataPoint> {
    (0..n)
        .map(|i| ChartDataPoint {
            name: format!("{prefix}{i}"),
            value: (i + 1) as f64 * 10.0,
        })
        .collect()
}

// ============================================================================
// Fake API
// ============================================================================

/// Mutation received by the fake server
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Verify(String, bool),
    CreateProduct(String),
    UpdateProduct(String, UpdateProductRequest),
    DeleteProduct(String),
    CreateMeal(String),
    DeleteMeal(String),
    CreateWorkout(String),
    DeleteWorkout(String),
    Login(String),
    ForgotPassword(String),
    Presign(String),
}

#[derive(Default)]
pub struct FakeAdminApi {
    pub coaches: Mutex<Vec<CoachProfile>>,
    pub products: Mutex<Vec<Product>>,
    pub meals: Mutex<Vec<FreeNutrition>>,
    pub workouts: Mutex<Vec<FreeWorkout>>,
    pub calls: Mutex<Vec<Call>>,
    /// Account returned by `login`; `None` rejects every login
    pub login_user: Mutex<Option<User>>,
    pub fail_lists: AtomicBool,
    pub fail_mutations: AtomicBool,
    /// Which dashboard request fails: "stats", "revenue" or "users"
    pub fail_dashboard: Mutex<Option<&'static str>>,
    pub list_requests: AtomicUsize,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
}

impl FakeAdminApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_coaches(coaches: Vec<CoachProfile>) -> Arc<Self> {
        let api = Self::default();
        *api.coaches.lock().unwrap() = coaches;
        Arc::new(api)
    }

    pub fn with_products(products: Vec<Product>) -> Arc<Self> {
        let api = Self::default();
        *api.products.lock().unwrap() = products;
        Arc::new(api)
    }

    pub fn with_workouts(workouts: Vec<FreeWorkout>) -> Arc<Self> {
        let api = Self::default();
        *api.workouts.lock().unwrap() = workouts;
        Arc::new(api)
    }

    pub fn accepting(user: User) -> Arc<Self> {
        let api = Self::default();
        *api.login_user.lock().unwrap() = Some(user);
        Arc::new(api)
    }

    /// Hold the next list response until the returned sender fires
    ///
    /// The response contents are captured when the request arrives.
    pub fn hold_next_list(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn mutation_guard(&self) -> AppResult<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(AppError::external_service("FitGlow API", "HTTP 500"));
        }
        Ok(())
    }

    async fn list<T: Clone>(&self, items: &Mutex<Vec<T>>) -> AppResult<Vec<T>> {
        self.list_requests.fetch_add(1, Ordering::SeqCst);
        let snapshot = items.lock().unwrap().clone();
        let fail = self.fail_lists.load(Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if fail {
            return Err(AppError::external_service("FitGlow API", "HTTP 503"));
        }
        Ok(snapshot)
    }

    fn dashboard_guard(&self, part: &str) -> AppResult<()> {
        if *self.fail_dashboard.lock().unwrap() == Some(part) {
            return Err(AppError::external_service("FitGlow API", "HTTP 500"));
        }
        Ok(())
    }
}

#[async_trait]
impl AdminApi for FakeAdminApi {
    async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        self.record(Call::Login(request.email.clone()));
        let user = self.login_user.lock().unwrap().clone();
        user.map(|user| LoginResponse {
            access_token: "access-token".to_owned(),
            refresh_token: "refresh-token".to_owned(),
            user,
        })
        .ok_or_else(|| AppError::auth_required("Invalid email or password"))
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> AppResult<()> {
        self.record(Call::ForgotPassword(request.email.clone()));
        self.mutation_guard()
    }

    async fn list_coach_profiles(&self) -> AppResult<Vec<CoachProfile>> {
        self.list(&self.coaches).await
    }

    async fn verify_coach(&self, id: &str, is_verified: bool) -> AppResult<()> {
        self.mutation_guard()?;
        self.record(Call::Verify(id.to_owned(), is_verified));
        let mut coaches = self.coaches.lock().unwrap();
        let coach = coaches
            .iter_mut()
            .find(|coach| coach.id == id)
            .ok_or_else(|| AppError::not_found("Coach profile"))?;
        coach.is_verified = is_verified;
        Ok(())
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.list(&self.products).await
    }

    async fn get_product(&self, id: &str) -> AppResult<Product> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Product"))
    }

    async fn create_product(&self, request: &CreateProductRequest) -> AppResult<()> {
        self.mutation_guard()?;
        self.record(Call::CreateProduct(request.name.clone()));
        let mut products = self.products.lock().unwrap();
        let mut created = product(&format!("p{}", products.len() + 1), request.category);
        created.name.clone_from(&request.name);
        products.push(created);
        Ok(())
    }

    async fn update_product(&self, id: &str, request: &UpdateProductRequest) -> AppResult<()> {
        self.mutation_guard()?;
        self.record(Call::UpdateProduct(id.to_owned(), request.clone()));
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or_else(|| AppError::not_found("Product"))?;
        if let Some(name) = &request.name {
            product.name.clone_from(name);
        }
        if let Some(stock) = request.stock {
            product.stock = f64::from(stock);
        }
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> AppResult<()> {
        self.mutation_guard()?;
        self.record(Call::DeleteProduct(id.to_owned()));
        self.products.lock().unwrap().retain(|product| product.id != id);
        Ok(())
    }

    async fn list_meals(&self) -> AppResult<Vec<FreeNutrition>> {
        self.list(&self.meals).await
    }

    async fn create_meal(&self, request: &CreateNutritionRequest) -> AppResult<()> {
        self.mutation_guard()?;
        self.record(Call::CreateMeal(request.title.clone()));
        let mut meals = self.meals.lock().unwrap();
        let mut created = meal(&format!("m{}", meals.len() + 1));
        created.title.clone_from(&request.title);
        meals.push(created);
        Ok(())
    }

    async fn delete_meal(&self, id: &str) -> AppResult<()> {
        self.mutation_guard()?;
        self.record(Call::DeleteMeal(id.to_owned()));
        self.meals.lock().unwrap().retain(|meal| meal.id != id);
        Ok(())
    }

    async fn list_workouts(&self) -> AppResult<Vec<FreeWorkout>> {
        self.list(&self.workouts).await
    }

    async fn create_workout(&self, request: &CreateWorkoutRequest) -> AppResult<()> {
        self.mutation_guard()?;
        self.record(Call::CreateWorkout(request.title.clone()));
        let mut workouts = self.workouts.lock().unwrap();
        let mut created = workout(&format!("w{}", workouts.len() + 1), request.difficulty);
        created.title.clone_from(&request.title);
        workouts.push(created);
        Ok(())
    }

    async fn delete_workout(&self, id: &str) -> AppResult<()> {
        self.mutation_guard()?;
        self.record(Call::DeleteWorkout(id.to_owned()));
        self.workouts.lock().unwrap().retain(|workout| workout.id != id);
        Ok(())
    }

    async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        self.dashboard_guard("stats")?;
        Ok(stats())
    }

    async fn revenue_series(&self, period: Period) -> AppResult<Vec<ChartDataPoint>> {
        self.dashboard_guard("revenue")?;
        Ok(series("rev-", period_len(period)))
    }

    async fn user_growth_series(&self, period: Period) -> AppResult<Vec<ChartDataPoint>> {
        self.dashboard_guard("users")?;
        Ok(series("new-", period_len(period)))
    }

    async fn presign_upload(
        &self,
        request: &PresignedUploadRequest,
    ) -> AppResult<PresignedUpload> {
        self.mutation_guard()?;
        self.record(Call::Presign(request.file_name.clone()));
        Ok(PresignedUpload {
            upload_url: "https://upload.example.com/v1/upload".to_owned(),
            file_url: None,
            api_key: "key".to_owned(),
            timestamp: 1_700_000_000,
            signature: "sig".to_owned(),
            public_id: format!("media/{}", request.file_name),
            folder: "media".to_owned(),
        })
    }
}

const fn period_len(period: Period) -> usize {
    match period {
        Period::Week => 7,
        Period::Month => 30,
    }
}

// ============================================================================
// Session helpers
// ============================================================================

/// Manager over a fresh memory store, plus the store for inspection
pub fn memory_session() -> (Arc<AuthSessionManager>, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let manager = Arc::new(AuthSessionManager::new(store.clone()));
    (manager, store)
}

/// Hydrated manager already holding an admin session
pub fn signed_in_session() -> (Arc<AuthSessionManager>, Arc<MemorySessionStore>) {
    let (manager, store) = memory_session();
    manager.hydrate();
    manager
        .commit("access-token".to_owned(), "refresh-token".to_owned(), admin_user())
        .unwrap();
    (manager, store)
}
