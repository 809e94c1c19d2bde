// ABOUTME: Route table and the guard that gates protected screens on the session state
// ABOUTME: Maps URL paths to routes and decides render, redirect or wait-for-hydration

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

//! # Routing and Route Guard
//!
//! Every protected screen is reached through [`RouteGuard::evaluate`], which
//! consults the session manager's *current* state at navigation time. Until
//! hydration has completed the guard answers [`GuardDecision::Pending`], so
//! protected content can never flash before the persisted session is known.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::session::AuthSessionManager;

/// Screens of the admin client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Sign-in form
    Login,
    /// Password reset request form
    ForgotPassword,
    /// Analytics overview, the default protected destination
    Dashboard,
    /// Coach verification queue
    Coaches,
    /// Product grid
    Store,
    /// New product form
    StoreAdd,
    /// Meal content list
    Meals,
    /// New meal form
    MealsAdd,
    /// Workout content list
    Workouts,
    /// New workout form
    WorkoutsAdd,
    /// Unknown path
    NotFound,
}

impl Route {
    /// Where a successful login lands
    pub const DEFAULT_PROTECTED: Self = Self::Dashboard;

    /// Resolve a URL path. `/` is the dashboard; unknown paths are [`Route::NotFound`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/dashboard" => Self::Dashboard,
            "/login" => Self::Login,
            "/forgot-password" => Self::ForgotPassword,
            "/coaches" => Self::Coaches,
            "/store" => Self::Store,
            "/store/add" => Self::StoreAdd,
            "/meals" => Self::Meals,
            "/meals/add" => Self::MealsAdd,
            "/workouts" => Self::Workouts,
            "/workouts/add" => Self::WorkoutsAdd,
            _ => Self::NotFound,
        }
    }

    /// Canonical path
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::ForgotPassword => "/forgot-password",
            Self::Dashboard => "/dashboard",
            Self::Coaches => "/coaches",
            Self::Store => "/store",
            Self::StoreAdd => "/store/add",
            Self::Meals => "/meals",
            Self::MealsAdd => "/meals/add",
            Self::Workouts => "/workouts",
            Self::WorkoutsAdd => "/workouts/add",
            Self::NotFound => "/404",
        }
    }

    /// Whether the route requires an authenticated session
    #[must_use]
    pub const fn is_protected(self) -> bool {
        !matches!(self, Self::Login | Self::ForgotPassword | Self::NotFound)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of guarding a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the requested route
    Render(Route),
    /// Go to this route instead
    Redirect(Route),
    /// Session not hydrated yet; render nothing protected
    Pending,
}

/// Gatekeeper for protected routes
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: Arc<AuthSessionManager>,
}

impl RouteGuard {
    /// Guard reading from `session`
    #[must_use]
    pub const fn new(session: Arc<AuthSessionManager>) -> Self {
        Self { session }
    }

    /// Decide what to show for `route`, using the session state as of now
    #[must_use]
    pub fn evaluate(&self, route: Route) -> GuardDecision {
        if !route.is_protected() {
            return GuardDecision::Render(route);
        }
        if !self.session.is_hydrated() {
            debug!(%route, "Navigation deferred until session hydration completes");
            return GuardDecision::Pending;
        }
        if self.session.is_authenticated() {
            GuardDecision::Render(route)
        } else {
            debug!(%route, "Unauthenticated navigation redirected to login");
            GuardDecision::Redirect(Route::Login)
        }
    }
}

/// Current location plus the guard that governs moving away from it
#[derive(Debug, Clone)]
pub struct Navigation {
    guard: RouteGuard,
    current: Option<Route>,
}

impl Navigation {
    /// Navigation with nothing rendered yet
    #[must_use]
    pub const fn new(guard: RouteGuard) -> Self {
        Self {
            guard,
            current: None,
        }
    }

    /// Navigate to `path`, following at most one redirect
    ///
    /// Returns the route now displayed, or `None` while hydration is pending.
    pub fn navigate(&mut self, path: &str) -> Option<Route> {
        self.go(Route::parse(path))
    }

    /// Navigate to `route`, following at most one redirect
    pub fn go(&mut self, route: Route) -> Option<Route> {
        let shown = match self.guard.evaluate(route) {
            GuardDecision::Render(route) => Some(route),
            GuardDecision::Redirect(target) => match self.guard.evaluate(target) {
                GuardDecision::Render(target) => Some(target),
                GuardDecision::Redirect(_) | GuardDecision::Pending => None,
            },
            GuardDecision::Pending => None,
        };
        self.current = shown;
        shown
    }

    /// Route currently displayed
    #[must_use]
    pub const fn current(&self) -> Option<Route> {
        self.current
    }
}

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Label
    pub label: &'static str,
    /// Destination
    pub route: Route,
    /// Shows the pending coach count
    pub badge: bool,
}

/// Sidebar entries in display order
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Dashboard",
        route: Route::Dashboard,
        badge: false,
    },
    NavItem {
        label: "Coach Verification",
        route: Route::Coaches,
        badge: true,
    },
    NavItem {
        label: "Store Management",
        route: Route::Store,
        badge: false,
    },
    NavItem {
        label: "Meals CMS",
        route: Route::Meals,
        badge: false,
    },
    NavItem {
        label: "Workouts CMS",
        route: Route::Workouts,
        badge: false,
    },
];
