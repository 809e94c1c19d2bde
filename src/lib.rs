// ABOUTME: Main library entry point for the FitGlow admin client
// ABOUTME: Session lifecycle, route guard, REST client and the list controllers behind every admin screen

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

#![deny(unsafe_code)]

//! # FitGlow Admin
//!
//! Client-side core of the FitGlow administration console: an
//! authentication-gated set of CRUD screens over coach verification, the
//! store catalog, meal and workout content, plus a read-only analytics
//! overview.
//!
//! ## Architecture
//!
//! - **Session**: persisted operator session and the auth state machine
//! - **Routing**: route table and the guard gating protected screens
//! - **Client**: the REST API seam and its reqwest implementation
//! - **Controller**: generic list-mutate-refresh controller
//! - **Features**: per-screen instantiations of the controller and flows
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fitglow_admin::client::HttpAdminClient;
//! use fitglow_admin::config::AdminConfig;
//! use fitglow_admin::errors::AppResult;
//! use fitglow_admin::routing::{GuardDecision, Route, RouteGuard};
//! use fitglow_admin::session::{store_for, AuthSessionManager};
//!
//! fn main() -> AppResult<()> {
//!     let config = AdminConfig::from_env()?;
//!     let session = Arc::new(AuthSessionManager::new(store_for(&config.session)));
//!     session.hydrate();
//!
//!     let _client = HttpAdminClient::new(&config, session.clone())?;
//!     let guard = RouteGuard::new(session);
//!     if guard.evaluate(Route::Dashboard) == GuardDecision::Redirect(Route::Login) {
//!         println!("Please log in");
//!     }
//!     Ok(())
//! }
//! ```

/// REST API and storage provider clients
pub mod client;

/// Environment-driven configuration
pub mod config;

/// Application constants
pub mod constants;

/// Generic resource list controller
pub mod controller;

/// Per-screen flows and controllers
pub mod features;

/// Tracing subscriber setup
pub mod logging;

/// Operator notifications
pub mod notifications;

/// Routes and the route guard
pub mod routing;

/// Session persistence and auth state
pub mod session;

/// Cross-screen UI state
pub mod ui_state;

pub use fitglow_core::{errors, models};
