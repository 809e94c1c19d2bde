// ABOUTME: Integration tests for the route guard and navigation
// ABOUTME: Protected routes wait for hydration, then render or redirect based on the live session

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{admin_user, memory_session, signed_in_session};
use fitglow_admin::routing::{GuardDecision, Navigation, Route, RouteGuard};
use fitglow_admin::session::{AuthSessionManager, MemorySessionStore};

const PROTECTED: [Route; 8] = [
    Route::Dashboard,
    Route::Coaches,
    Route::Store,
    Route::StoreAdd,
    Route::Meals,
    Route::MealsAdd,
    Route::Workouts,
    Route::WorkoutsAdd,
];

#[test]
fn protected_routes_are_pending_before_hydration() {
    let (session, _store) = memory_session();
    let guard = RouteGuard::new(session);

    for route in PROTECTED {
        assert_eq!(guard.evaluate(route), GuardDecision::Pending, "{route}");
    }
}

#[test]
fn public_routes_render_before_hydration() {
    let (session, _store) = memory_session();
    let guard = RouteGuard::new(session);

    assert_eq!(guard.evaluate(Route::Login), GuardDecision::Render(Route::Login));
    assert_eq!(
        guard.evaluate(Route::ForgotPassword),
        GuardDecision::Render(Route::ForgotPassword)
    );
}

#[test]
fn signed_out_operator_is_redirected_to_login() {
    let (session, _store) = memory_session();
    session.hydrate();
    let guard = RouteGuard::new(session);

    for route in PROTECTED {
        assert_eq!(
            guard.evaluate(route),
            GuardDecision::Redirect(Route::Login),
            "{route}"
        );
    }
}

#[test]
fn signed_in_operator_sees_protected_routes() {
    let (session, _store) = signed_in_session();
    let guard = RouteGuard::new(session);

    for route in PROTECTED {
        assert_eq!(guard.evaluate(route), GuardDecision::Render(route));
    }
}

#[test]
fn guard_reads_session_at_navigation_time() {
    let (session, _store) = memory_session();
    session.hydrate();
    let mut navigation = Navigation::new(RouteGuard::new(session.clone()));

    assert_eq!(navigation.navigate("/coaches"), Some(Route::Login));

    session
        .commit("tok".to_owned(), "ref".to_owned(), admin_user())
        .unwrap();
    assert_eq!(navigation.navigate("/coaches"), Some(Route::Coaches));
    assert_eq!(navigation.current(), Some(Route::Coaches));

    session.logout().unwrap();
    assert_eq!(navigation.navigate("/store/add"), Some(Route::Login));
}

#[test]
fn hydrated_session_from_storage_unlocks_routes() {
    let store = Arc::new(MemorySessionStore::new());
    let writer = AuthSessionManager::new(store.clone());
    writer
        .commit("tok".to_owned(), "ref".to_owned(), admin_user())
        .unwrap();

    let session = Arc::new(AuthSessionManager::new(store));
    let mut navigation = Navigation::new(RouteGuard::new(session.clone()));
    assert_eq!(navigation.go(Route::Dashboard), None);
    assert_eq!(navigation.current(), None);

    session.hydrate();
    assert_eq!(navigation.go(Route::Dashboard), Some(Route::Dashboard));
}

#[test]
fn paths_resolve_to_routes() {
    assert_eq!(Route::parse("/"), Route::Dashboard);
    assert_eq!(Route::parse("/store/add/"), Route::StoreAdd);
    assert_eq!(Route::parse("/workouts?page=2"), Route::Workouts);
    assert_eq!(Route::parse("/nope"), Route::NotFound);
    assert!(!Route::NotFound.is_protected());
    assert_eq!(Route::WorkoutsAdd.path(), "/workouts/add");
}
