// ABOUTME: Integration tests for the admin login, logout and password reset flows
// ABOUTME: Verifies admin-only access, generic credential errors and what gets persisted

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::{admin_user, init_test_logging, memory_session, user, Call, FakeAdminApi};
use fitglow_admin::constants::ADMIN_ONLY_MESSAGE;
use fitglow_admin::errors::ErrorCode;
use fitglow_admin::features::auth::LoginFlow;
use fitglow_admin::models::UserRole;
use fitglow_admin::notifications::{Notification, NotificationLevel, Notifier};
use fitglow_admin::routing::Route;
use fitglow_admin::session::{AuthSessionManager, MemorySessionStore};
use tokio::sync::mpsc::UnboundedReceiver;

struct Harness {
    api: Arc<FakeAdminApi>,
    session: Arc<AuthSessionManager>,
    store: Arc<MemorySessionStore>,
    flow: LoginFlow,
    notifications: UnboundedReceiver<Notification>,
}

fn harness(api: Arc<FakeAdminApi>) -> Harness {
    init_test_logging();
    let (session, store) = memory_session();
    session.hydrate();
    let (notifier, notifications) = Notifier::channel();
    let flow = LoginFlow::new(api.clone(), session.clone(), notifier);
    Harness {
        api,
        session,
        store,
        flow,
        notifications,
    }
}

#[tokio::test]
async fn admin_login_commits_session_and_lands_on_dashboard() {
    let mut h = harness(FakeAdminApi::accepting(admin_user()));

    let route = h.flow.login("admin1@fitglow.com", "secret").await.unwrap();

    assert_eq!(route, Route::Dashboard);
    assert!(h.session.is_authenticated());
    assert_eq!(h.session.access_token().as_deref(), Some("access-token"));
    assert_eq!(h.store.raw_entries().unwrap().len(), 3);
    assert_eq!(
        h.notifications.try_recv().unwrap(),
        Notification::success("Welcome back!")
    );
    assert_eq!(h.flow.whoami().unwrap(), admin_user());
}

#[tokio::test]
async fn coach_account_is_refused_and_nothing_is_persisted() {
    let mut h = harness(FakeAdminApi::accepting(user("coach1", UserRole::Coach)));

    let error = h.flow.login("coach1@fitglow.com", "secret").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::AccessDenied);
    assert_eq!(error.message, ADMIN_ONLY_MESSAGE);
    assert!(!h.session.is_authenticated());
    assert!(h.store.raw_entries().unwrap().is_empty());

    let notification = h.notifications.try_recv().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert_eq!(notification.message, ADMIN_ONLY_MESSAGE);
}

#[tokio::test]
async fn unknown_role_is_refused() {
    let h = harness(FakeAdminApi::accepting(user(
        "x",
        UserRole::Other("superuser".to_owned()),
    )));

    let error = h.flow.login("x@fitglow.com", "secret").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::AccessDenied);
    assert!(!h.session.is_authenticated());
}

#[tokio::test]
async fn rejected_credentials_give_a_generic_error() {
    let mut h = harness(FakeAdminApi::new());

    let error = h.flow.login("admin1@fitglow.com", "wrong").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidCredentials);
    assert_eq!(error.message, "Invalid credentials");
    assert!(!h.session.is_authenticated());
    assert_eq!(
        h.notifications.try_recv().unwrap(),
        Notification::error("Invalid credentials")
    );
}

#[tokio::test]
async fn malformed_form_sends_no_request() {
    let h = harness(FakeAdminApi::accepting(admin_user()));

    let bad_email = h.flow.login("not-an-email", "secret").await.unwrap_err();
    assert_eq!(bad_email.code, ErrorCode::InvalidInput);

    let no_password = h.flow.login("admin1@fitglow.com", "").await.unwrap_err();
    assert_eq!(no_password.code, ErrorCode::InvalidInput);

    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn logout_returns_to_login() {
    let h = harness(FakeAdminApi::accepting(admin_user()));
    h.flow.login("admin1@fitglow.com", "secret").await.unwrap();

    assert_eq!(h.flow.logout().unwrap(), Route::Login);
    assert!(!h.session.is_authenticated());
    assert!(h.store.raw_entries().unwrap().is_empty());
    assert_eq!(h.flow.whoami().unwrap_err().code, ErrorCode::AuthRequired);
}

#[tokio::test]
async fn forgot_password_reports_outcome() {
    let mut h = harness(FakeAdminApi::new());

    h.flow.forgot_password("admin1@fitglow.com").await.unwrap();
    assert_eq!(
        h.notifications.try_recv().unwrap(),
        Notification::success("Reset link sent to your email")
    );

    h.api.fail_mutations.store(true, Ordering::SeqCst);
    let error = h.flow.forgot_password("admin1@fitglow.com").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, "Failed to send reset link");

    assert_eq!(
        h.api.calls(),
        vec![
            Call::ForgotPassword("admin1@fitglow.com".to_owned()),
            Call::ForgotPassword("admin1@fitglow.com".to_owned()),
        ]
    );
}
