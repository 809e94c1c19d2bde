// ABOUTME: Integration tests for the analytics overview loader
// ABOUTME: The three dashboard requests succeed together or the whole load fails

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{stats, FakeAdminApi};
use fitglow_admin::errors::ErrorCode;
use fitglow_admin::features::dashboard::DashboardLoader;
use fitglow_admin::models::Period;
use fitglow_admin::notifications::{Notification, Notifier};

#[tokio::test]
async fn overview_combines_stats_and_series() {
    let loader = DashboardLoader::new(FakeAdminApi::new(), Notifier::silent());

    let overview = loader.load(Period::Week).await.unwrap();

    assert_eq!(overview.period, Period::Week);
    assert_eq!(overview.stats, stats());
    assert_eq!(overview.revenue.len(), 7);
    assert_eq!(overview.user_growth.len(), 7);
    // 10 + 20 + ... + 70
    assert!((overview.revenue_total() - 280.0).abs() < f64::EPSILON);
    assert!((overview.new_users_total() - 280.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn month_period_is_forwarded() {
    let loader = DashboardLoader::new(FakeAdminApi::new(), Notifier::silent());

    let overview = loader.load(Period::Month).await.unwrap();

    assert_eq!(overview.revenue.len(), 30);
    assert_eq!(overview.user_growth.len(), 30);
}

#[tokio::test]
async fn any_failed_part_fails_the_whole_load() {
    for part in ["stats", "revenue", "users"] {
        let api = FakeAdminApi::new();
        *api.fail_dashboard.lock().unwrap() = Some(part);
        let (notifier, mut rx) = Notifier::channel();
        let loader = DashboardLoader::new(api, notifier);

        let error = loader.load(Period::Week).await.unwrap_err();

        assert_eq!(error.code, ErrorCode::ExternalServiceError, "{part}");
        assert_eq!(
            rx.try_recv().unwrap(),
            Notification::error("Failed to load dashboard")
        );
        assert!(rx.try_recv().is_err());
    }
}
