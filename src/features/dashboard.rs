// ABOUTME: Analytics overview: headline stats plus revenue and user growth series
// ABOUTME: The three requests run concurrently and succeed or fail together

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::AdminApi;
use crate::errors::AppResult;
use crate::models::{ChartDataPoint, DashboardStats, Period};
use crate::notifications::Notifier;

/// Everything the overview screen renders for one period
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    /// Period the series cover
    pub period: Period,
    /// Headline numbers
    pub stats: DashboardStats,
    /// Revenue per bucket
    pub revenue: Vec<ChartDataPoint>,
    /// New users per bucket
    pub user_growth: Vec<ChartDataPoint>,
}

/// Loads the analytics overview
#[derive(Clone)]
pub struct DashboardLoader {
    api: Arc<dyn AdminApi>,
    notifier: Notifier,
}

impl DashboardLoader {
    /// Loader over `api`
    pub fn new(api: Arc<dyn AdminApi>, notifier: Notifier) -> Self {
        Self { api, notifier }
    }

    /// Fetch stats and both series for `period`
    ///
    /// # Errors
    ///
    /// Returns the first failure among the three requests; no partial
    /// overview is produced.
    pub async fn load(&self, period: Period) -> AppResult<DashboardOverview> {
        debug!(%period, "Loading dashboard");
        let result = tokio::try_join!(
            self.api.dashboard_stats(),
            self.api.revenue_series(period),
            self.api.user_growth_series(period),
        );

        match result {
            Ok((stats, revenue, user_growth)) => Ok(DashboardOverview {
                period,
                stats,
                revenue,
                user_growth,
            }),
            Err(e) => {
                warn!(%period, error = %e, "Dashboard load failed");
                self.notifier.error("Failed to load dashboard");
                Err(e)
            }
        }
    }
}

impl DashboardOverview {
    /// Sum of the revenue series
    #[must_use]
    pub fn revenue_total(&self) -> f64 {
        self.revenue.iter().map(|point| point.value).sum()
    }

    /// Sum of the user growth series
    #[must_use]
    pub fn new_users_total(&self) -> f64 {
        self.user_growth.iter().map(|point| point.value).sum()
    }
}
