// ABOUTME: Read-only analytics types shown on the dashboard overview
// ABOUTME: DashboardStats headline numbers, chart points and the reporting Period

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Headline metrics with their change over the previous period (percent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total revenue
    pub total_revenue: f64,
    /// Revenue change in percent
    pub revenue_change: f64,
    /// Active subscriptions
    pub total_subscriptions: f64,
    /// Subscription change in percent
    pub subscriptions_change: f64,
    /// Active users
    pub active_users: f64,
    /// Active user change in percent
    pub active_users_change: f64,
    /// Users registered in the period
    pub new_users: f64,
    /// New user change in percent
    pub new_users_change: f64,
}

/// One bar/point of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// Axis label
    pub name: String,
    /// Value
    pub value: f64,
}

/// Reporting window for the chart endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Last seven days
    #[default]
    #[serde(rename = "7d")]
    Week,
    /// Last thirty days
    #[serde(rename = "30d")]
    Month,
}

impl Period {
    /// Query parameter value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Self::Week),
            "30d" => Ok(Self::Month),
            other => Err(AppError::invalid_input(format!(
                "Unknown period: {other} (expected 7d or 30d)"
            ))),
        }
    }
}
