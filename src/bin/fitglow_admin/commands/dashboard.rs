// ABOUTME: Analytics overview command
// ABOUTME: Loads stats and both chart series for the requested period

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use anyhow::Result;

use fitglow_admin::features::dashboard::DashboardLoader;
use fitglow_admin::models::Period;
use fitglow_admin::routing::Route;

use super::Context;
use crate::helpers::display;

pub async fn show(ctx: &mut Context, period: Period) -> Result<()> {
    ctx.enter(Route::Dashboard)?;
    let overview = DashboardLoader::new(ctx.api.clone(), ctx.notifier.clone())
        .load(period)
        .await?;
    display::dashboard(&overview);
    Ok(())
}
