// ABOUTME: Sign-in, sign-out, identity and password reset commands
// ABOUTME: Thin wrappers around LoginFlow that print the outcome

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use anyhow::Result;
use tracing::info;

use fitglow_admin::features::auth::LoginFlow;
use fitglow_admin::routing::Route;

use super::Context;
use crate::helpers::{display, prompt};

fn flow(ctx: &Context) -> LoginFlow {
    LoginFlow::new(ctx.api.clone(), ctx.session.clone(), ctx.notifier.clone())
}

pub async fn login(ctx: &mut Context, email: &str, password: Option<String>) -> Result<()> {
    ctx.enter(Route::Login)?;
    let password = match password {
        Some(password) => password,
        None => prompt::password().await?,
    };

    let target = flow(ctx).login(email, &password).await?;
    ctx.enter(target)?;
    info!(%target, "Signed in");
    if let Some(user) = ctx.session.current_user() {
        println!("Signed in as {} <{}>", user.full_name(), user.email);
    }
    Ok(())
}

pub fn logout(ctx: &mut Context) -> Result<()> {
    let target = flow(ctx).logout()?;
    ctx.enter(target)?;
    println!("Signed out.");
    Ok(())
}

pub fn whoami(ctx: &mut Context) -> Result<()> {
    ctx.enter(Route::Dashboard)?;
    let user = flow(ctx).whoami()?;
    display::user(&user);
    Ok(())
}

pub async fn forgot_password(ctx: &mut Context, email: &str) -> Result<()> {
    ctx.enter(Route::ForgotPassword)?;
    flow(ctx).forgot_password(email).await?;
    println!("If an account exists for {email}, a reset link is on its way.");
    Ok(())
}
