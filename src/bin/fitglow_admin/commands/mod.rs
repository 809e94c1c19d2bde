// ABOUTME: Screen commands of fitglow-admin and the context they share
// ABOUTME: The context wires config, session, API client, notifications and the route guard

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

pub mod auth;
pub mod coaches;
pub mod dashboard;
pub mod media;
pub mod meals;
pub mod products;
pub mod workouts;

use std::sync::Arc;

use anyhow::{bail, Result};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use fitglow_admin::client::{AdminApi, HttpAdminClient, HttpStorageUploader};
use fitglow_admin::config::AdminConfig;
use fitglow_admin::controller::{ActionOutcome, ResourceListController, ResourceService};
use fitglow_admin::features::media::MediaUploader;
use fitglow_admin::notifications::{Notification, Notifier};
use fitglow_admin::routing::{Navigation, Route, RouteGuard};
use fitglow_admin::session::{store_for, AuthSessionManager};
use fitglow_admin::ui_state::UiState;

use crate::helpers::prompt;

/// Everything a command needs
pub struct Context {
    pub config: AdminConfig,
    pub session: Arc<AuthSessionManager>,
    pub api: Arc<dyn AdminApi>,
    pub ui: Arc<UiState>,
    pub notifier: Notifier,
    notifications: UnboundedReceiver<Notification>,
    navigation: Navigation,
    assume_yes: bool,
}

impl Context {
    /// Hydrate the stored session and build the API client
    pub fn open(config: AdminConfig, assume_yes: bool) -> Result<Self> {
        let session = Arc::new(AuthSessionManager::new(store_for(&config.session)));
        session.hydrate();

        let api: Arc<dyn AdminApi> = Arc::new(HttpAdminClient::new(&config, session.clone())?);
        let (notifier, notifications) = Notifier::channel();
        let navigation = Navigation::new(RouteGuard::new(session.clone()));

        Ok(Self {
            config,
            session,
            api,
            ui: Arc::new(UiState::new()),
            notifier,
            notifications,
            navigation,
            assume_yes,
        })
    }

    /// Navigate to `route`, failing unless the guard lets it render
    pub fn enter(&mut self, route: Route) -> Result<()> {
        match self.navigation.go(route) {
            Some(shown) if shown == route => {
                debug!(%route, "Entered screen");
                Ok(())
            }
            Some(Route::Login) => {
                bail!("Not signed in. Run `fitglow-admin login <email>` first.")
            }
            Some(other) => bail!("Cannot open {route}; redirected to {other}"),
            None => bail!("Session is not ready yet"),
        }
    }

    /// Print queued notifications to stderr
    pub fn flush_notifications(&mut self) {
        while let Ok(notification) = self.notifications.try_recv() {
            eprintln!("{notification}");
        }
    }

    /// Uploader for media attached to new content
    pub fn media(&self) -> Result<MediaUploader> {
        let storage = HttpStorageUploader::new(self.config.http_timeout)?;
        Ok(MediaUploader::new(
            self.api.clone(),
            Arc::new(storage),
            self.notifier.clone(),
        ))
    }

    /// Whether confirmation prompts are skipped
    pub const fn assume_yes(&self) -> bool {
        self.assume_yes
    }
}

/// Request `action`, asking the operator when it needs confirmation
pub async fn request_with_confirmation<S: ResourceService>(
    ctx: &Context,
    controller: &ResourceListController<S>,
    action: S::Action,
    question: &str,
) -> Result<()> {
    let outcome = controller.request(action).await?;
    if outcome != ActionOutcome::AwaitingConfirmation {
        return Ok(());
    }

    if ctx.assume_yes() || prompt::confirm(question).await? {
        controller.confirm().await?;
    } else {
        controller.cancel();
        println!("Cancelled.");
    }
    Ok(())
}
