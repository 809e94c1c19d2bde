// ABOUTME: Coach verification commands
// ABOUTME: Lists the queue with the pending badge and approves or rejects coaches after confirmation

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use anyhow::Result;

use fitglow_admin::controller::{total_pages, FetchOutcome, ListView};
use fitglow_admin::features::coaches::{self, CoachAction, CoachController, CoachFilter};
use fitglow_admin::routing::Route;

use super::{request_with_confirmation, Context};
use crate::helpers::display;
use crate::CoachCommand;

async fn mounted(ctx: &mut Context) -> Result<CoachController> {
    ctx.enter(Route::Coaches)?;
    let controller = coaches::mount(ctx.api.clone(), ctx.ui.clone(), ctx.notifier.clone());
    if let FetchOutcome::Failed(e) = controller.fetch_all().await {
        return Err(e.into());
    }
    Ok(controller)
}

pub async fn run(ctx: &mut Context, command: CoachCommand) -> Result<()> {
    let controller = mounted(ctx).await?;
    match command {
        CoachCommand::List { filter, page } => {
            let mut view = ListView::new();
            view.set_filter(filter.parse::<CoachFilter>()?);
            let filtered = controller.page(&view).total_items;
            view.set_page(page.page, total_pages(filtered));

            display::sidebar(ctx.ui.pending_coach_count());
            display::coaches(&controller.page(&view));
        }
        CoachCommand::Approve { id } => {
            let question = format!("Approve coach {id}?");
            request_with_confirmation(ctx, &controller, CoachAction::Approve(id), &question)
                .await?;
        }
        CoachCommand::Reject { id } => {
            let question = format!("Reject coach {id}? This will mark them as unverified.");
            request_with_confirmation(ctx, &controller, CoachAction::Reject(id), &question)
                .await?;
        }
    }
    controller.unmount();
    Ok(())
}
