// ABOUTME: Workouts CMS commands
// ABOUTME: List by difficulty, publish with optional video and thumbnail, delete after confirmation

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use anyhow::Result;

use fitglow_admin::controller::{total_pages, FetchOutcome, ListView};
use fitglow_admin::features::parse_tags;
use fitglow_admin::features::workouts::{
    self, compose_description, WorkoutAction, WorkoutController, WorkoutFilter,
};
use fitglow_admin::models::CreateWorkoutRequest;
use fitglow_admin::routing::Route;

use super::media::upload_optional;
use super::{request_with_confirmation, Context};
use crate::helpers::display;
use crate::{NewWorkoutArgs, WorkoutCommand};

async fn mounted(ctx: &mut Context, route: Route) -> Result<WorkoutController> {
    ctx.enter(route)?;
    let controller = workouts::mount(ctx.api.clone(), ctx.notifier.clone());
    if let FetchOutcome::Failed(e) = controller.fetch_all().await {
        return Err(e.into());
    }
    Ok(controller)
}

async fn create_request(ctx: &Context, args: NewWorkoutArgs) -> Result<CreateWorkoutRequest> {
    let video_url = upload_optional(ctx, args.video.as_deref()).await?;
    let thumbnail_url = upload_optional(ctx, args.thumbnail.as_deref()).await?;
    Ok(CreateWorkoutRequest {
        title: args.title,
        description: compose_description(&args.instructions, args.tips.as_deref()),
        video_url,
        thumbnail_url,
        difficulty: args.difficulty,
        tags: parse_tags(&args.tags),
        duration: args.duration,
        calories: args.calories,
    })
}

pub async fn run(ctx: &mut Context, command: WorkoutCommand) -> Result<()> {
    match command {
        WorkoutCommand::List { difficulty, page } => {
            let controller = mounted(ctx, Route::Workouts).await?;
            let mut view = ListView::new();
            view.set_filter(WorkoutFilter::from(difficulty));
            let filtered = controller.page(&view).total_items;
            view.set_page(page.page, total_pages(filtered));
            display::workouts(&controller.page(&view));
            controller.unmount();
        }
        WorkoutCommand::Add(args) => {
            ctx.enter(Route::WorkoutsAdd)?;
            let request = create_request(ctx, args).await?;
            let controller = workouts::mount(ctx.api.clone(), ctx.notifier.clone());
            controller.request(WorkoutAction::Create(request)).await?;
            controller.unmount();
        }
        WorkoutCommand::Delete { id } => {
            let controller = mounted(ctx, Route::Workouts).await?;
            let question = format!("Delete workout {id}? This cannot be undone.");
            request_with_confirmation(ctx, &controller, WorkoutAction::Delete(id), &question)
                .await?;
            controller.unmount();
        }
    }
    Ok(())
}
