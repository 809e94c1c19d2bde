// ABOUTME: Meals CMS commands
// ABOUTME: List, publish and delete free nutrition content

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use anyhow::Result;

use fitglow_admin::controller::{total_pages, FetchOutcome, ListView};
use fitglow_admin::features::meals::{self, compose_content, MealAction, MealController, MealFilter};
use fitglow_admin::features::parse_tags;
use fitglow_admin::models::CreateNutritionRequest;
use fitglow_admin::routing::Route;

use super::media::upload_optional;
use super::{request_with_confirmation, Context};
use crate::helpers::display;
use crate::{MealCommand, NewMealArgs};

async fn mounted(ctx: &mut Context, route: Route) -> Result<MealController> {
    ctx.enter(route)?;
    let controller = meals::mount(ctx.api.clone(), ctx.notifier.clone());
    if let FetchOutcome::Failed(e) = controller.fetch_all().await {
        return Err(e.into());
    }
    Ok(controller)
}

async fn create_request(ctx: &Context, args: NewMealArgs) -> Result<CreateNutritionRequest> {
    let image_url = upload_optional(ctx, args.image.as_deref()).await?;
    Ok(CreateNutritionRequest {
        title: args.title,
        content: compose_content(&args.ingredients, &args.instructions),
        image_url,
        tags: parse_tags(&args.tags),
        calories: args.calories,
        protein: args.protein,
        carbs: args.carbs,
        fats: args.fats,
    })
}

pub async fn run(ctx: &mut Context, command: MealCommand) -> Result<()> {
    match command {
        MealCommand::List { page } => {
            let controller = mounted(ctx, Route::Meals).await?;
            let mut view = ListView::<MealFilter>::new();
            view.set_page(page.page, total_pages(controller.items().len()));
            display::meals(&controller.page(&view));
            controller.unmount();
        }
        MealCommand::Add(args) => {
            ctx.enter(Route::MealsAdd)?;
            let request = create_request(ctx, args).await?;
            let controller = meals::mount(ctx.api.clone(), ctx.notifier.clone());
            controller.request(MealAction::Create(request)).await?;
            controller.unmount();
        }
        MealCommand::Delete { id } => {
            let controller = mounted(ctx, Route::Meals).await?;
            let question = format!("Delete meal {id}? This cannot be undone.");
            request_with_confirmation(ctx, &controller, MealAction::Delete(id), &question).await?;
            controller.unmount();
        }
    }
    Ok(())
}
