// ABOUTME: Store catalog commands
// ABOUTME: List, inspect, create, patch and delete products

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use anyhow::Result;

use fitglow_admin::controller::{total_pages, FetchOutcome, ListView};
use fitglow_admin::features::store::{
    self, ProductAction, ProductFilter, ProductService, StoreController,
};
use fitglow_admin::models::{CreateProductRequest, UpdateProductRequest};
use fitglow_admin::routing::Route;

use super::media::read_all;
use super::{request_with_confirmation, Context};
use crate::helpers::display;
use crate::{NewProductArgs, ProductCommand, ProductPatchArgs};

async fn mounted(ctx: &mut Context, route: Route) -> Result<StoreController> {
    ctx.enter(route)?;
    let controller = store::mount(ctx.api.clone(), ctx.notifier.clone());
    if let FetchOutcome::Failed(e) = controller.fetch_all().await {
        return Err(e.into());
    }
    Ok(controller)
}

async fn create_request(ctx: &Context, args: NewProductArgs) -> Result<CreateProductRequest> {
    let images = if args.images.is_empty() {
        Vec::new()
    } else {
        ctx.media()?.upload_many(read_all(&args.images)?).await?
    };
    Ok(CreateProductRequest {
        name: args.name,
        description: args.description,
        price: args.price,
        sale_price: args.sale_price,
        images,
        category: args.category,
        stock: Some(args.stock),
        sku: args.sku.filter(|sku| !sku.trim().is_empty()),
        specifications: None,
    })
}

fn patch(args: ProductPatchArgs) -> (String, UpdateProductRequest) {
    (
        args.id,
        UpdateProductRequest {
            name: args.name,
            description: args.description,
            price: args.price,
            sale_price: args.sale_price,
            category: args.category,
            stock: args.stock,
            sku: args.sku,
            ..UpdateProductRequest::default()
        },
    )
}

pub async fn run(ctx: &mut Context, command: ProductCommand) -> Result<()> {
    match command {
        ProductCommand::List { category, page } => {
            let controller = mounted(ctx, Route::Store).await?;
            let mut view = ListView::new();
            view.set_filter(ProductFilter::from(category));
            let filtered = controller.page(&view).total_items;
            view.set_page(page.page, total_pages(filtered));
            display::products(&controller.page(&view));
            controller.unmount();
        }
        ProductCommand::Show { id } => {
            ctx.enter(Route::Store)?;
            let product = ProductService::new(ctx.api.clone()).get(&id).await?;
            display::product_detail(&product);
        }
        ProductCommand::Add(args) => {
            ctx.enter(Route::StoreAdd)?;
            let request = create_request(ctx, args).await?;
            let controller = store::mount(ctx.api.clone(), ctx.notifier.clone());
            controller.request(ProductAction::Create(request)).await?;
            controller.unmount();
        }
        ProductCommand::Update(args) => {
            let controller = mounted(ctx, Route::Store).await?;
            let (id, patch) = patch(args);
            controller.request(ProductAction::Update { id, patch }).await?;
            controller.unmount();
        }
        ProductCommand::Delete { id } => {
            let controller = mounted(ctx, Route::Store).await?;
            let question = format!("Delete product {id}? This cannot be undone.");
            request_with_confirmation(ctx, &controller, ProductAction::Delete(id), &question)
                .await?;
            controller.unmount();
        }
    }
    Ok(())
}
