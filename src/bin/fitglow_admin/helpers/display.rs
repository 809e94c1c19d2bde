// ABOUTME: Plain-text rendering of admin screens for the terminal
// ABOUTME: Tables for list pages, detail blocks and the dashboard summary

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use fitglow_admin::controller::ListPage;
use fitglow_admin::features::dashboard::DashboardOverview;
use fitglow_admin::models::{CoachProfile, FreeNutrition, FreeWorkout, Product, User};
use fitglow_admin::routing::NAV_ITEMS;

fn footer<T>(page: &ListPage<T>) {
    if page.total_pages > 1 {
        println!("\nPage {} of {} ({} items)", page.page, page.total_pages, page.total_items);
    } else {
        println!("\n{} items", page.total_items);
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{cut}…")
}

pub fn sidebar(pending_coaches: usize) {
    let entries: Vec<String> = NAV_ITEMS
        .iter()
        .map(|item| {
            if item.badge && pending_coaches > 0 {
                format!("{} ({pending_coaches})", item.label)
            } else {
                item.label.to_owned()
            }
        })
        .collect();
    println!("{}\n", entries.join(" | "));
}

pub fn user(user: &User) {
    println!("{} <{}>", user.full_name(), user.email);
    println!("  id:   {}", user.id);
    println!("  role: {}", user.role);
}

pub fn coaches(page: &ListPage<CoachProfile>) {
    if page.rows.is_empty() {
        println!("No coaches found");
        return;
    }
    println!(
        "{:<26} {:<28} {:>10} {:>6} {:>6} {:<8}",
        "ID", "COACH", "EXPERIENCE", "RATING", "CERTS", "STATUS"
    );
    for coach in &page.rows {
        println!(
            "{:<26} {:<28} {:>7} yrs {:>6.1} {:>6} {:<8}",
            coach.id,
            truncate(&coach.display_name(), 28),
            coach.experience_years,
            coach.average_rating,
            coach.certifications.len(),
            if coach.is_verified { "Verified" } else { "Pending" }
        );
    }
    footer(page);
}

pub fn products(page: &ListPage<Product>) {
    if page.rows.is_empty() {
        println!("No products yet");
        return;
    }
    println!(
        "{:<26} {:<30} {:<12} {:>10} {:>6} {:<8}",
        "ID", "NAME", "CATEGORY", "PRICE", "STOCK", "STATUS"
    );
    for product in &page.rows {
        let price = product.sale_price.map_or_else(
            || format!("{:.2}", product.price),
            |sale| format!("{sale:.2}*"),
        );
        println!(
            "{:<26} {:<30} {:<12} {:>10} {:>6} {:<8}",
            product.id,
            truncate(&product.name, 30),
            product.category,
            price,
            product.stock,
            if product.is_active { "Active" } else { "Inactive" }
        );
    }
    footer(page);
}

pub fn product_detail(product: &Product) {
    println!("{} ({})", product.name, product.id);
    println!("  category: {}", product.category);
    match product.sale_price {
        Some(sale) => println!("  price:    {sale:.2} (was {:.2})", product.price),
        None => println!("  price:    {:.2}", product.price),
    }
    println!("  stock:    {}", product.stock);
    println!(
        "  rating:   {:.1} ({} reviews)",
        product.average_rating, product.review_count
    );
    if let Some(sku) = &product.sku {
        println!("  sku:      {sku}");
    }
    for image in &product.images {
        println!("  image:    {image}");
    }
    if let Some(specifications) = &product.specifications {
        for (key, value) in specifications {
            println!("  {key}: {value}");
        }
    }
    println!("\n{}", product.description);
}

pub fn meals(page: &ListPage<FreeNutrition>) {
    if page.rows.is_empty() {
        println!("No meals yet");
        return;
    }
    println!(
        "{:<26} {:<32} {:>6} {:>7} {:>7} {:>7}",
        "ID", "TITLE", "KCAL", "PROTEIN", "CARBS", "FATS"
    );
    for meal in &page.rows {
        println!(
            "{:<26} {:<32} {:>6} {:>6.0}g {:>6.0}g {:>6.0}g",
            meal.id,
            truncate(&meal.title, 32),
            meal.calories,
            meal.protein,
            meal.carbs,
            meal.fats
        );
    }
    footer(page);
}

pub fn workouts(page: &ListPage<FreeWorkout>) {
    if page.rows.is_empty() {
        println!("No workouts yet");
        return;
    }
    println!(
        "{:<26} {:<32} {:<13} {:>8} {:>6}",
        "ID", "TITLE", "DIFFICULTY", "DURATION", "KCAL"
    );
    for workout in &page.rows {
        println!(
            "{:<26} {:<32} {:<13} {:>5} min {:>6}",
            workout.id,
            truncate(&workout.title, 32),
            workout.difficulty,
            workout.duration,
            workout.calories
        );
    }
    footer(page);
}

pub fn dashboard(overview: &DashboardOverview) {
    let stats = &overview.stats;
    println!("Overview ({})", overview.period);
    println!(
        "  Total revenue:       {:>12.2} ({:+.1}%)",
        stats.total_revenue, stats.revenue_change
    );
    println!(
        "  Total subscriptions: {:>12} ({:+.1}%)",
        stats.total_subscriptions, stats.subscriptions_change
    );
    println!(
        "  Active users:        {:>12} ({:+.1}%)",
        stats.active_users, stats.active_users_change
    );
    println!(
        "  New users:           {:>12} ({:+.1}%)",
        stats.new_users, stats.new_users_change
    );

    println!("\nRevenue (total {:.2})", overview.revenue_total());
    for point in &overview.revenue {
        println!("  {:<12} {:>12.2}", point.name, point.value);
    }
    println!("\nNew users (total {:.0})", overview.new_users_total());
    for point in &overview.user_growth {
        println!("  {:<12} {:>12.0}", point.name, point.value);
    }
}
