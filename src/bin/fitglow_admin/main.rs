// ABOUTME: Command line front end for the FitGlow admin client
// ABOUTME: Parses subcommands, hydrates the session and dispatches to the screen commands

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

//! # fitglow-admin
//!
//! Terminal rendition of the admin console. Each subcommand corresponds to a
//! screen; protected subcommands go through the same route guard as the
//! console and refuse to run without a stored admin session.
//!
//! ## Usage
//!
//! ```bash
//! # Sign in (prompts for the password when --password is omitted)
//! fitglow-admin login admin@fitglow.com
//!
//! # Coach verification queue, pending only, second page
//! fitglow-admin coaches list --filter pending --page 2
//!
//! # Approve without the confirmation prompt
//! fitglow-admin coaches approve 65f0c1 --yes
//!
//! # Dashboard for the last 30 days
//! fitglow-admin dashboard --period 30d
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use fitglow_admin::config::AdminConfig;
use fitglow_admin::logging;
use fitglow_admin::models::{Difficulty, Period, ProductCategory};

use commands::Context;

#[derive(Parser)]
#[command(
    name = "fitglow-admin",
    version,
    about = "FitGlow administration console",
    long_about = "Manage coach verification, the store catalog, meal and workout content, and view platform analytics"
)]
struct Cli {
    /// API base URL override (defaults to FITGLOW_API_BASE_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Keep the session in memory only; nothing is written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Answer yes to confirmation prompts
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in with an admin account
    Login {
        /// Account email
        email: String,
        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in operator
    Whoami,
    /// Request a password reset email
    ForgotPassword {
        /// Account email
        email: String,
    },
    /// Show platform analytics
    Dashboard {
        /// Reporting window: 7d or 30d
        #[arg(long, default_value = "7d")]
        period: Period,
    },
    /// Coach verification queue
    #[command(subcommand)]
    Coaches(CoachCommand),
    /// Store catalog
    #[command(subcommand)]
    Products(ProductCommand),
    /// Meal content
    #[command(subcommand)]
    Meals(MealCommand),
    /// Workout content
    #[command(subcommand)]
    Workouts(WorkoutCommand),
    /// Upload files to media storage and print their URLs
    Upload {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Page selection shared by list commands
#[derive(Args, Clone, Copy)]
struct PageArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Subcommand)]
enum CoachCommand {
    /// List coach profiles
    List {
        /// all, pending or verified
        #[arg(long, default_value = "all")]
        filter: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Mark a coach as verified
    Approve {
        /// Coach profile id
        id: String,
    },
    /// Mark a coach as unverified
    Reject {
        /// Coach profile id
        id: String,
    },
}

#[derive(Subcommand)]
enum ProductCommand {
    /// List products
    List {
        /// Only this category
        #[arg(long)]
        category: Option<ProductCategory>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one product
    Show {
        /// Product id
        id: String,
    },
    /// Create a product
    Add(NewProductArgs),
    /// Change fields of a product
    Update(ProductPatchArgs),
    /// Delete a product
    Delete {
        /// Product id
        id: String,
    },
}

#[derive(Args)]
struct NewProductArgs {
    /// Product name
    #[arg(long)]
    name: String,
    /// Product description
    #[arg(long)]
    description: String,
    /// Price
    #[arg(long)]
    price: f64,
    /// Discounted price
    #[arg(long)]
    sale_price: Option<f64>,
    /// supplements, equipment, apparel or accessories
    #[arg(long)]
    category: ProductCategory,
    /// Units in stock
    #[arg(long, default_value_t = 0)]
    stock: u32,
    /// Stock keeping unit
    #[arg(long)]
    sku: Option<String>,
    /// Image files to upload
    #[arg(long = "image")]
    images: Vec<PathBuf>,
}

#[derive(Args)]
struct ProductPatchArgs {
    /// Product id
    id: String,
    /// New name
    #[arg(long)]
    name: Option<String>,
    /// New description
    #[arg(long)]
    description: Option<String>,
    /// New price
    #[arg(long)]
    price: Option<f64>,
    /// New sale price
    #[arg(long)]
    sale_price: Option<f64>,
    /// New category
    #[arg(long)]
    category: Option<ProductCategory>,
    /// New stock level
    #[arg(long)]
    stock: Option<u32>,
    /// New SKU
    #[arg(long)]
    sku: Option<String>,
}

#[derive(Subcommand)]
enum MealCommand {
    /// List meals
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Publish a meal
    Add(NewMealArgs),
    /// Delete a meal
    Delete {
        /// Meal id
        id: String,
    },
}

#[derive(Args)]
struct NewMealArgs {
    /// Title
    #[arg(long)]
    title: String,
    /// Ingredients
    #[arg(long)]
    ingredients: String,
    /// Preparation steps
    #[arg(long)]
    instructions: String,
    /// Energy in kcal
    #[arg(long)]
    calories: u32,
    /// Protein in grams
    #[arg(long)]
    protein: f64,
    /// Carbohydrates in grams
    #[arg(long)]
    carbs: f64,
    /// Fats in grams
    #[arg(long)]
    fats: f64,
    /// Comma separated tags
    #[arg(long, default_value = "")]
    tags: String,
    /// Cover image to upload
    #[arg(long)]
    image: Option<PathBuf>,
}

#[derive(Subcommand)]
enum WorkoutCommand {
    /// List workouts
    List {
        /// Only this difficulty
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Publish a workout
    Add(NewWorkoutArgs),
    /// Delete a workout
    Delete {
        /// Workout id
        id: String,
    },
}

#[derive(Args)]
struct NewWorkoutArgs {
    /// Title
    #[arg(long)]
    title: String,
    /// Step by step instructions
    #[arg(long)]
    instructions: String,
    /// Optional coaching tips
    #[arg(long)]
    tips: Option<String>,
    /// Beginner, Intermediate or Advanced
    #[arg(long)]
    difficulty: Difficulty,
    /// Duration in minutes
    #[arg(long)]
    duration: u32,
    /// Estimated calories burned
    #[arg(long)]
    calories: u32,
    /// Comma separated tags
    #[arg(long, default_value = "")]
    tags: String,
    /// Video file to upload
    #[arg(long)]
    video: Option<PathBuf>,
    /// Thumbnail image to upload
    #[arg(long)]
    thumbnail: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AdminConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_base_url(api_url)?;
    }
    if cli.ephemeral {
        config = config.ephemeral();
    }
    if cli.verbose {
        config.logging.level = "debug".to_owned();
    }
    logging::init(&config.logging)?;
    debug!(api_base_url = %config.api_base_url, "fitglow-admin starting");

    let mut ctx = Context::open(config, cli.yes)?;
    let result = dispatch(&mut ctx, cli.command).await;
    ctx.flush_notifications();
    result
}

async fn dispatch(ctx: &mut Context, command: Command) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            commands::auth::login(ctx, &email, password).await
        }
        Command::Logout => commands::auth::logout(ctx),
        Command::Whoami => commands::auth::whoami(ctx),
        Command::ForgotPassword { email } => commands::auth::forgot_password(ctx, &email).await,
        Command::Dashboard { period } => commands::dashboard::show(ctx, period).await,
        Command::Coaches(command) => commands::coaches::run(ctx, command).await,
        Command::Products(command) => commands::products::run(ctx, command).await,
        Command::Meals(command) => commands::meals::run(ctx, command).await,
        Command::Workouts(command) => commands::workouts::run(ctx, command).await,
        Command::Upload { files } => commands::media::upload(ctx, &files).await,
    }
}
