// ABOUTME: Tracing subscriber setup for the admin client binaries
// ABOUTME: Honors RUST_LOG, falls back to the configured level, supports text and JSON output

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::{AppError, AppResult};

/// Install the global tracing subscriber
///
/// Logs go to stderr so command output on stdout stays machine readable.
///
/// # Errors
///
/// Returns `ConfigError` if the level directive is invalid, or `InternalError`
/// if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> AppResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| AppError::config(format!("Invalid log level '{}': {e}", config.level)))?,
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    let result = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))
}

/// Best-effort subscriber for tests; repeated calls are ignored
pub fn init_for_tests() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("fitglow_admin=debug"))
        .with_test_writer()
        .try_init();
}
